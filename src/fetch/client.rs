//! HTTP retrieval of the CSV stats page.

use std::error::Error as StdError;

use thiserror::Error;
use url::Url;

use crate::config::ProbeConfig;

/// Errors that can occur while fetching the report.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The resolved stats URL is not a valid URL.
    #[error("invalid stats url {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport failure, non-success status, or unreadable body.
    #[error("{}", describe(.0))]
    Request(#[from] reqwest::Error),
}

/// Flatten an error and its sources into one line, e.g.
/// `error sending request for url (...): client error (Connect): tcp connect error: Connection refused`.
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// Fetches the raw report from one HAProxy instance.
///
/// Issues exactly one GET per call. No retries.
#[derive(Debug, Clone)]
pub struct ReportFetcher {
    client: reqwest::Client,
}

impl ReportFetcher {
    pub fn new(config: &ProbeConfig) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(FetchError::Client)?;

        Ok(Self { client })
    }

    /// GET `url` and return the body text.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        tracing::debug!(url = %parsed, "Fetching stats report");

        let response = self.client.get(parsed).send().await?.error_for_status()?;
        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(status = %status, bytes = body.len(), "Stats report received");
        Ok(body)
    }
}
