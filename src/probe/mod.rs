//! The check pipeline.
//!
//! ```text
//! ProbeConfig → ReportFetcher (one GET) → Report::parse → aggregate → Verdict
//! ```
//!
//! Every failure comes back as a value; only `main` decides the exit code.

use thiserror::Error;

use crate::config::ProbeConfig;
use crate::fetch::{FetchError, ReportFetcher};
use crate::report::{ParseError, Report};
use crate::verdict::{aggregate, Status, Verdict};

/// Errors that stop a check before a verdict line can be built.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl ProbeError {
    /// Every probe failure is reported as UNKNOWN.
    pub fn status(&self) -> Status {
        Status::Unknown
    }
}

/// Result type for the check pipeline.
pub type ProbeResult<T> = Result<T, ProbeError>;

/// Fetch, parse and aggregate one stats report.
pub async fn run(config: &ProbeConfig) -> ProbeResult<Verdict> {
    let url = config.stats_url();
    tracing::debug!(
        url = %url,
        timeout_secs = config.timeout.map(|t| t.as_secs()),
        "Starting check"
    );

    let fetcher = ReportFetcher::new(config)?;
    let body = fetcher.fetch(&url).await?;
    let report = Report::parse(&body)?;
    let aggregate = aggregate(&report);

    Ok(Verdict::from_aggregate(&aggregate))
}

/// Like [`run`], but folds failures into an UNKNOWN verdict.
pub async fn check(config: &ProbeConfig) -> Verdict {
    let verdict = match run(config).await {
        Ok(verdict) => verdict,
        Err(e) => {
            tracing::warn!(error = %e, "Check failed");
            Verdict::from_error(&e)
        }
    };

    tracing::info!(status = %verdict.status(), "Check complete");
    verdict
}
