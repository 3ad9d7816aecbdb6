//! Configuration schema definitions.
//!
//! `CheckConfig` is what a config file deserializes into; every field is
//! optional so that command-line flags can fill in the rest.
//! `ProbeConfig` is the validated, immutable result handed to the probe.

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize};

/// Default `User-Agent` sent with the stats request.
pub const DEFAULT_USER_AGENT: &str = concat!("check-haproxy/", env!("CARGO_PKG_VERSION"));

/// Root configuration as read from a TOML file.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CheckConfig {
    /// Which HAProxy stats page to query.
    pub target: TargetConfig,

    /// HTTP client settings.
    pub http: HttpConfig,
}

/// Location of the HAProxy stats page.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TargetConfig {
    /// Hostname or IP address of the HAProxy server.
    pub hostname: Option<String>,

    /// Port of the stats listener. Accepts a TOML string or integer.
    #[serde(deserialize_with = "deserialize_port")]
    pub port: Option<String>,

    /// Sub-path of the stats page, inserted before `/;csv`.
    pub uri: Option<String>,
}

/// HTTP client configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct HttpConfig {
    /// Overall request timeout in seconds. Absent means no client-side timeout.
    pub timeout_secs: Option<u64>,

    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PortValue {
    Text(String),
    Number(u64),
}

fn deserialize_port<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<PortValue>::deserialize(deserializer)?;
    Ok(value.map(|port| match port {
        PortValue::Text(text) => text,
        PortValue::Number(number) => number.to_string(),
    }))
}

/// Fully resolved probe settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    pub hostname: String,
    pub port: String,
    pub uri: String,
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl ProbeConfig {
    /// URL of the CSV export: `http://<hostname>:<port>/<uri>/;csv`.
    ///
    /// Plain concatenation, so an empty uri yields `//;csv` and slashes
    /// inside `uri` are kept as given.
    pub fn stats_url(&self) -> String {
        format!("http://{}:{}/{}/;csv", self.hostname, self.port, self.uri)
    }
}
