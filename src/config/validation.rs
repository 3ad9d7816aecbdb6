//! Configuration validation.
//!
//! Turns a merged `CheckConfig` into a `ProbeConfig`. Required options are
//! checked in a fixed order (hostname, then port) and the first missing one
//! is reported. An empty string counts as missing.

use std::time::Duration;

use thiserror::Error;

use crate::config::schema::{CheckConfig, ProbeConfig};

/// Required options, in the order they are checked.
pub const REQUIRED_OPTIONS: [&str; 2] = ["hostname", "port"];

/// Errors raised while validating options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required option was absent or empty.
    #[error("Missing required parameter {0}")]
    MissingParameter(&'static str),
}

/// Validate a merged configuration and resolve it into probe settings.
pub fn resolve(config: &CheckConfig) -> Result<ProbeConfig, ValidationError> {
    let hostname = required(config.target.hostname.as_deref(), REQUIRED_OPTIONS[0])?;
    let port = required(config.target.port.as_deref(), REQUIRED_OPTIONS[1])?;

    Ok(ProbeConfig {
        hostname: hostname.to_string(),
        port: port.to_string(),
        uri: config.target.uri.clone().unwrap_or_default(),
        timeout: config.http.timeout_secs.map(Duration::from_secs),
        user_agent: config.http.user_agent.clone(),
    })
}

fn required<'a>(value: Option<&'a str>, name: &'static str) -> Result<&'a str, ValidationError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ValidationError::MissingParameter(name)),
    }
}
