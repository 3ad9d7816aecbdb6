//! Command-line interface.
//!
//! `-H` and `-p` are required in practice, but clap is not told so:
//! a missing option must produce the plugin's UNKNOWN message and exit
//! code 3, not clap's own usage error.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use crate::config::CheckConfig;

#[derive(Parser, Debug, Default)]
#[command(name = "check_haproxy", version)]
#[command(
    about = "Check HAProxy backend health via the CSV stats page",
    long_about = "Fetches http://<hostname>:<port>/<uri>/;csv and reports CRITICAL if any \
                  backend server is DOWN. Prints one line per run:\n  \
                  HAPROXY <STATUS> - <cluster> (Active: <up>/<total>) ..."
)]
pub struct Cli {
    /// [required] Hostname or ip address of haproxy server
    #[arg(short = 'H', long, value_name = "hostname")]
    pub hostname: Option<String>,

    /// [required] Port number of haproxy server
    #[arg(short, long, value_name = "port")]
    pub port: Option<String>,

    /// Location of haproxy csv stats (defaults to "/")
    #[arg(short, long, value_name = "uri")]
    pub uri: Option<String>,

    /// TOML config file; command-line options override it
    #[arg(short, long, value_name = "file")]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds (no timeout by default)
    #[arg(short, long, value_name = "seconds")]
    pub timeout: Option<u64>,

    /// Log diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Overlay the options given on the command line onto `config`.
    pub fn apply(&self, config: &mut CheckConfig) {
        if let Some(hostname) = &self.hostname {
            config.target.hostname = Some(hostname.clone());
        }
        if let Some(port) = &self.port {
            config.target.port = Some(port.clone());
        }
        if let Some(uri) = &self.uri {
            config.target.uri = Some(uri.clone());
        }
        if let Some(timeout) = self.timeout {
            config.http.timeout_secs = Some(timeout);
        }
    }

    /// Rendered `--help` text.
    pub fn help() -> String {
        Cli::command().render_help().to_string()
    }
}
