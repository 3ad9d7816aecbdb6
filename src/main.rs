//! HAProxy health check plugin.
//!
//! # Architecture Overview
//!
//! ```text
//!   -H/-p/-u, --config
//!         │
//!         ▼
//!   ┌──────────┐    ┌──────────┐    ┌──────────┐    ┌──────────┐
//!   │  config  │───▶│  fetch   │───▶│  report  │───▶│ verdict  │───▶ stdout + exit code
//!   │ resolve  │    │ GET ;csv │    │  parse   │    │  tally   │
//!   └──────────┘    └──────────┘    └──────────┘    └──────────┘
//! ```
//!
//! Exit codes: 0 OK, 1 WARNING (reserved), 2 CRITICAL, 3 UNKNOWN.

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use check_haproxy::cli::Cli;
use check_haproxy::config::{load_config, resolve, CheckConfig};
use check_haproxy::observability::logging;
use check_haproxy::{probe, Status};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let rendered = e.to_string();
            let detail = rendered.lines().next().unwrap_or_default();
            println!("UNKNOWN: {}", detail.trim_start_matches("error: "));
            return Status::Unknown.into();
        }
    };

    logging::init(cli.verbose);

    let mut config = match cli.config.as_deref() {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                println!("UNKNOWN: {}", e);
                return Status::Unknown.into();
            }
        },
        None => CheckConfig::default(),
    };
    cli.apply(&mut config);

    let probe_config = match resolve(&config) {
        Ok(probe_config) => probe_config,
        Err(e) => {
            println!("UNKNOWN: {}", e);
            println!("{}", Cli::help());
            return Status::Unknown.into();
        }
    };

    let verdict = probe::check(&probe_config).await;
    println!("{}", verdict);
    verdict.status().into()
}
