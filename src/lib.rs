//! HAProxy health check plugin library.

pub mod cli;
pub mod config;
pub mod fetch;
pub mod observability;
pub mod probe;
pub mod report;
pub mod verdict;

pub use config::ProbeConfig;
pub use probe::{check, run, ProbeError};
pub use verdict::{Status, Verdict};
