//! Aggregation and verdict reporting.
//!
//! # Data Flow
//! ```text
//! Report rows
//!     → tally.rs (per-cluster UP/DOWN counts, first-seen order)
//!     → overall status: OK, or CRITICAL once any server is DOWN
//!     → Verdict (status + single output line)
//!     → exit code, mapped once in main
//! ```

pub mod status;
pub mod tally;

use std::fmt;

pub use status::Status;
pub use tally::{ClusterCounts, ClusterTally};

use crate::report::{Report, Row};

/// Prefix of every verdict line.
pub const PLUGIN_NAME: &str = "HAPROXY";

/// Tally plus overall status for one report.
#[derive(Debug, Clone)]
pub struct Aggregate {
    pub tally: ClusterTally,
    pub status: Status,
}

/// Fold every row of `report` into a fresh tally.
///
/// A single `DOWN` server makes the result CRITICAL regardless of row order.
pub fn aggregate(report: &Report<'_>) -> Aggregate {
    let mut tally = ClusterTally::new();
    let mut status = Status::Ok;

    for row in report.rows() {
        tally.observe(row);
        if let Row::Server { cluster, server, status: tally::DOWN } = row {
            tracing::debug!(cluster, server, "Server is DOWN");
            status = Status::Critical;
        }
    }

    Aggregate { tally, status }
}

/// Final outcome of a run: a status and the line printed on stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    status: Status,
    message: String,
}

impl Verdict {
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Verdict for a completed check.
    pub fn from_aggregate(aggregate: &Aggregate) -> Self {
        let summary = aggregate.tally.summary();
        match aggregate.status {
            Status::Ok | Status::Critical => Self::new(
                aggregate.status,
                format!("{} {} - {}", PLUGIN_NAME, aggregate.status, summary),
            ),
            _ => Self::new(Status::Unknown, format!("{} UNKNOWN ERROR", PLUGIN_NAME)),
        }
    }

    /// Verdict for a run that could not complete.
    pub fn from_error(error: &dyn std::error::Error) -> Self {
        Self::new(
            Status::Unknown,
            format!("{} UNKNOWN ERROR: {}", PLUGIN_NAME, error),
        )
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
