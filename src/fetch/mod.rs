//! Report retrieval.
//!
//! # Responsibilities
//! - Perform the single HTTP GET against the stats URL
//! - Surface transport failures and non-success statuses as `FetchError`
//!
//! # Design Decisions
//! - No retries or backoff; a failed fetch ends the run with UNKNOWN
//! - Timeout is opt-in (`--timeout` / `http.timeout_secs`)

pub mod client;

pub use client::{FetchError, ReportFetcher};
