//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via `tracing`
//! - Nothing but the verdict is written to stdout; the plugin harness reads it

pub mod logging;
