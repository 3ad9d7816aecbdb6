//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! built-in defaults
//!     → loader.rs (optional TOML file)
//!     → command-line flags override file values
//!     → validation.rs (required options present)
//!     → ProbeConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Validation runs after merging so a config file can supply required options
//! - Config is immutable once resolved

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{CheckConfig, HttpConfig, ProbeConfig, TargetConfig};
pub use validation::{resolve, ValidationError};
