//! HAProxy CSV report parsing.
//!
//! # Data Flow
//! ```text
//! response body
//!     → split on '\n', drop header line
//!     → skip blank lines
//!     → parser.rs: split on ',' and classify
//!     → Row::Aggregate (FRONTEND/BACKEND) | Row::Server (status keyword)
//! ```
//!
//! # Design Decisions
//! - Positional columns: 0 = proxy, 1 = server, 17 = status
//! - Aggregate rows only need two columns; server rows need eighteen
//! - Short rows are a `ParseError`, never a panic

pub mod parser;
pub mod row;

pub use parser::{parse_line, ParseError, ParseResult, Report};
pub use row::{status_keyword, Row};
