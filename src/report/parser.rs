//! CSV report parsing.
//!
//! The body is split on `\n`, the header line is dropped without being
//! checked, blank lines are skipped and every other line becomes a [`Row`].

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::report::row::{status_keyword, Row, CLUSTER_FIELD, ENTITY_FIELD, STATUS_FIELD};

// Start-anchored: any entity name beginning with FRONTEND or BACKEND is an aggregate row.
static AGGREGATE_ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(BACK|FRONT)END").expect("Invalid aggregate entity regex"));

/// Errors raised while parsing the report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A row is too short to carry the columns it needs.
    #[error("malformed report line {line}: expected at least {expected} fields, found {found}")]
    MalformedRow {
        /// 1-based line number in the response body (the header is line 1).
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// Result type for report parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// The parsed data rows of one stats report, in body order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report<'a> {
    rows: Vec<Row<'a>>,
}

impl<'a> Report<'a> {
    /// Parse a raw response body.
    ///
    /// Stops at the first malformed row.
    pub fn parse(body: &'a str) -> ParseResult<Self> {
        let rows = body
            .split('\n')
            .enumerate()
            .skip(1)
            .filter(|(_, line)| !line.is_empty())
            .map(|(index, line)| parse_line(line, index + 1))
            .collect::<ParseResult<Vec<_>>>()?;

        tracing::debug!(rows = rows.len(), "Stats report parsed");
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Row<'a>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Classify one non-blank data line.
pub fn parse_line(line: &str, line_no: usize) -> ParseResult<Row<'_>> {
    let fields: Vec<&str> = line.split(',').collect();

    let malformed = |expected: usize| ParseError::MalformedRow {
        line: line_no,
        expected,
        found: fields.len(),
    };

    let cluster = fields[CLUSTER_FIELD];
    let entity = *fields.get(ENTITY_FIELD).ok_or_else(|| malformed(ENTITY_FIELD + 1))?;

    if AGGREGATE_ENTITY.is_match(entity) {
        tracing::trace!(cluster, entity, "Aggregate row");
        return Ok(Row::Aggregate { cluster, entity });
    }

    let status = *fields.get(STATUS_FIELD).ok_or_else(|| malformed(STATUS_FIELD + 1))?;
    Ok(Row::Server {
        cluster,
        server: entity,
        status: status_keyword(status),
    })
}
