//! Error types for the recsieve crate.

use thiserror::Error;

/// Errors raised while parsing a query.
///
/// Evaluation never fails: records that cannot be compared are simply
/// excluded from the result, so this enum only describes parse failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The query text does not follow `WHERE <field><op><value> [AND ...]`.
    #[error("malformed query: {reason}: '{fragment}'")]
    MalformedQuery {
        reason: MalformedReason,
        /// The part of the input that failed to parse.
        fragment: String,
    },
}

impl QueryError {
    pub(crate) fn malformed(reason: MalformedReason, fragment: impl Into<String>) -> Self {
        QueryError::MalformedQuery {
            reason,
            fragment: fragment.into(),
        }
    }

    /// Returns why the query was rejected.
    pub fn reason(&self) -> MalformedReason {
        match self {
            QueryError::MalformedQuery { reason, .. } => *reason,
        }
    }
}

/// Why a query was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MalformedReason {
    /// The query was empty or whitespace only.
    Empty,
    /// The query does not start with the `WHERE` keyword.
    MissingWhere,
    /// A conjunct is not of the form `field OP value`.
    InvalidCondition,
}

impl MalformedReason {
    /// Returns a short human readable description.
    pub fn as_str(self) -> &'static str {
        match self {
            MalformedReason::Empty => "query is empty",
            MalformedReason::MissingWhere => "query must start with WHERE",
            MalformedReason::InvalidCondition => "invalid condition",
        }
    }
}

impl std::fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result type for recsieve operations.
pub type Result<T> = std::result::Result<T, QueryError>;
