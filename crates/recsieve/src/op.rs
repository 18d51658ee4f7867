//! Comparison operators for query conditions.
//!
//! The grammar only knows three operators. Which of them apply to a record
//! value depends on the value's kind, see [`Condition::matches`].
//!
//! [`Condition::matches`]: crate::Condition::matches

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MalformedReason, QueryError};

/// Comparison operator for a condition.
///
/// - `Eq` works on numbers and, case-insensitively, on everything else
/// - `Lt` and `Gt` only ever match numeric record values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Op {
    /// `=`
    #[serde(rename = "=")]
    Eq,
    /// `<`
    #[serde(rename = "<")]
    Lt,
    /// `>`
    #[serde(rename = ">")]
    Gt,
}

impl Op {
    /// Evaluates the operator given the ordering of record value vs literal.
    ///
    /// `None` (an unordered pair, e.g. NaN) never matches.
    pub fn eval_ordering(self, ordering: Option<Ordering>) -> bool {
        match (self, ordering) {
            (Op::Eq, Some(Ordering::Equal)) => true,
            (Op::Lt, Some(Ordering::Less)) => true,
            (Op::Gt, Some(Ordering::Greater)) => true,
            _ => false,
        }
    }

    /// Returns the query-language symbol of this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "=",
            Op::Lt => "<",
            Op::Gt => ">",
        }
    }
}

impl FromStr for Op {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" => Ok(Op::Eq),
            "<" => Ok(Op::Lt),
            ">" => Ok(Op::Gt),
            other => Err(QueryError::malformed(MalformedReason::InvalidCondition, other)),
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
