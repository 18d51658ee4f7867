//! Query builder and executor.
//!
//! A [`Query`] is an ordered conjunction of [`Condition`]s. It is usually
//! parsed from text, but can be built fluently as well:
//!
//! ```
//! use recsieve::Query;
//!
//! let parsed: Query = "WHERE length > 200 AND type = 'Tanker'".parse().unwrap();
//! let built = Query::new().and_gt("length", 200).and_eq("type", "Tanker");
//! assert_eq!(parsed, built);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::condition::Condition;
use crate::error::QueryError;
use crate::op::Op;
use crate::parser;
use crate::traits::Fields;
use crate::value::Literal;

/// An ordered conjunction of conditions.
///
/// A record matches when it satisfies every condition. Condition order never
/// changes the result, only how early a failing record is rejected. An empty
/// query matches every record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Query {
    conditions: Vec<Condition>,
}

impl Query {
    /// Creates a new empty query.
    pub fn new() -> Self {
        Query::default()
    }

    /// Parses a `WHERE ...` query string. See [`parser::parse`].
    pub fn parse(input: &str) -> crate::Result<Self> {
        parser::parse(input)
    }

    /// Wraps an already parsed list of conditions.
    pub fn from_conditions(conditions: Vec<Condition>) -> Self {
        Query { conditions }
    }

    // ========================================================================
    // Builders
    // ========================================================================

    /// Adds a condition.
    pub fn and_where(mut self, field: &str, op: Op, literal: impl Into<Literal>) -> Self {
        self.conditions.push(Condition::new(field, op, literal));
        self
    }

    /// Adds an equality condition.
    pub fn and_eq(self, field: &str, literal: impl Into<Literal>) -> Self {
        self.and_where(field, Op::Eq, literal)
    }

    /// Adds a less-than condition.
    pub fn and_lt(self, field: &str, literal: impl Into<Literal>) -> Self {
        self.and_where(field, Op::Lt, literal)
    }

    /// Adds a greater-than condition.
    pub fn and_gt(self, field: &str, literal: impl Into<Literal>) -> Self {
        self.and_where(field, Op::Gt, literal)
    }

    /// Conjunction of two queries.
    ///
    /// Filtering with the result is the same as filtering with `self` and
    /// then with `other`.
    pub fn and(mut self, other: Query) -> Self {
        self.conditions.extend(other.conditions);
        self
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns the conditions in query order.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Returns the number of conditions.
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Returns `true` if this query has no conditions (matches everything).
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Tests if a single record matches this query.
    ///
    /// Stops at the first condition the record fails.
    pub fn matches<R: Fields + ?Sized>(&self, record: &R) -> bool {
        match self.conditions.iter().find(|c| !c.matches_record(record)) {
            Some(failed) => {
                tracing::trace!(field = %failed.field, "record excluded");
                false
            }
            None => true,
        }
    }

    /// Filters a slice, returning references to matching records in input order.
    pub fn filter<'a, R: Fields>(&self, records: &'a [R]) -> Vec<&'a R> {
        let results: Vec<&'a R> = records.iter().filter(|r| self.matches(*r)).collect();
        tracing::debug!(
            scanned = records.len(),
            matched = results.len(),
            "filtered records"
        );
        results
    }

    /// Filters and clones matching records.
    pub fn filter_cloned<R: Fields + Clone>(&self, records: &[R]) -> Vec<R> {
        self.filter(records).into_iter().cloned().collect()
    }

    /// Filters a vector in place, keeping only matching records.
    pub fn filter_mut<R: Fields>(&self, records: &mut Vec<R>) {
        records.retain(|r| self.matches(r));
    }

    /// Counts the number of matching records.
    pub fn count<R: Fields>(&self, records: &[R]) -> usize {
        records.iter().filter(|r| self.matches(*r)).count()
    }

    /// Returns `true` if any record matches.
    pub fn any<R: Fields>(&self, records: &[R]) -> bool {
        records.iter().any(|r| self.matches(r))
    }

    /// Returns `true` if all records match.
    pub fn all<R: Fields>(&self, records: &[R]) -> bool {
        records.iter().all(|r| self.matches(r))
    }

    /// Finds the first matching record.
    pub fn find<'a, R: Fields>(&self, records: &'a [R]) -> Option<&'a R> {
        records.iter().find(|r| self.matches(*r))
    }

    /// Finds the first matching record and returns its index.
    pub fn position<R: Fields>(&self, records: &[R]) -> Option<usize> {
        records.iter().position(|r| self.matches(r))
    }
}

impl FromStr for Query {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}

/// Renders the canonical `WHERE a = 1 AND b = 'x'` form.
///
/// An empty query renders as a bare `WHERE`.
impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.conditions.is_empty() {
            return f.write_str("WHERE");
        }
        for (i, cond) in self.conditions.iter().enumerate() {
            let keyword = if i == 0 { "WHERE" } else { " AND" };
            write!(f, "{} {}", keyword, cond)?;
        }
        Ok(())
    }
}

impl From<Vec<Condition>> for Query {
    fn from(conditions: Vec<Condition>) -> Self {
        Query::from_conditions(conditions)
    }
}

impl IntoIterator for Query {
    type Item = Condition;
    type IntoIter = std::vec::IntoIter<Condition>;

    fn into_iter(self) -> Self::IntoIter {
        self.conditions.into_iter()
    }
}

impl<'a> IntoIterator for &'a Query {
    type Item = &'a Condition;
    type IntoIter = std::slice::Iter<'a, Condition>;

    fn into_iter(self) -> Self::IntoIter {
        self.conditions.iter()
    }
}
