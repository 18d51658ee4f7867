//! Condition parser for `WHERE` queries.
//!
//! The grammar is flat, so there is no tokenizer: the text after `WHERE` is
//! split on the `AND` keyword and every conjunct is matched against one
//! `field OP value` pattern.
//!
//! ```text
//! query     = "WHERE" [ condition { "AND" condition } ]
//! condition = field ( "=" | "<" | ">" ) value
//! field     = word characters
//! value     = "'" text "'" | number | bare text
//! ```
//!
//! `WHERE` and `AND` are case-insensitive. Field names and values are kept as
//! written. A bare `WHERE` yields an empty query, which matches every record.
//!
//! Each conjunct is searched for its first `word OP rest` match, so any text
//! before the field is skipped: `vessel.name='Aurora'` compares `name`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::condition::Condition;
use crate::error::{MalformedReason, QueryError, Result};
use crate::query::Query;
use crate::value::Literal;

const WHERE: &str = "WHERE";

static AND_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bAND\b").expect("AND splitter is a valid regex"));

static CONDITION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)(\w+)\s*(=|<|>)\s*(.+)").expect("condition pattern is a valid regex")
});

/// Parses a query string into a [`Query`].
///
/// # Errors
///
/// Returns [`QueryError::MalformedQuery`] if the query is empty, does not
/// start with `WHERE`, or contains a conjunct with no `field OP value` in it.
/// No partial query is returned.
///
/// # Example
///
/// ```
/// use recsieve::{parse_query, Literal, Op};
///
/// let query = parse_query("WHERE length > 200 AND type = 'Tanker'").unwrap();
/// let conds = query.conditions();
/// assert_eq!(conds.len(), 2);
/// assert_eq!(conds[0].op, Op::Gt);
/// assert_eq!(conds[1].literal, Literal::Text("Tanker".into()));
/// ```
pub fn parse(input: &str) -> Result<Query> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(QueryError::malformed(MalformedReason::Empty, input));
    }

    let rest = strip_where(trimmed)
        .ok_or_else(|| QueryError::malformed(MalformedReason::MissingWhere, trimmed))?;

    let conditions = AND_SPLIT
        .split(rest)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(parse_condition)
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(count = conditions.len(), "parsed query");
    Ok(Query::from_conditions(conditions))
}

/// Parses a single `field OP value` conjunct.
///
/// The field is the first run of word characters followed by an operator;
/// anything before it is ignored. The value is everything after the
/// operator, trimmed, then coerced with [`Literal::parse`].
///
/// ```
/// use recsieve::{parser::parse_condition, Condition, Op};
///
/// let cond = parse_condition("length>200").unwrap();
/// assert_eq!(cond, Condition::new("length", Op::Gt, 200));
/// ```
pub fn parse_condition(segment: &str) -> Result<Condition> {
    let caps = CONDITION
        .captures(segment)
        .ok_or_else(|| QueryError::malformed(MalformedReason::InvalidCondition, segment))?;

    let field = &caps[1];
    let op = caps[2].parse()?;
    let literal = Literal::parse(caps[3].trim());

    Ok(Condition::new(field, op, literal))
}

/// Strips a case-insensitive leading `WHERE`, returning the trimmed rest.
fn strip_where(query: &str) -> Option<&str> {
    let head = query.get(..WHERE.len())?;
    if !head.eq_ignore_ascii_case(WHERE) {
        return None;
    }
    Some(query[WHERE.len()..].trim())
}
