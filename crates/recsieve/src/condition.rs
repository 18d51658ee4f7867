//! Atomic conditions.
//!
//! A [`Condition`] is a single `field OP literal` comparison. Its
//! [`matches`](Condition::matches) method holds the whole comparison policy.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::op::Op;
use crate::traits::Fields;
use crate::value::{Literal, Value};

/// A single filter predicate.
///
/// # Example
///
/// ```
/// use recsieve::{Condition, Op, Value};
///
/// let cond = Condition::new("length", Op::Gt, 200);
/// assert!(cond.matches(&Value::Number(300.0)));
/// assert!(!cond.matches(&Value::Text("unknown")));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// The field name to compare. Case-sensitive.
    pub field: String,
    /// The comparison operator.
    pub op: Op,
    /// The value to compare against.
    pub literal: Literal,
}

impl Condition {
    /// Creates a new condition.
    pub fn new(field: impl Into<String>, op: Op, literal: impl Into<Literal>) -> Self {
        Condition {
            field: field.into(),
            op,
            literal: literal.into(),
        }
    }

    /// Evaluates this condition against a record.
    ///
    /// A record without the field fails the condition.
    pub fn matches_record<R: Fields + ?Sized>(&self, record: &R) -> bool {
        match record.field(&self.field) {
            Some(value) => self.matches(&value),
            None => false,
        }
    }

    /// Evaluates this condition against an extracted field value.
    ///
    /// Numbers compare numerically against the literal's numeric form; a
    /// literal with no numeric form never matches. Every other non-null
    /// value supports only `=`, compared case-insensitively with surrounding
    /// whitespace ignored. Null never matches.
    pub fn matches(&self, value: &Value<'_>) -> bool {
        match value {
            Value::Null => false,
            Value::Number(n) => match self.literal.to_f64() {
                Some(lit) => self.op.eval_ordering(n.partial_cmp(&lit)),
                None => false,
            },
            Value::Text(_) | Value::Other(_) => match (self.op, value.text()) {
                (Op::Eq, Some(text)) => eq_ignore_case(text.trim(), self.literal.text().trim()),
                _ => false,
            },
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field, self.op, self.literal)
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
