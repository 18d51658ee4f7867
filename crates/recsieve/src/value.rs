//! Runtime value types for field comparison.
//!
//! [`Value`] is what a record field normalizes to at evaluation time.
//! [`Literal`] is the typed constant on the right-hand side of a condition.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Normalized record value, borrowed from the source record.
///
/// Stored values are collapsed into a closed set so the comparison policy can
/// match on them exhaustively: numbers compare numerically, nulls never
/// match, and everything else compares as text.
///
/// # Example
///
/// ```
/// use recsieve::Value;
/// use serde_json::json;
///
/// let stored = json!(300);
/// assert_eq!(Value::extract(&stored), Value::Number(300.0));
///
/// let stored = json!("Tanker");
/// assert_eq!(Value::extract(&stored), Value::Text("Tanker"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// Any JSON number, widened to `f64`.
    Number(f64),
    /// String value (borrowed).
    Text(&'a str),
    /// Explicit null.
    Null,
    /// Booleans, arrays and objects, passed through unchanged.
    Other(&'a JsonValue),
}

impl<'a> Value<'a> {
    /// Normalizes a stored JSON value.
    pub fn extract(raw: &'a JsonValue) -> Self {
        match raw {
            JsonValue::Number(n) => n.as_f64().map_or(Value::Other(raw), Value::Number),
            JsonValue::String(s) => Value::Text(s),
            JsonValue::Null => Value::Null,
            other => Value::Other(other),
        }
    }

    /// Returns `true` if this is a `Null` value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if this is a `Number` value.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Extracts the number, if present.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the string, if this is a `Text` value.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Textual form used for string equality.
    ///
    /// Returns `None` for `Null`, which has no textual form and never matches.
    pub fn text(&self) -> Option<Cow<'a, str>> {
        match self {
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Text(s) => Some(Cow::Borrowed(s)),
            Value::Null => None,
            Value::Other(JsonValue::Bool(b)) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            Value::Other(v) => Some(Cow::Owned(v.to_string())),
        }
    }
}

/// Typed constant parsed from query text.
///
/// Serializes untagged, so `5` and `"5"` stay distinguishable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    /// Bare numeric token, e.g. `200` or `-3.5`.
    Number(f64),
    /// Quoted `'...'` or bare non-numeric token.
    Text(String),
}

impl Literal {
    /// Coerces a raw value token into a literal.
    ///
    /// A token wrapped in one pair of single quotes is text (the quotes are
    /// stripped, nothing inside is unescaped). Otherwise a token that parses as
    /// `f64` is a number, and anything else is bare text.
    ///
    /// ```
    /// use recsieve::Literal;
    ///
    /// assert_eq!(Literal::parse("5"), Literal::Number(5.0));
    /// assert_eq!(Literal::parse("'5'"), Literal::Text("5".into()));
    /// assert_eq!(Literal::parse("Cargo"), Literal::Text("Cargo".into()));
    /// ```
    pub fn parse(raw: &str) -> Self {
        if raw.len() >= 2 && raw.starts_with('\'') && raw.ends_with('\'') {
            return Literal::Text(raw[1..raw.len() - 1].to_string());
        }
        match raw.parse::<f64>() {
            Ok(n) => Literal::Number(n),
            Err(_) => Literal::Text(raw.to_string()),
        }
    }

    /// Returns `true` if this is a numeric literal.
    pub fn is_number(&self) -> bool {
        matches!(self, Literal::Number(_))
    }

    /// Best-effort numeric form.
    ///
    /// Text literals are parsed after trimming; `None` when that fails.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Literal::Number(n) => Some(*n),
            Literal::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Textual form used for string equality.
    ///
    /// A number renders in its shortest decimal form, not as it was written:
    /// `1e3` becomes `1000` and `Infinity` becomes `inf`. So a bare `1e3`
    /// never equals a text field holding `"1e3"`; quote the literal to compare
    /// the text as written.
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Literal::Number(n) => Cow::Owned(n.to_string()),
            Literal::Text(s) => Cow::Borrowed(s),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{}", n),
            Literal::Text(s) => write!(f, "'{}'", s),
        }
    }
}

impl From<f64> for Literal {
    fn from(n: f64) -> Self {
        Literal::Number(n)
    }
}

impl From<i32> for Literal {
    fn from(n: i32) -> Self {
        Literal::Number(n as f64)
    }
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Literal::Number(n as f64)
    }
}

impl From<u32> for Literal {
    fn from(n: u32) -> Self {
        Literal::Number(n as f64)
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::Text(s)
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::Text(s.to_string())
    }
}
