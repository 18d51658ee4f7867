//! Recsieve - `WHERE` filtering for in-memory collections of loosely typed records.
//!
//! Recsieve parses a flat predicate language and evaluates it against records
//! whose fields carry dynamically typed values (typically decoded JSON):
//!
//! ```text
//! WHERE field OP value [AND field OP value ...]      OP ∈ { =, <, > }
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use recsieve::{filter, parse_query, Record};
//! use serde_json::json;
//!
//! let records: Vec<Record> = serde_json::from_value(json!([
//!     {"name": "Aurora", "type": "Tanker", "length": 300},
//!     {"name": "Brisk", "type": "Cargo", "length": 150},
//!     {"name": "Calypso", "type": "Cargo", "length": "unknown"},
//! ]))
//! .unwrap();
//!
//! let query = parse_query("WHERE type = 'cargo' AND length < 200").unwrap();
//! let results = filter(&records, &query);
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0]["name"], "Brisk");
//! ```
//!
//! # Comparison Policy
//!
//! Each record field is normalized to a [`Value`] and compared with the
//! condition's [`Literal`]:
//!
//! | Record value | `=` | `<` / `>` |
//! |--------------|-----|-----------|
//! | Number | numeric equality | numeric ordering |
//! | String, bool, array, object | case-insensitive, trimmed text equality | never matches |
//! | Null or missing field | never matches | never matches |
//!
//! A literal that cannot be read as a number never matches a numeric field.
//! None of these cases are errors: evaluation cannot fail, it only excludes
//! records. Only parsing fails, with [`QueryError::MalformedQuery`].

mod condition;
mod error;
mod op;
pub mod parser;
mod query;
mod traits;
mod value;

// Re-export public API
pub use condition::Condition;
pub use error::{MalformedReason, QueryError, Result};
pub use op::Op;
pub use query::Query;
pub use traits::Fields;
pub use value::{Literal, Value};

/// A loosely typed record: field names mapped to JSON values.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Parses a `WHERE ...` query string.
///
/// Shorthand for [`Query::parse`].
pub fn parse_query(input: &str) -> Result<Query> {
    parser::parse(input)
}

/// Returns the records matching every condition of `query`, in input order.
///
/// Shorthand for [`Query::filter`].
pub fn filter<'a, R: Fields>(records: &'a [R], query: &Query) -> Vec<&'a R> {
    query.filter(records)
}
