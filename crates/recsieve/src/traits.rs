//! Field access for filterable records.
//!
//! The evaluator never looks inside a record directly. It asks the record for
//! a field through [`Fields`], which keeps "field is missing" (`None`) apart
//! from "field is present but null" (`Some(Value::Null)`).

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde_json::{Map, Value as JsonValue};

use crate::value::Value;

/// Trait for types that can be filtered by a [`Query`](crate::Query).
///
/// Implemented for the JSON map types records usually arrive in. Implement it
/// manually to filter your own structs:
///
/// ```
/// use recsieve::{Fields, Query, Value};
///
/// struct Vessel {
///     name: String,
///     length: f64,
/// }
///
/// impl Fields for Vessel {
///     fn field(&self, name: &str) -> Option<Value<'_>> {
///         match name {
///             "name" => Some(Value::Text(&self.name)),
///             "length" => Some(Value::Number(self.length)),
///             _ => None,
///         }
///     }
/// }
///
/// let fleet = vec![
///     Vessel { name: "Aurora".into(), length: 310.0 },
///     Vessel { name: "Brisk".into(), length: 90.0 },
/// ];
/// let query: Query = "WHERE length > 200".parse().unwrap();
/// let hits = query.filter(&fleet);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].name, "Aurora");
/// ```
pub trait Fields {
    /// Returns the normalized value of `name`, or `None` if the field is absent.
    fn field(&self, name: &str) -> Option<Value<'_>>;
}

impl Fields for Map<String, JsonValue> {
    fn field(&self, name: &str) -> Option<Value<'_>> {
        self.get(name).map(Value::extract)
    }
}

/// Only JSON objects have fields; any other JSON value has none.
impl Fields for JsonValue {
    fn field(&self, name: &str) -> Option<Value<'_>> {
        match self {
            JsonValue::Object(map) => map.field(name),
            _ => None,
        }
    }
}

impl<S: BuildHasher> Fields for HashMap<String, JsonValue, S> {
    fn field(&self, name: &str) -> Option<Value<'_>> {
        self.get(name).map(Value::extract)
    }
}

impl Fields for BTreeMap<String, JsonValue> {
    fn field(&self, name: &str) -> Option<Value<'_>> {
        self.get(name).map(Value::extract)
    }
}

impl<T: Fields + ?Sized> Fields for &T {
    fn field(&self, name: &str) -> Option<Value<'_>> {
        (**self).field(name)
    }
}
