#![forbid(unsafe_code)]

//! Row records.

use crate::prop::Prop;
use crate::value::Value;
use std::collections::BTreeMap;

static NULL: Value = Value::Null;

/// One data record displayed as a table line.
///
/// A row wraps a [`Value`]: a `Map` for keyed records or a `List` for array
/// records. Rows are never mutated by the engine; sorting and grouping only
/// reorder or wrap them. Engine APIs are generic over `R: AsRef<Row> + Clone`
/// so callers may hand in owned rows, borrowed rows or `Arc<Row>`.
///
/// ```
/// use rowgrid_core::{Prop, Row, Value};
///
/// let row = Row::new().with("id", 5).with("name", "lorem");
/// assert_eq!(row.get(&Prop::from("id")), &Value::from(5));
/// assert!(row.get(&Prop::from("missing")).is_null());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    value: Value,
}

impl Default for Row {
    fn default() -> Self {
        Self::new()
    }
}

impl Row {
    /// Create an empty keyed row.
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: Value::Map(BTreeMap::new()),
        }
    }

    /// Wrap an arbitrary value as a row.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        Self { value }
    }

    /// Create an array row from cell values.
    #[must_use]
    pub fn from_cells(cells: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Self {
            value: Value::List(cells.into_iter().map(Into::into).collect()),
        }
    }

    /// Create a keyed row from `(key, value)` pairs.
    #[must_use]
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Self {
            value: Value::Map(
                pairs
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Set a top-level field. Array rows are converted to keyed rows first,
    /// keeping their elements under their index keys.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut map = match std::mem::take(&mut self.value) {
            Value::Map(map) => map,
            Value::List(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v))
                .collect(),
            _ => BTreeMap::new(),
        };
        map.insert(key.into(), value.into());
        self.value = Value::Map(map);
        self
    }

    /// The wrapped value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Look up a property, distinguishing "absent" from "present but null".
    #[must_use]
    pub fn lookup(&self, prop: &Prop) -> Option<&Value> {
        prop.resolve(&self.value)
    }

    /// Read a property; absent properties read as [`Value::Null`].
    #[must_use]
    pub fn get(&self, prop: &Prop) -> &Value {
        self.lookup(prop).unwrap_or(&NULL)
    }
}

impl AsRef<Row> for Row {
    fn as_ref(&self) -> &Row {
        self
    }
}

impl From<Value> for Row {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_reads_null_but_lookup_is_none() {
        let row = Row::new().with("a", Value::Null);
        assert_eq!(row.lookup(&Prop::from("a")), Some(&Value::Null));
        assert_eq!(row.lookup(&Prop::from("b")), None);
        assert!(row.get(&Prop::from("b")).is_null());
    }

    #[test]
    fn array_rows_index() {
        let row = Row::from_cells([Value::from("Hello"), Value::from(123)]);
        assert_eq!(row.get(&Prop::Index(0)), &Value::from("Hello"));
        assert_eq!(row.get(&Prop::Index(1)), &Value::from(123));
        assert!(row.get(&Prop::Index(2)).is_null());
    }

    #[test]
    fn with_converts_array_rows() {
        let row = Row::from_cells([1, 2]).with("extra", true);
        assert_eq!(row.get(&Prop::Index(1)), &Value::from(2));
        assert_eq!(row.get(&Prop::from("extra")), &Value::from(true));
    }

    #[test]
    fn from_pairs_builds_map() {
        let row = Row::from_pairs([("x", 1), ("y", 2)]);
        assert_eq!(row.get(&Prop::from("y")), &Value::from(2));
    }
}
