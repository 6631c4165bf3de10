#![forbid(unsafe_code)]

//! Cell values.
//!
//! A [`Value`] is the dynamically typed content of one row property. Rows are
//! heterogeneous records, so the engine never assumes a column holds a single
//! type: comparisons, grouping and summaries all work on `Value` directly.
//!
//! [`ValueKey`] is the hashable canonical form of a value. Two values map to
//! the same key under "same value zero" equality: `NaN` equals `NaN` and
//! `+0.0` equals `-0.0`. It is what grouping, tree relations and row
//! identities use as map keys.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::fmt;

/// The content of a single cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent or explicitly empty value.
    #[default]
    Null,
    /// Boolean flag.
    Bool(bool),
    /// Any numeric value.
    Number(f64),
    /// Text.
    Text(String),
    /// Point in time.
    Date(DateTime<Utc>),
    /// Ordered list (array rows, nested arrays).
    List(Vec<Value>),
    /// Keyed record (keyed rows, nested objects).
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Whether this is [`Value::Null`].
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The number, if this is a [`Value::Number`].
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The text, if this is a [`Value::Text`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The boolean, if this is a [`Value::Bool`].
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The timestamp, if this is a [`Value::Date`].
    #[must_use]
    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::Date(d) => Some(d),
            _ => None,
        }
    }

    /// Numeric interpretation used for ordering.
    ///
    /// Finite numbers are numeric, and so is text that parses as a finite
    /// number (`" 12 "`, `"1e3"`). Everything else, including `NaN` and the
    /// infinities, is not.
    #[must_use]
    pub fn numeric(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }

    /// Truthiness: `Null`, `false`, `0`, `NaN` and the empty string are falsy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Text(s) => !s.is_empty(),
            Self::Date(_) | Self::List(_) | Self::Map(_) => true,
        }
    }

    /// Look up a nested member by a single path segment.
    ///
    /// Maps are indexed by key, lists by the segment parsed as an index.
    #[must_use]
    pub fn member(&self, segment: &str) -> Option<&Value> {
        match self {
            Self::Map(map) => map.get(segment),
            Self::List(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        }
    }

    /// Look up a list element (or the map entry named by the index).
    #[must_use]
    pub fn element(&self, index: usize) -> Option<&Value> {
        match self {
            Self::List(items) => items.get(index),
            Self::Map(map) => map.get(&index.to_string()),
            _ => None,
        }
    }

    /// String form used for collation and display.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    /// Canonical hashable key.
    #[must_use]
    pub fn key(&self) -> ValueKey {
        match self {
            Self::Null => ValueKey::Null,
            Self::Bool(b) => ValueKey::Bool(*b),
            Self::Number(n) => ValueKey::Number(canonical_bits(*n)),
            Self::Text(s) => ValueKey::Text(s.clone()),
            Self::Date(d) => ValueKey::Date(d.timestamp_micros()),
            Self::List(items) => ValueKey::List(items.iter().map(Value::key).collect()),
            Self::Map(map) => {
                ValueKey::Map(map.iter().map(|(k, v)| (k.clone(), v.key())).collect())
            }
        }
    }
}

fn canonical_bits(n: f64) -> u64 {
    if n == 0.0 {
        0.0f64.to_bits()
    } else if n.is_nan() {
        f64::NAN.to_bits()
    } else {
        n.to_bits()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => {
                if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            Self::Text(s) => f.write_str(s),
            Self::Date(d) => f.write_str(&d.to_rfc3339()),
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Self::Map(map) => {
                f.write_str("{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                f.write_str("}")
            }
        }
    }
}

/// Hashable canonical form of a [`Value`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueKey {
    /// Key of [`Value::Null`].
    Null,
    /// Key of a boolean.
    Bool(bool),
    /// Canonical bit pattern of a number.
    Number(u64),
    /// Key of a text value.
    Text(String),
    /// Microseconds since the epoch.
    Date(i64),
    /// Key of a list.
    List(Vec<ValueKey>),
    /// Key of a map, entries in key order.
    Map(Vec<(String, ValueKey)>),
}

impl From<&Value> for ValueKey {
    fn from(value: &Value) -> Self {
        value.key()
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Self::Number(f64::from(n))
    }
}

macro_rules! value_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Self::Number(n as f64)
                }
            }
        )*
    };
}

value_from_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(d: DateTime<Utc>) -> Self {
        Self::Date(d)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self::Map(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}
