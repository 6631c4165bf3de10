#![forbid(unsafe_code)]

//! Property accessors.

use crate::value::Value;
use std::fmt;

/// How a column (or sort criterion, or relation) reaches into a row.
///
/// Keyed rows use [`Prop::Key`], array rows use [`Prop::Index`], and nested
/// objects use a dotted [`Prop::Path`]. Lookups never fail loudly: a missing
/// member resolves to `None`.
///
/// ```
/// use rowgrid_core::prop::Prop;
///
/// assert_eq!(Prop::from("name"), Prop::Key("name".into()));
/// assert_eq!(Prop::from(1usize), Prop::Index(1));
/// assert_eq!(
///     Prop::from("address.city"),
///     Prop::Path(vec!["address".into(), "city".into()])
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "PropRepr", into = "PropRepr"))]
pub enum Prop {
    /// Numeric index into an array row.
    Index(usize),
    /// Top-level key.
    Key(String),
    /// Nested path, one segment per level.
    Path(Vec<String>),
}

impl Prop {
    /// Parse a property string, splitting on `.` into a nested path.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        if s.contains('.') {
            Self::Path(s.split('.').map(str::to_owned).collect())
        } else {
            Self::Key(s.to_owned())
        }
    }

    /// Resolve this accessor against a value.
    #[must_use]
    pub fn resolve<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        match self {
            Self::Key(key) => value.member(key),
            Self::Index(idx) => value.element(*idx),
            Self::Path(segments) => segments
                .iter()
                .try_fold(value, |current, segment| current.member(segment)),
        }
    }
}

/// Wire form: numbers are indexes, strings are parsed like [`Prop::parse`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum PropRepr {
    Index(usize),
    Text(String),
}

#[cfg(feature = "serde")]
impl From<PropRepr> for Prop {
    fn from(repr: PropRepr) -> Self {
        match repr {
            PropRepr::Index(idx) => Self::Index(idx),
            PropRepr::Text(s) => Self::parse(&s),
        }
    }
}

#[cfg(feature = "serde")]
impl From<Prop> for PropRepr {
    fn from(prop: Prop) -> Self {
        match prop {
            Prop::Index(idx) => Self::Index(idx),
            other => Self::Text(other.to_string()),
        }
    }
}

impl fmt::Display for Prop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(idx) => write!(f, "{idx}"),
            Self::Path(segments) => f.write_str(&segments.join(".")),
        }
    }
}

impl From<&str> for Prop {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for Prop {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<&String> for Prop {
    fn from(s: &String) -> Self {
        Self::parse(s)
    }
}

impl From<usize> for Prop {
    fn from(idx: usize) -> Self {
        Self::Index(idx)
    }
}

impl From<&Prop> for Prop {
    fn from(prop: &Prop) -> Self {
        prop.clone()
    }
}
