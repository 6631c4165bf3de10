#![forbid(unsafe_code)]

//! Sort criteria.

use crate::prop::Prop;
use std::cmp::Ordering;
use std::fmt;

/// Direction of one ordering key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortDirection {
    /// Smallest first.
    Asc,
    /// Largest first.
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Orient an ascending comparison result for this direction.
    #[inline]
    #[must_use]
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Self::Asc => ord,
            Self::Desc => ord.reverse(),
        }
    }

    /// Short label (`"asc"` / `"desc"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether clicking a header replaces or extends the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortType {
    /// One active criterion at a time.
    #[default]
    Single,
    /// Any number of criteria, in priority order.
    Multi,
}

/// One ordering key: a property and an optional direction.
///
/// A criterion without a direction is inactive and skipped by the sorter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortCriterion {
    /// Property the criterion orders by.
    pub prop: Prop,
    /// Direction, or `None` for an inactive criterion.
    pub dir: Option<SortDirection>,
}

impl SortCriterion {
    /// Create a criterion.
    #[must_use]
    pub fn new(prop: impl Into<Prop>, dir: SortDirection) -> Self {
        Self {
            prop: prop.into(),
            dir: Some(dir),
        }
    }

    /// Ascending criterion.
    #[must_use]
    pub fn asc(prop: impl Into<Prop>) -> Self {
        Self::new(prop, SortDirection::Asc)
    }

    /// Descending criterion.
    #[must_use]
    pub fn desc(prop: impl Into<Prop>) -> Self {
        Self::new(prop, SortDirection::Desc)
    }

    /// Criterion that names a property but is not active.
    #[must_use]
    pub fn inactive(prop: impl Into<Prop>) -> Self {
        Self {
            prop: prop.into(),
            dir: None,
        }
    }
}
