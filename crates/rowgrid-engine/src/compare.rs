#![forbid(unsafe_code)]

//! Comparator resolution.
//!
//! [`resolve`] turns a column descriptor into a [`CellComparator`]: the
//! column's own comparator when it declares one, otherwise the default
//! ordering described on [`default_compare`]. Null placement is governed by
//! [`NullOrder`].

use rowgrid_core::{Column, CompareFn, Row, SortDirection, Value};
use std::cmp::Ordering;
use std::fmt;

/// Where null cells land in a sorted column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NullOrder {
    /// Null is the lowest value: first when ascending, last when descending.
    /// Custom comparators see nulls as-is.
    #[default]
    Low,
    /// Nulls always first, whatever the direction.
    First,
    /// Nulls always last, whatever the direction.
    Last,
}

/// Kind rank used when two values cannot be compared on the same terms.
fn kind_rank(v: &Value) -> (u8, Option<f64>) {
    if v.is_null() {
        return (0, None);
    }
    if let Some(n) = v.numeric() {
        return (1, Some(n));
    }
    if v.as_date().is_some() {
        return (2, None);
    }
    (3, None)
}

/// Default ascending ordering of two cells.
///
/// - null is below everything else;
/// - two dates compare by instant;
/// - two numeric values (numbers, or text holding a finite number) compare
///   numerically;
/// - everything else compares by the case-insensitive display string, with
///   case-only differences tying.
///
/// Values of different kinds order null, numeric, date, other. This keeps
/// the relation a total order over mixed columns.
#[must_use]
pub fn default_compare(a: &Value, b: &Value) -> Ordering {
    let (ka, na) = kind_rank(a);
    let (kb, nb) = kind_rank(b);
    if ka != kb {
        return ka.cmp(&kb);
    }
    match ka {
        0 => Ordering::Equal,
        1 => match (na, nb) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        },
        2 => match (a.as_date(), b.as_date()) {
            (Some(x), Some(y)) => x.cmp(y),
            _ => Ordering::Equal,
        },
        _ => collate(&a.to_display_string(), &b.to_display_string()),
    }
}

fn collate(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// A resolved cell ordering for one column.
#[derive(Clone, Default)]
pub struct CellComparator {
    custom: Option<CompareFn>,
    nulls: NullOrder,
}

impl fmt::Debug for CellComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellComparator")
            .field("custom", &self.custom.is_some())
            .field("nulls", &self.nulls)
            .finish()
    }
}

impl CellComparator {
    /// The default comparator with the given null policy.
    #[must_use]
    pub fn with_nulls(nulls: NullOrder) -> Self {
        Self {
            custom: None,
            nulls,
        }
    }

    /// Whether a column comparator is wrapped.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        self.custom.is_some()
    }

    #[must_use]
    pub fn nulls(&self) -> NullOrder {
        self.nulls
    }

    /// Compare two cell values without row context.
    ///
    /// Custom comparators receive empty rows.
    #[must_use]
    pub fn compare(&self, a: &Value, b: &Value, dir: SortDirection) -> Ordering {
        if self.custom.is_some() {
            let empty = Row::new();
            self.compare_in(a, b, &empty, &empty, dir)
        } else {
            self.compare_in_default(a, b, dir)
        }
    }

    /// Compare two cell values along with the rows they came from.
    #[must_use]
    pub fn compare_in(
        &self,
        a: &Value,
        b: &Value,
        row_a: &Row,
        row_b: &Row,
        dir: SortDirection,
    ) -> Ordering {
        if let Some(fixed) = self.fixed_null_order(a, b) {
            return fixed;
        }
        let base = match &self.custom {
            Some(f) => f(a, b, row_a, row_b),
            None => default_compare(a, b),
        };
        dir.apply(base)
    }

    fn compare_in_default(&self, a: &Value, b: &Value, dir: SortDirection) -> Ordering {
        if let Some(fixed) = self.fixed_null_order(a, b) {
            return fixed;
        }
        dir.apply(default_compare(a, b))
    }

    /// Placement decided before any comparator runs, for `First` / `Last`.
    fn fixed_null_order(&self, a: &Value, b: &Value) -> Option<Ordering> {
        let first = match self.nulls {
            NullOrder::Low => return None,
            NullOrder::First => Ordering::Less,
            NullOrder::Last => Ordering::Greater,
        };
        match (a.is_null(), b.is_null()) {
            (true, true) => Some(Ordering::Equal),
            (true, false) => Some(first),
            (false, true) => Some(first.reverse()),
            (false, false) => None,
        }
    }
}

/// Resolve the comparator for `column` (or the default one for `None`).
#[must_use]
pub fn resolve(column: Option<&Column>, nulls: NullOrder) -> CellComparator {
    CellComparator {
        custom: column.and_then(|c| c.comparator.clone()),
        nulls,
    }
}
