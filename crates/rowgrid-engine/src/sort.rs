#![forbid(unsafe_code)]

//! Stable multi-key row sorting.

use crate::compare::{CellComparator, NullOrder, resolve};
use rowgrid_core::{Column, Prop, Row, SortCriterion, SortDirection};
use std::cmp::Ordering;

/// Options shared by the sorting entry points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortOptions {
    /// Null placement for every criterion.
    pub nulls: NullOrder,
}

impl SortOptions {
    #[must_use]
    pub fn nulls(mut self, nulls: NullOrder) -> Self {
        self.nulls = nulls;
        self
    }
}

/// The active criteria resolved against the column list.
///
/// Inactive criteria (no direction) are dropped. A criterion whose property
/// matches no column falls back to the default comparator.
#[derive(Debug, Clone)]
pub struct CompositeComparator {
    keys: Vec<(Prop, SortDirection, CellComparator)>,
}

impl CompositeComparator {
    #[must_use]
    pub fn new(columns: &[Column], criteria: &[SortCriterion], options: &SortOptions) -> Self {
        let keys = criteria
            .iter()
            .filter_map(|c| {
                let dir = c.dir?;
                let column = columns.iter().find(|col| col.prop == c.prop);
                if column.is_none() {
                    rowgrid_core::debug!(prop = %c.prop, "sort criterion has no column; using default comparator");
                }
                Some((c.prop.clone(), dir, resolve(column, options.nulls)))
            })
            .collect();
        Self { keys }
    }

    /// Number of active keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Compare two rows key by key; `Equal` when every key ties.
    #[must_use]
    pub fn compare(&self, a: &Row, b: &Row) -> Ordering {
        for (prop, dir, cmp) in &self.keys {
            let ord = cmp.compare_in(a.get(prop), b.get(prop), a, b, *dir);
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }
}

/// Sort `rows` by `criteria` with the default options.
///
/// ```
/// use rowgrid_core::{Column, Row, SortCriterion};
/// use rowgrid_engine::sort::sort_rows;
///
/// let rows = vec![
///     Row::new().with("id", 5),
///     Row::new().with("id", 20),
///     Row::new().with("id", 12),
/// ];
/// let columns = vec![Column::new("id")];
/// let sorted = sort_rows(&rows, &columns, &[SortCriterion::asc("id")]);
/// let ids: Vec<_> = sorted.iter().map(|r| r.get(&"id".into()).to_string()).collect();
/// assert_eq!(ids, ["5", "12", "20"]);
/// ```
#[must_use]
pub fn sort_rows<R>(rows: &[R], columns: &[Column], criteria: &[SortCriterion]) -> Vec<R>
where
    R: AsRef<Row> + Clone,
{
    sort_rows_with(rows, columns, criteria, &SortOptions::default())
}

/// Sort `rows` by `criteria`.
///
/// The sort is stable: rows that tie on every criterion keep their input
/// order. With no active criteria the input order is returned unchanged. The
/// input slice is never modified.
#[must_use]
pub fn sort_rows_with<R>(
    rows: &[R],
    columns: &[Column],
    criteria: &[SortCriterion],
    options: &SortOptions,
) -> Vec<R>
where
    R: AsRef<Row> + Clone,
{
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!(
        "rowgrid.sort",
        rows = rows.len(),
        criteria = criteria.len()
    )
    .entered();

    let composite = CompositeComparator::new(columns, criteria, options);
    let mut out = rows.to_vec();
    if composite.is_empty() {
        return out;
    }
    out.sort_by(|a, b| composite.compare(a.as_ref(), b.as_ref()));
    out
}
