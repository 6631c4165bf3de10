#![forbid(unsafe_code)]

//! Row selection.

use rowgrid_core::{Row, ValueKey};
use std::fmt;
use std::sync::Arc;

/// Maps a row to the key that identifies it across refreshes.
pub type IdentityFn = Arc<dyn Fn(&Row) -> ValueKey + Send + Sync>;

/// How two rows are recognised as the same row.
#[derive(Clone, Default)]
pub enum RowIdentity {
    /// Equal contents. Works for owned rows, whose clones never share an
    /// allocation.
    #[default]
    Equal,
    /// Same allocation. Only meaningful for shared rows (`&Row`,
    /// `Arc<Row>`); two equal rows at different addresses stay distinct.
    Reference,
    /// Equal keys.
    Custom(IdentityFn),
}

impl fmt::Debug for RowIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equal => f.write_str("Equal"),
            Self::Reference => f.write_str("Reference"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl RowIdentity {
    /// Identify rows by a custom key.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&Row) -> ValueKey + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    /// Identify rows by the value of one property.
    #[must_use]
    pub fn by_prop(prop: impl Into<rowgrid_core::Prop>) -> Self {
        let prop = prop.into();
        Self::custom(move |row| row.get(&prop).key())
    }

    #[must_use]
    pub fn same(&self, a: &Row, b: &Row) -> bool {
        match self {
            Self::Equal => std::ptr::eq(a, b) || a == b,
            Self::Reference => std::ptr::eq(a, b),
            Self::Custom(f) => f(a) == f(b),
        }
    }
}

/// The selected rows, in selection order.
#[derive(Debug, Clone)]
pub struct Selection<R> {
    rows: Vec<R>,
    identity: RowIdentity,
}

impl<R> Default for Selection<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            identity: RowIdentity::default(),
        }
    }
}

impl<R: AsRef<Row> + Clone> Selection<R> {
    #[must_use]
    pub fn new(identity: RowIdentity) -> Self {
        Self {
            rows: Vec::new(),
            identity,
        }
    }

    #[must_use]
    pub fn identity(&self) -> &RowIdentity {
        &self.identity
    }

    #[must_use]
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn contains(&self, row: &Row) -> bool {
        self.position(row).is_some()
    }

    fn position(&self, row: &Row) -> Option<usize> {
        self.rows
            .iter()
            .position(|r| self.identity.same(r.as_ref(), row))
    }

    /// Add `row` unless it is already selected.
    pub fn select(&mut self, row: R) {
        if !self.contains(row.as_ref()) {
            self.rows.push(row);
        }
    }

    /// Remove `row`; returns whether it was selected.
    pub fn deselect(&mut self, row: &Row) -> bool {
        match self.position(row) {
            Some(i) => {
                self.rows.remove(i);
                true
            }
            None => false,
        }
    }

    /// Flip `row`; returns whether it is selected afterwards.
    pub fn toggle(&mut self, row: R) -> bool {
        if self.deselect(row.as_ref()) {
            false
        } else {
            self.rows.push(row);
            true
        }
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Header checkbox over the whole table.
    ///
    /// Rows rejected by `disabled` are never selected. When every eligible
    /// row is already selected the selection is cleared; otherwise it becomes
    /// exactly the eligible rows.
    pub fn toggle_all(&mut self, rows: &[R], disabled: Option<&dyn Fn(&Row) -> bool>) {
        let eligible: Vec<R> = rows
            .iter()
            .filter(|r| !disabled.is_some_and(|d| d(r.as_ref())))
            .cloned()
            .collect();
        self.replace_or_clear(eligible);
    }

    /// Header checkbox limited to the rows of the visible page.
    pub fn toggle_page(&mut self, page_rows: &[R]) {
        self.replace_or_clear(page_rows.to_vec());
    }

    fn replace_or_clear(&mut self, rows: Vec<R>) {
        let all_selected =
            self.rows.len() == rows.len() && rows.iter().all(|r| self.contains(r.as_ref()));
        self.rows.clear();
        if !all_selected {
            for row in rows {
                self.select(row);
            }
        }
    }
}
