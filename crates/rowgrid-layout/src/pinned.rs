#![forbid(unsafe_code)]

//! Manually pinned column widths.

use rowgrid_core::Column;
use std::collections::HashMap;

/// Side table of widths the user fixed by resizing a column.
///
/// Keyed by [`Column::id`]. A pinned column keeps its explicit width and is
/// excluded from force-fill and flex-grow redistribution. Column descriptors
/// themselves are never touched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PinnedWidths {
    widths: HashMap<String, f64>,
}

impl PinnedWidths {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin `id` to `width`, replacing any earlier pin.
    pub fn pin(&mut self, id: impl Into<String>, width: f64) {
        self.widths.insert(id.into(), width);
    }

    /// Remove the pin on `id`, returning the width it had.
    pub fn unpin(&mut self, id: &str) -> Option<f64> {
        self.widths.remove(id)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<f64> {
        self.widths.get(id).copied()
    }

    #[must_use]
    pub fn is_pinned(&self, id: &str) -> bool {
        self.widths.contains_key(id)
    }

    pub fn clear(&mut self) {
        self.widths.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// The width a column starts from: its pin if any, else its declared
    /// width, clamped into the column's bounds.
    #[must_use]
    pub fn base_width(&self, column: &Column) -> f64 {
        let raw = self.get(&column.id).unwrap_or(column.width);
        column.clamp_width(raw)
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for PinnedWidths {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            widths: iter.into_iter().map(|(k, w)| (k.into(), w)).collect(),
        }
    }
}
