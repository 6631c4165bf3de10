#![forbid(unsafe_code)]

//! Page window computation.
//!
//! Paging works on a *row count* which is not always the number of input
//! rows: grouped tables page over groups, tree tables over the flattened
//! visible rows, and externally paged tables over a count the host supplies.
//! See [`RowCountSource`].

use std::ops::Range;

/// How the page size is determined.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PagingMode {
    /// Virtual scrolling: as many rows as fit the viewport.
    Virtual { viewport_height: f64, row_height: f64 },
    /// Fixed page size.
    Limit(usize),
    /// A single page holding everything.
    #[default]
    Unpaged,
}

/// Rows per page under `mode`.
///
/// A virtual viewport with a non-positive or non-finite row height, or a
/// non-finite viewport, yields 0.
///
/// ```
/// use rowgrid_engine::pager::{PagingMode, page_size};
///
/// let mode = PagingMode::Virtual { viewport_height: 400.0, row_height: 50.0 };
/// assert_eq!(page_size(&mode, 1000), 8);
/// assert_eq!(page_size(&PagingMode::Limit(10), 1000), 10);
/// assert_eq!(page_size(&PagingMode::Unpaged, 1000), 1000);
/// ```
#[must_use]
pub fn page_size(mode: &PagingMode, total_rows: usize) -> usize {
    match *mode {
        PagingMode::Virtual {
            viewport_height,
            row_height,
        } => {
            if !row_height.is_finite() || row_height <= 0.0 || !viewport_height.is_finite() {
                return 0;
            }
            let rows = (viewport_height / row_height).ceil();
            if rows <= 0.0 {
                0
            } else {
                // Saturating float-to-int cast.
                rows as usize
            }
        }
        PagingMode::Limit(n) => n,
        PagingMode::Unpaged => total_rows,
    }
}

/// What the pager counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowCountSource {
    /// Grouped table: number of groups.
    Groups(usize),
    /// Tree table: number of flattened rows.
    Tree(usize),
    /// Plain table: number of rows.
    Rows(usize),
    /// Externally paged table: count reported by the host.
    External(usize),
}

impl RowCountSource {
    #[must_use]
    pub fn row_count(self) -> usize {
        match self {
            Self::Groups(n) | Self::Tree(n) | Self::Rows(n) | Self::External(n) => n,
        }
    }
}

/// A clamped page position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageWindow {
    /// Zero-based page index.
    pub offset: usize,
    pub page_size: usize,
    pub row_count: usize,
    /// Configured limit, carried through to page events.
    pub limit: Option<usize>,
}

impl PageWindow {
    /// Build a window, clamping `offset` into range.
    #[must_use]
    pub fn new(page_size: usize, row_count: usize, limit: Option<usize>, offset: i64) -> Self {
        let mut window = Self {
            offset: 0,
            page_size,
            row_count,
            limit,
        };
        window.offset = window.clamp_offset(offset);
        window
    }

    /// Number of pages; 0 when the page size is 0.
    #[must_use]
    pub fn page_count(&self) -> usize {
        if self.page_size == 0 {
            0
        } else {
            self.row_count.div_ceil(self.page_size)
        }
    }

    /// Largest valid offset.
    #[must_use]
    pub fn max_offset(&self) -> usize {
        self.page_count().saturating_sub(1)
    }

    /// Clamp a requested page index into `[0, max_offset]`.
    #[must_use]
    pub fn clamp_offset(&self, requested: i64) -> usize {
        if requested <= 0 {
            return 0;
        }
        usize::try_from(requested).map_or(self.max_offset(), |r| r.min(self.max_offset()))
    }

    /// Move to `requested`, clamped. Returns whether the offset changed.
    pub fn set_offset(&mut self, requested: i64) -> bool {
        let next = self.clamp_offset(requested);
        let changed = next != self.offset;
        self.offset = next;
        changed
    }

    /// One-based page number, or 0 when there are no pages.
    #[must_use]
    pub fn current_page(&self) -> usize {
        if self.page_count() == 0 {
            0
        } else {
            self.offset + 1
        }
    }

    /// Indices of the counted units on the current page.
    #[must_use]
    pub fn row_range(&self) -> Range<usize> {
        let start = self.offset.saturating_mul(self.page_size).min(self.row_count);
        let end = start.saturating_add(self.page_size).min(self.row_count);
        start..end
    }

    #[must_use]
    pub fn has_multiple_pages(&self) -> bool {
        self.page_count() > 1
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.offset > 0
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.offset < self.max_offset()
    }

    /// Up to `max_links` one-based page numbers centred on the current page.
    ///
    /// ```
    /// use rowgrid_engine::pager::PageWindow;
    ///
    /// let w = PageWindow::new(10, 200, Some(10), 9);
    /// assert_eq!(w.visible_pages(5), vec![8, 9, 10, 11, 12]);
    /// let w = PageWindow::new(10, 200, Some(10), 0);
    /// assert_eq!(w.visible_pages(5), vec![1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn visible_pages(&self, max_links: usize) -> Vec<usize> {
        let total = self.page_count();
        if total == 0 || max_links == 0 {
            return Vec::new();
        }
        let current = self.current_page();
        let mut start = 1;
        let mut end = total;
        if max_links < total {
            start = current.saturating_sub(max_links / 2).max(1);
            end = (start + max_links - 1).min(total);
            start = (end + 1).saturating_sub(max_links).max(1);
        }
        (start..=end).collect()
    }
}
