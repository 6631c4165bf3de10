#![forbid(unsafe_code)]

//! Change notifications returned by state transitions.
//!
//! State methods hand these back to the caller instead of broadcasting them;
//! what to do with them (re-render, persist, forward to a server doing
//! external paging) is up to the host.

use crate::pager::PageWindow;
use rowgrid_core::{Prop, SortCriterion, SortDirection};

/// A header activation changed the sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortEvent {
    /// Column id whose header was activated.
    pub column: String,
    /// Property of that column.
    pub prop: Prop,
    pub prev: Option<SortDirection>,
    pub new: Option<SortDirection>,
    /// Full criteria list after the change.
    pub sorts: Vec<SortCriterion>,
}

/// The visible page changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEvent {
    /// Row count the window was computed from.
    pub count: usize,
    pub page_size: usize,
    pub limit: Option<usize>,
    /// Zero-based page index.
    pub offset: usize,
    pub sorts: Vec<SortCriterion>,
}

impl PageEvent {
    /// Describe `window` together with the active criteria.
    #[must_use]
    pub fn from_window(window: &PageWindow, sorts: &[SortCriterion]) -> Self {
        Self {
            count: window.row_count,
            page_size: window.page_size,
            limit: window.limit,
            offset: window.offset,
            sorts: sorts.to_vec(),
        }
    }
}

/// A column was resized by hand.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeEvent {
    pub column: String,
    pub prev_width: f64,
    pub new_width: f64,
}

/// A column was dragged to a new position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderEvent {
    pub column: String,
    pub prev_index: usize,
    pub new_index: usize,
}

/// Events produced by activating a sortable header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortChange {
    pub sort: SortEvent,
    /// Sorting always returns to the first page.
    pub page: PageEvent,
}
