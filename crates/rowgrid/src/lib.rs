#![forbid(unsafe_code)]

//! rowgrid public facade crate.
//!
//! Re-exports the data model, the width distributor and the row engine, and
//! offers a prelude for day-to-day usage.
//!
//! ```
//! use rowgrid::prelude::*;
//!
//! let rows = vec![
//!     Row::new().with("name", "Mona").with("age", 41),
//!     Row::new().with("name", "Carl").with("age", 29),
//! ];
//! let table = Table::new(
//!     vec![Column::new("name"), Column::new("age")],
//!     ViewConfig::default().sorts([SortCriterion::asc("age")]),
//! );
//! let view = table.view(&rows, &table.state());
//! assert_eq!(view.page()[0].get(&"name".into()), &Value::from("Carl"));
//! ```

// --- Core re-exports -------------------------------------------------------

pub use rowgrid_core::{
    Column, ColumnFlags, CompareFn, DEFAULT_COLUMN_WIDTH, FormatFn, Pin, Prop, Row,
    SortCriterion, SortDirection, SortType, SummaryFn, SummaryFunc, Value, ValueKey,
};

// --- Layout re-exports -----------------------------------------------------

pub use rowgrid_layout::{
    ColumnMode, ForceFillOptions, PinGroupWidths, PinnedWidths, distribute, group_widths,
    round_widths_stable,
};

// --- Engine re-exports -----------------------------------------------------

pub use rowgrid_engine::{
    CellComparator, Group, GroupExpansion, GroupItem, Grouping, NullOrder, PageEvent,
    PageWindow, PagingMode, ReorderEvent, ResizeEvent, RowIdentity, Selection, SortChange,
    SortEvent, SortOptions, SortState, SummaryCell, Table, TableState, TreeRelation, TreeRow,
    TreeStatus, TreeStatuses, TreeView, View, ViewConfig, ViewRows, flatten_tree, group_rows,
    group_rows_by, page_size, reorder_columns, resolve, sort_grouped, sort_rows, summary_row,
};

// --- Errors ---------------------------------------------------------------

/// Error returned by the validating APIs.
pub type Error = rowgrid_core::GridError;

/// Standard result type for rowgrid APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Column, ColumnMode, Error, NullOrder, PagingMode, Prop, Result, Row, SortCriterion,
        SortDirection, SortType, Table, TableState, TreeRelation, Value, View, ViewConfig,
    };

    pub use crate::{core, engine, layout};
}

pub use rowgrid_core as core;
pub use rowgrid_engine as engine;
pub use rowgrid_layout as layout;
