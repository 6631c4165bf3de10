#![forbid(unsafe_code)]

//! Row engine for data grids.
//!
//! Pure functions over row snapshots: comparator resolution, stable
//! multi-key sorting, flat and tree grouping, paging, selection and the
//! summary row. [`table::Table`] chains them into a single view pass.

pub mod compare;
pub mod events;
pub mod group;
pub mod grouped_sort;
pub mod pager;
pub mod reorder;
pub mod selection;
pub mod sort;
pub mod sort_state;
pub mod summary;
pub mod table;
pub mod tree;

pub use compare::{CellComparator, NullOrder, default_compare, resolve};
pub use events::{PageEvent, ReorderEvent, ResizeEvent, SortChange, SortEvent};
pub use group::{Group, GroupExpansion, GroupItem, Grouping, group_rows, group_rows_by};
pub use grouped_sort::{sort_grouped, sort_grouped_with};
pub use pager::{PageWindow, PagingMode, RowCountSource, page_size};
pub use reorder::reorder_columns;
pub use selection::{IdentityFn, RowIdentity, Selection};
pub use sort::{CompositeComparator, SortOptions, sort_rows, sort_rows_with};
pub use sort_state::{SortState, next_direction};
pub use summary::{SummaryCell, default_sum, summary_row};
pub use table::{Table, TableState, View, ViewConfig, ViewRows};
pub use tree::{TreeRelation, TreeRow, TreeStatus, TreeStatuses, TreeView, flatten_tree};
