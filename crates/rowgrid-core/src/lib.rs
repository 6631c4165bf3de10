#![forbid(unsafe_code)]

//! Core data model: cell values, property accessors, rows, column descriptors
//! and sort criteria.

pub mod column;
pub mod error;
pub mod logging;
pub mod prop;
pub mod row;
pub mod sort;
pub mod value;

pub use column::{
    Column, ColumnFlags, CompareFn, DEFAULT_COLUMN_WIDTH, FormatFn, Pin, SummaryFn, SummaryFunc,
};
pub use error::GridError;
pub use prop::Prop;
pub use row::Row;
pub use sort::{SortCriterion, SortDirection, SortType};
pub use value::{Value, ValueKey};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, error, info, trace, trace_span, warn};
