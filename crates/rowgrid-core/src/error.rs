#![forbid(unsafe_code)]

//! Errors reported by the validating entry points.
//!
//! The view pipeline itself never fails: malformed configuration degrades to
//! a safe default and is logged. These errors only come back from calls that
//! explicitly validate their input (config validation, column reordering and
//! manual resizing).

use std::fmt;

/// Configuration or argument error.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// A column index was outside `0..len`.
    ColumnIndexOutOfRange { index: usize, len: usize },
    /// Flat grouping and tree grouping were both configured.
    ConflictingGrouping,
    /// Virtual paging was configured with a row height that cannot size a page.
    InvalidRowHeight { row_height: f64 },
    /// A column id did not match any column.
    UnknownColumn { id: String },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColumnIndexOutOfRange { index, len } => {
                write!(f, "column index {index} out of range for {len} columns")
            }
            Self::ConflictingGrouping => {
                f.write_str("flat grouping and tree grouping cannot be combined")
            }
            Self::InvalidRowHeight { row_height } => {
                write!(f, "row height must be finite and > 0 (got {row_height})")
            }
            Self::UnknownColumn { id } => write!(f, "no column with id `{id}`"),
        }
    }
}

impl std::error::Error for GridError {}
