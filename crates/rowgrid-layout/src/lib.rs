#![forbid(unsafe_code)]

//! Column width distribution.
//!
//! Turns column descriptors, the table's available width and the user's
//! manually pinned widths into one pixel width per column. Three policies are
//! available through [`ColumnMode`]:
//!
//! - [`ColumnMode::Standard`]: declared widths, clamped into bounds.
//! - [`ColumnMode::Force`]: auto-resizable columns stretch or shrink in
//!   proportion to their current width until they exactly fill the table.
//! - [`ColumnMode::Flex`]: columns keep their base width and split the
//!   leftover space by their flex-grow factor.
//!
//! Every policy is a pure function of its inputs: the same inputs always give
//! the same widths, and every width is finite and non-negative.
//!
//! # Example
//!
//! ```
//! use rowgrid_core::Column;
//! use rowgrid_layout::{ColumnMode, ForceFillOptions, PinnedWidths, distribute};
//!
//! let columns = vec![
//!     Column::new("name").width(150.0),
//!     Column::new("gender").width(150.0),
//!     Column::new("company").width(150.0),
//! ];
//! let widths = distribute(
//!     ColumnMode::Force,
//!     &columns,
//!     500.0,
//!     &PinnedWidths::new(),
//!     ForceFillOptions::default(),
//! );
//! assert!(widths.iter().all(|w| (w - 500.0 / 3.0).abs() < 1e-9));
//! ```

pub mod fill;
pub mod pin_groups;
pub mod pinned;
pub mod rounding;

pub use fill::{ForceFillOptions, flex_grow_widths, force_fill_widths, standard_widths};
pub use pin_groups::{PinGroupWidths, group_widths, pin_order};
pub use pinned::PinnedWidths;
pub use rounding::round_widths_stable;

use rowgrid_core::Column;

/// Width policy for a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColumnMode {
    /// Declared widths.
    #[default]
    Standard,
    /// Fill the table exactly, proportional to current widths.
    Force,
    /// Grow into leftover space by flex-grow factor.
    Flex,
}

impl ColumnMode {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Force => "force",
            Self::Flex => "flex",
        }
    }
}

/// Resolve per-column widths under `mode`.
///
/// `options` only affects [`ColumnMode::Force`].
#[must_use]
pub fn distribute(
    mode: ColumnMode,
    columns: &[Column],
    total: f64,
    pinned: &PinnedWidths,
    options: ForceFillOptions,
) -> Vec<f64> {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!(
        "rowgrid.distribute",
        mode = mode.label(),
        columns = columns.len(),
        total,
        pinned = pinned.len(),
    )
    .entered();

    match mode {
        ColumnMode::Standard => standard_widths(columns, pinned),
        ColumnMode::Force => force_fill_widths(columns, total, pinned, options),
        ColumnMode::Flex => flex_grow_widths(columns, total, pinned),
    }
}
