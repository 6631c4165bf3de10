#![forbid(unsafe_code)]

//! Column descriptors.
//!
//! A [`Column`] tells the engine how one row property is displayed, sorted and
//! sized. Columns are built with chained setters and are cheap to clone: the
//! optional comparator, formatter and summary closures are reference counted.
//!
//! ```
//! use rowgrid_core::{Column, Pin};
//!
//! let col = Column::new("firstName").width(120.0).min_width(80.0).pin(Pin::Left);
//! assert_eq!(col.name, "First Name");
//! assert_eq!(col.id, "firstName");
//! assert!(col.is_sortable());
//! ```

use crate::prop::Prop;
use crate::row::Row;
use crate::value::Value;
use bitflags::bitflags;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Width given to columns that declare none.
pub const DEFAULT_COLUMN_WIDTH: f64 = 150.0;

/// Custom comparator: `(a, b, row_a, row_b) -> ordering` on ascending terms.
pub type CompareFn = Arc<dyn Fn(&Value, &Value, &Row, &Row) -> Ordering + Send + Sync>;

/// Cell formatter.
pub type FormatFn = Arc<dyn Fn(&Value) -> String + Send + Sync>;

/// Summary function over the cells of one column.
pub type SummaryFn = Arc<dyn Fn(&[&Value]) -> Value + Send + Sync>;

bitflags! {
    /// Interaction capabilities of a column.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ColumnFlags: u8 {
        /// Header activation toggles sorting.
        const SORTABLE    = 0b0001;
        /// The user may resize the column.
        const RESIZABLE   = 0b0010;
        /// The user may drag the column to a new position.
        const DRAGGABLE   = 0b0100;
        /// Force-fill mode may change the width.
        const AUTO_RESIZE = 0b1000;
    }
}

impl Default for ColumnFlags {
    fn default() -> Self {
        Self::all()
    }
}

/// Which pinned region a column is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Pin {
    /// Frozen on the left.
    Left,
    /// Scrolling body.
    #[default]
    Center,
    /// Frozen on the right.
    Right,
}

/// Summary computed for a column's footer cell.
#[derive(Clone, Default)]
pub enum SummaryFunc {
    /// Numeric sum of the truthy cells.
    #[default]
    Sum,
    /// No summary; the cell stays empty.
    Off,
    /// Caller-provided aggregate.
    Custom(SummaryFn),
}

impl fmt::Debug for SummaryFunc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sum => f.write_str("Sum"),
            Self::Off => f.write_str("Off"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Descriptor for one table column.
#[derive(Clone)]
pub struct Column {
    /// Stable identity; defaults to the property's string form.
    pub id: String,
    /// Header label; defaults to the property in title case.
    pub name: String,
    /// Accessor into each row.
    pub prop: Prop,
    /// Custom ordering, used instead of the default comparator.
    pub comparator: Option<CompareFn>,
    /// Display transform for cell values.
    pub formatter: Option<FormatFn>,
    /// Declared (current) width in pixels.
    pub width: f64,
    /// Lower width bound.
    pub min_width: Option<f64>,
    /// Upper width bound.
    pub max_width: Option<f64>,
    /// Flex-grow factor.
    pub flex_grow: f64,
    /// Pinned region.
    pub pin: Pin,
    /// Capabilities.
    pub flags: ColumnFlags,
    /// Footer summary.
    pub summary: SummaryFunc,
}

impl Column {
    /// Column reading `prop`, with default width and every capability enabled.
    #[must_use]
    pub fn new(prop: impl Into<Prop>) -> Self {
        let prop = prop.into();
        let id = prop.to_string();
        let name = match &prop {
            Prop::Index(idx) => idx.to_string(),
            other => title_case(&other.to_string()),
        };
        Self {
            id,
            name,
            prop,
            comparator: None,
            formatter: None,
            width: DEFAULT_COLUMN_WIDTH,
            min_width: None,
            max_width: None,
            flex_grow: 0.0,
            pin: Pin::Center,
            flags: ColumnFlags::default(),
            summary: SummaryFunc::Sum,
        }
    }

    /// Set the identity.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the header label.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set a custom comparator.
    #[must_use]
    pub fn comparator<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value, &Value, &Row, &Row) -> Ordering + Send + Sync + 'static,
    {
        self.comparator = Some(Arc::new(f));
        self
    }

    /// Set a cell formatter.
    #[must_use]
    pub fn formatter<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> String + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(f));
        self
    }

    /// Set the declared width.
    #[must_use]
    pub fn width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Set the minimum width.
    #[must_use]
    pub fn min_width(mut self, min: f64) -> Self {
        self.min_width = Some(min);
        self
    }

    /// Set the maximum width.
    #[must_use]
    pub fn max_width(mut self, max: f64) -> Self {
        self.max_width = Some(max);
        self
    }

    /// Set the flex-grow factor.
    #[must_use]
    pub fn flex_grow(mut self, flex: f64) -> Self {
        self.flex_grow = flex;
        self
    }

    /// Set the pinned region.
    #[must_use]
    pub fn pin(mut self, pin: Pin) -> Self {
        self.pin = pin;
        self
    }

    /// Replace all capability flags.
    #[must_use]
    pub fn flags(mut self, flags: ColumnFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Enable or disable sorting.
    #[must_use]
    pub fn sortable(mut self, on: bool) -> Self {
        self.flags.set(ColumnFlags::SORTABLE, on);
        self
    }

    /// Enable or disable manual resizing.
    #[must_use]
    pub fn resizable(mut self, on: bool) -> Self {
        self.flags.set(ColumnFlags::RESIZABLE, on);
        self
    }

    /// Enable or disable dragging.
    #[must_use]
    pub fn draggable(mut self, on: bool) -> Self {
        self.flags.set(ColumnFlags::DRAGGABLE, on);
        self
    }

    /// Enable or disable automatic resizing in force-fill mode.
    #[must_use]
    pub fn auto_resize(mut self, on: bool) -> Self {
        self.flags.set(ColumnFlags::AUTO_RESIZE, on);
        self
    }

    /// Set the summary function.
    #[must_use]
    pub fn summary(mut self, summary: SummaryFunc) -> Self {
        self.summary = summary;
        self
    }

    /// Set a custom summary function.
    #[must_use]
    pub fn summary_with<F>(mut self, f: F) -> Self
    where
        F: Fn(&[&Value]) -> Value + Send + Sync + 'static,
    {
        self.summary = SummaryFunc::Custom(Arc::new(f));
        self
    }

    #[inline]
    #[must_use]
    pub fn is_sortable(&self) -> bool {
        self.flags.contains(ColumnFlags::SORTABLE)
    }

    #[inline]
    #[must_use]
    pub fn is_resizable(&self) -> bool {
        self.flags.contains(ColumnFlags::RESIZABLE)
    }

    #[inline]
    #[must_use]
    pub fn is_draggable(&self) -> bool {
        self.flags.contains(ColumnFlags::DRAGGABLE)
    }

    #[inline]
    #[must_use]
    pub fn can_auto_resize(&self) -> bool {
        self.flags.contains(ColumnFlags::AUTO_RESIZE)
    }

    /// Clamp a width into this column's bounds.
    ///
    /// Non-finite or negative input becomes 0 before clamping. When the
    /// bounds conflict (`min > max`) the minimum wins.
    #[must_use]
    pub fn clamp_width(&self, width: f64) -> f64 {
        let mut w = if width.is_finite() { width.max(0.0) } else { 0.0 };
        if let Some(max) = self.max_width.filter(|m| m.is_finite()) {
            w = w.min(max.max(0.0));
        }
        if let Some(min) = self.min_width.filter(|m| m.is_finite()) {
            w = w.max(min);
        }
        w
    }

    /// The raw cell value of `row`.
    #[must_use]
    pub fn cell<'r>(&self, row: &'r Row) -> &'r Value {
        row.get(&self.prop)
    }

    /// The cell value of `row` as displayed (formatter applied).
    #[must_use]
    pub fn display(&self, row: &Row) -> String {
        self.format_value(self.cell(row))
    }

    /// Format an arbitrary value the way this column displays cells.
    #[must_use]
    pub fn format_value(&self, value: &Value) -> String {
        match &self.formatter {
            Some(f) => f(value),
            None => value.to_display_string(),
        }
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("prop", &self.prop)
            .field("comparator", &self.comparator.as_ref().map(|_| ".."))
            .field("formatter", &self.formatter.as_ref().map(|_| ".."))
            .field("width", &self.width)
            .field("min_width", &self.min_width)
            .field("max_width", &self.max_width)
            .field("flex_grow", &self.flex_grow)
            .field("pin", &self.pin)
            .field("flags", &self.flags)
            .field("summary", &self.summary)
            .finish()
    }
}

/// `"firstName"` / `"first_name"` / `"address.city"` to `"First Name"` /
/// `"First Name"` / `"Address City"`.
fn title_case(raw: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;
    for ch in raw.chars() {
        if matches!(ch, '_' | '-' | '.' | ' ') {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if ch.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        current.push(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
        .iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
