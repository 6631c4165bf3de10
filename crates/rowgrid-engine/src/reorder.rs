#![forbid(unsafe_code)]

//! Column reordering.

use rowgrid_core::{Column, GridError};

/// Move the column at `from` to `to`.
///
/// With `swap` the two columns trade places; otherwise the column is removed
/// and reinserted, shifting the ones in between by one.
///
/// ```
/// use rowgrid_core::Column;
/// use rowgrid_engine::reorder::reorder_columns;
///
/// let cols: Vec<_> = ["a", "b", "c", "d"].into_iter().map(Column::new).collect();
/// let ids = |v: &[Column]| v.iter().map(|c| c.id.clone()).collect::<Vec<_>>();
/// assert_eq!(ids(&reorder_columns(&cols, 0, 2, true).unwrap()), ["c", "b", "a", "d"]);
/// assert_eq!(ids(&reorder_columns(&cols, 0, 2, false).unwrap()), ["b", "c", "a", "d"]);
/// ```
pub fn reorder_columns(
    columns: &[Column],
    from: usize,
    to: usize,
    swap: bool,
) -> Result<Vec<Column>, GridError> {
    let len = columns.len();
    for index in [from, to] {
        if index >= len {
            return Err(GridError::ColumnIndexOutOfRange { index, len });
        }
    }
    let mut out = columns.to_vec();
    if swap {
        out.swap(from, to);
    } else {
        let moved = out.remove(from);
        out.insert(to, moved);
    }
    Ok(out)
}
