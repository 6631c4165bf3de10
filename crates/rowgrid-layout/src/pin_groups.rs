#![forbid(unsafe_code)]

//! Per-region width totals.

use rowgrid_core::{Column, Pin};

/// Summed widths of the left-pinned, scrolling and right-pinned regions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PinGroupWidths {
    pub left: f64,
    pub center: f64,
    pub right: f64,
    pub total: f64,
}

impl PinGroupWidths {
    /// Width of one region.
    #[must_use]
    pub fn of(&self, pin: Pin) -> f64 {
        match pin {
            Pin::Left => self.left,
            Pin::Center => self.center,
            Pin::Right => self.right,
        }
    }
}

/// Sum resolved `widths` by the pin region of the matching column.
///
/// `widths` is paired with `columns` by position; extra entries on either
/// side are ignored.
#[must_use]
pub fn group_widths(columns: &[Column], widths: &[f64]) -> PinGroupWidths {
    let mut out = PinGroupWidths::default();
    for (col, &w) in columns.iter().zip(widths) {
        match col.pin {
            Pin::Left => out.left += w,
            Pin::Center => out.center += w,
            Pin::Right => out.right += w,
        }
    }
    out.total = out.left + out.center + out.right;
    out
}

/// Indices of `columns` grouped left, center, right, each in column order.
#[must_use]
pub fn pin_order(columns: &[Column]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..columns.len()).collect();
    order.sort_by_key(|&i| match columns[i].pin {
        Pin::Left => 0u8,
        Pin::Center => 1,
        Pin::Right => 2,
    });
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_by_region() {
        let columns = vec![
            Column::new("a").pin(Pin::Right),
            Column::new("b"),
            Column::new("c").pin(Pin::Left),
            Column::new("d"),
        ];
        let g = group_widths(&columns, &[10.0, 20.0, 30.0, 40.0]);
        assert_eq!(g.left, 30.0);
        assert_eq!(g.center, 60.0);
        assert_eq!(g.right, 10.0);
        assert_eq!(g.total, 100.0);
        assert_eq!(g.of(Pin::Center), 60.0);
        assert_eq!(pin_order(&columns), vec![2, 1, 3, 0]);
    }
}
