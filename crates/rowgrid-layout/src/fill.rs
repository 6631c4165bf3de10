#![forbid(unsafe_code)]

//! Width policies.
//!
//! Both growing policies follow the same iterative scheme: hand out the
//! remaining space by weight, look for columns whose share would break their
//! bounds, fix those at the bound and drop them from the pool, then repeat
//! with what is left. Every pass either commits or shrinks the pool, so the
//! loop runs at most `n + 1` times.

use crate::pinned::PinnedWidths;
use rowgrid_core::Column;

const EPSILON: f64 = 1e-9;

/// Knobs for [`force_fill_widths`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForceFillOptions {
    /// When the columns already overflow the available width, keep their
    /// widths (let the table bleed) instead of shrinking them.
    pub allow_bleed: bool,
    /// Index of a column the user just resized. Only columns after it take
    /// part in the redistribution.
    pub resized_index: Option<usize>,
}

impl ForceFillOptions {
    #[must_use]
    pub fn allow_bleed(mut self, on: bool) -> Self {
        self.allow_bleed = on;
        self
    }

    #[must_use]
    pub fn resized_index(mut self, index: Option<usize>) -> Self {
        self.resized_index = index;
        self
    }
}

fn sanitize_total(total: f64) -> f64 {
    if total.is_finite() { total.max(0.0) } else { 0.0 }
}

/// Declared (or pinned) widths clamped into bounds.
#[must_use]
pub fn standard_widths(columns: &[Column], pinned: &PinnedWidths) -> Vec<f64> {
    columns.iter().map(|c| pinned.base_width(c)).collect()
}

/// Force-fill: make the auto-resizable columns exactly fill `total`.
///
/// The space left after the fixed columns (pinned, not auto-resizable, or at
/// or before `resized_index`) is spread over the rest in proportion to their
/// current widths, or equally when those are all zero. Shares that would
/// cross a column's bounds are clamped and the difference is spread again
/// over the remaining columns.
#[must_use]
pub fn force_fill_widths(
    columns: &[Column],
    total: f64,
    pinned: &PinnedWidths,
    options: ForceFillOptions,
) -> Vec<f64> {
    let total = sanitize_total(total);
    let mut widths = standard_widths(columns, pinned);

    let participates = |i: usize, col: &Column| {
        col.can_auto_resize()
            && !pinned.is_pinned(&col.id)
            && options.resized_index.is_none_or(|r| i > r)
    };
    let mut pool: Vec<usize> = columns
        .iter()
        .enumerate()
        .filter(|&(i, c)| participates(i, c))
        .map(|(i, _)| i)
        .collect();
    if pool.is_empty() {
        return widths;
    }

    let fixed: f64 = (0..columns.len())
        .filter(|i| !pool.contains(i))
        .map(|i| widths[i])
        .sum();
    let available = (total - fixed).max(0.0);
    let content: f64 = pool.iter().map(|&i| widths[i]).sum();

    if options.allow_bleed && content > available {
        return widths;
    }

    let base = widths.clone();
    let mut committed = 0.0;
    loop {
        let pool_base: f64 = pool.iter().map(|&i| base[i]).sum();
        let remaining = available - committed - pool_base;

        let share_of = |i: usize| {
            if pool_base > EPSILON {
                remaining * base[i] / pool_base
            } else {
                remaining / pool.len() as f64
            }
        };

        let violations: Vec<usize> = pool
            .iter()
            .copied()
            .filter(|&i| {
                let target = base[i] + share_of(i);
                (columns[i].clamp_width(target) - target).abs() > EPSILON
            })
            .collect();

        if violations.is_empty() {
            for &i in &pool {
                widths[i] = columns[i].clamp_width(base[i] + share_of(i));
            }
            break;
        }

        let clamped: Vec<(usize, f64)> = violations
            .into_iter()
            .map(|i| (i, columns[i].clamp_width(base[i] + share_of(i))))
            .collect();
        for (i, w) in clamped {
            widths[i] = w;
            committed += w;
            pool.retain(|&p| p != i);
        }

        if pool.is_empty() {
            break;
        }
    }

    widths
}

/// Flex-grow: each column gets its base width plus its flex share of the
/// leftover space.
///
/// `width_i = base_i + flex_i / Σflex × max(0, total − Σbase)`. Negative
/// leftover is treated as zero, so no column shrinks below its base. A column
/// whose share would exceed its maximum is held at the maximum and the excess
/// goes to the others. Pinned columns keep their width and do not grow.
#[must_use]
pub fn flex_grow_widths(columns: &[Column], total: f64, pinned: &PinnedWidths) -> Vec<f64> {
    let total = sanitize_total(total);
    let mut widths = standard_widths(columns, pinned);
    let base_sum: f64 = widths.iter().sum();
    let mut remaining = (total - base_sum).max(0.0);

    let mut pool: Vec<usize> = columns
        .iter()
        .enumerate()
        .filter(|(_, c)| c.flex_grow.is_finite() && c.flex_grow > 0.0 && !pinned.is_pinned(&c.id))
        .map(|(i, _)| i)
        .collect();

    // Factors are scaled into (0, 1] so their sum stays finite.
    let max_flex = pool
        .iter()
        .map(|&i| columns[i].flex_grow)
        .fold(0.0_f64, f64::max);
    let weight = |i: usize| columns[i].flex_grow / max_flex;

    while remaining > EPSILON && !pool.is_empty() {
        let flex_sum: f64 = pool.iter().map(|&i| weight(i)).sum();
        let share_of = |i: usize| remaining * weight(i) / flex_sum;

        let violations: Vec<usize> = pool
            .iter()
            .copied()
            .filter(|&i| {
                columns[i]
                    .max_width
                    .is_some_and(|max| widths[i] + share_of(i) > max + EPSILON)
            })
            .collect();

        if violations.is_empty() {
            for &i in &pool {
                widths[i] += share_of(i);
            }
            break;
        }

        let grown: Vec<(usize, f64)> = violations
            .into_iter()
            .map(|i| (i, columns[i].clamp_width(widths[i] + share_of(i))))
            .collect();
        for (i, w) in grown {
            remaining = (remaining - (w - widths[i])).max(0.0);
            widths[i] = w;
            pool.retain(|&p| p != i);
        }
    }

    widths
}
