#![forbid(unsafe_code)]

//! Whole-pixel rounding of fractional column widths.

use std::cmp::Ordering;

/// Round fractional widths to whole pixels that sum exactly to `total`.
///
/// Largest-remainder rounding: every width starts at its floor, and the
/// pixels still missing go to the widths with the largest fractional parts.
/// Equal remainders prefer the column that was rounded up last time (`prev`),
/// then the lower index, so a table that is resized by a pixel does not make
/// its columns flicker between neighbours. If the floors already exceed
/// `total`, the widest columns give pixels back one at a time.
///
/// Each result is `floor(t)` or `ceil(t)` of its target whenever the targets
/// sum to `total`.
///
/// ```
/// use rowgrid_layout::round_widths_stable;
///
/// let px = round_widths_stable(&[166.4, 166.3, 167.3], 500, None);
/// assert_eq!(px.iter().sum::<u32>(), 500);
/// assert_eq!(px, vec![167, 166, 167]);
/// ```
#[must_use]
pub fn round_widths_stable(targets: &[f64], total: u32, prev: Option<&[u32]>) -> Vec<u32> {
    if targets.is_empty() {
        return Vec::new();
    }

    let floors: Vec<u32> = targets
        .iter()
        .map(|&t| {
            if t.is_finite() {
                t.max(0.0).floor().min(f64::from(u32::MAX)) as u32
            } else {
                0
            }
        })
        .collect();
    let floor_sum: u64 = floors.iter().map(|&f| u64::from(f)).sum();

    if floor_sum > u64::from(total) {
        return give_back(floors, total);
    }
    let deficit = (u64::from(total) - floor_sum) as usize;
    if deficit == 0 {
        return floors;
    }

    let mut order: Vec<(usize, f64, bool)> = targets
        .iter()
        .enumerate()
        .map(|(i, &t)| {
            let remainder = if t.is_finite() {
                t.max(0.0) - f64::from(floors[i])
            } else {
                0.0
            };
            let ceil = floors[i].saturating_add(1);
            let was_ceil = prev.is_some_and(|p| p.get(i).copied() == Some(ceil));
            (i, remainder, was_ceil)
        })
        .collect();
    order.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.2.cmp(&a.2))
            .then_with(|| a.0.cmp(&b.0))
    });

    let mut result = floors;
    let n = result.len();
    // Hand out whole rounds first when the targets sum to less than `total`.
    let rounds = deficit / n;
    if rounds > 0 {
        for px in &mut result {
            *px = px.saturating_add(rounds as u32);
        }
    }
    for &(i, _, _) in order.iter().take(deficit % n) {
        result[i] = result[i].saturating_add(1);
    }
    result
}

fn give_back(mut widths: Vec<u32>, total: u32) -> Vec<u32> {
    let mut sum: u64 = widths.iter().map(|&w| u64::from(w)).sum();
    while sum > u64::from(total) {
        let Some((idx, _)) = widths
            .iter()
            .enumerate()
            .filter(|(_, w)| **w > 0)
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(&a.0)))
        else {
            break;
        };
        widths[idx] -= 1;
        sum -= 1;
    }
    widths
}
