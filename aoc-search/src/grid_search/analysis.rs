//! Questions answered on top of distance maps.

use std::collections::BTreeMap;

use itertools::iproduct;

use super::Cost;
use super::distance::DistanceMap;
use super::state::Point;

/// Histogram of savings for every shortcut that beats `baseline`.
///
/// A shortcut jumps from track point `a` to track point `b` ignoring walls,
/// costing their Manhattan distance `d <= max_jump`. Its total cost is
/// `from_start[a] + d + to_end[b]`; shortcuts are identified by `(a, b)`.
/// `to_end` must hold distances *to* the end, which on an undirected track is
/// a search started from the end.
///
/// Keys are savings (always at least 1), values are shortcut counts.
pub fn shortcut_savings(
    from_start: &DistanceMap<Point>,
    to_end: &DistanceMap<Point>,
    baseline: Cost,
    max_jump: u64,
) -> BTreeMap<Cost, usize> {
    let mut savings = BTreeMap::new();
    for ((&a, &cost_a), (&b, &cost_b)) in iproduct!(from_start.iter(), to_end.iter()) {
        let jump = a.manhattan(b);
        if a == b || jump > max_jump {
            continue;
        }
        let total = cost_a.saturating_add(jump).saturating_add(cost_b);
        if let Some(saved) = baseline.checked_sub(total).filter(|&saved| saved > 0) {
            *savings.entry(saved).or_insert(0) += 1;
        }
    }
    savings
}

/// Number of shortcuts (see [`shortcut_savings`]) saving at least
/// `min_saving`.
pub fn count_shortcuts(
    from_start: &DistanceMap<Point>,
    to_end: &DistanceMap<Point>,
    baseline: Cost,
    max_jump: u64,
    min_saving: Cost,
) -> usize {
    shortcut_savings(from_start, to_end, baseline, max_jump)
        .range(min_saving.max(1)..)
        .map(|(_, count)| count)
        .sum()
}

/// Smallest `n` in `0..=len` for which `is_blocked(n)` holds.
///
/// `is_blocked` must be monotone (once true, true for every larger `n`), as
/// with "the exit is unreachable after the first `n` obstacles fell". Returns
/// `None` when even `n = len` is not blocked. Runs `O(log len)` probes.
pub fn first_blocking_prefix<F>(len: usize, mut is_blocked: F) -> Option<usize>
where
    F: FnMut(usize) -> bool,
{
    if !is_blocked(len) {
        return None;
    }
    let (mut lo, mut hi) = (0, len);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if is_blocked(mid) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    Some(lo)
}
