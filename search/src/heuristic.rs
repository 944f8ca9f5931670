//! Remaining-cost estimates.
//!
//! A move changes exactly one digit by one circular step, so the summed
//! per-digit circular distance drops by at most 1 per move and is 0 only at
//! the goal. It is therefore admissible and consistent:
//! `h(n) <= 1 + h(n')` for every edge `n -> n'`.

use codelock_kernel::carrier::code::Code;
use codelock_kernel::carrier::digit::digit_distance;

/// Trait for remaining-cost estimates.
///
/// Implementations must be admissible for [`crate::search::search_with`] to
/// return optimal paths, and consistent for every code to be expanded at
/// most once. Both codes always have the same width.
pub trait Heuristic: Send + Sync {
    /// Lower bound on the number of moves from `code` to `goal`.
    fn estimate(&self, code: &Code, goal: &Code) -> u32;

    /// Stable identifier recorded in search results.
    fn name(&self) -> &'static str;
}

/// Sum of per-digit circular distances. The default heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct CircularDistance;

impl Heuristic for CircularDistance {
    fn estimate(&self, code: &Code, goal: &Code) -> u32 {
        heuristic(code, goal)
    }

    fn name(&self) -> &'static str {
        "circular_distance"
    }
}

/// Always 0; turns A* into uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _code: &Code, _goal: &Code) -> u32 {
        0
    }

    fn name(&self) -> &'static str {
        "zero"
    }
}

/// Summed circular distance between corresponding digits of `code` and `goal`.
///
/// On this graph the positions are independent and every move is one step
/// on one dial, so the value is also the exact shortest-path length.
#[must_use]
pub fn heuristic(code: &Code, goal: &Code) -> u32 {
    debug_assert_eq!(code.width(), goal.width());
    code.digits()
        .zip(goal.digits())
        .map(|(a, b)| digit_distance(a, b))
        .sum()
}
