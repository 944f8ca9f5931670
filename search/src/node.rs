//! Search node and frontier ordering key.

use codelock_kernel::carrier::code::Code;

/// A candidate entry in the open set.
///
/// Ordering for frontier extraction uses `(f_cost, g_cost, code)` where
/// `f_cost = g_cost + h_cost`. Lower is better on every component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    pub code: Code,
    /// Code this entry was reached from (`None` for the start).
    pub parent: Option<Code>,
    /// Moves taken from the start along the recorded route.
    pub g_cost: u32,
    /// Heuristic estimate to the goal.
    pub h_cost: u32,
}

impl SearchNode {
    /// Compute `f_cost = g_cost + h_cost` (the primary ordering key).
    #[must_use]
    pub fn f_cost(&self) -> u32 {
        self.g_cost.saturating_add(self.h_cost)
    }
}

/// The frontier ordering key: `(f_cost, g_cost, code)`.
///
/// Lower `f_cost` first, then lower `g_cost`, then the lexicographically
/// smaller code. The final component makes extraction order a total order,
/// which fixes which of several optimal paths a search returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierKey {
    pub f_cost: u32,
    pub g_cost: u32,
    pub code: Code,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f_cost
            .cmp(&other.f_cost)
            .then(self.g_cost.cmp(&other.g_cost))
            .then_with(|| self.code.cmp(&other.code))
    }
}

impl From<&SearchNode> for FrontierKey {
    fn from(node: &SearchNode) -> Self {
        Self {
            f_cost: node.f_cost(),
            g_cost: node.g_cost,
            code: node.code.clone(),
        }
    }
}
