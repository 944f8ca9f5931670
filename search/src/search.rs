//! Search entry point and expansion loop.

use std::collections::HashMap;

use serde_json::json;
use tracing::{debug, trace};

use codelock_kernel::carrier::code::Code;
use codelock_kernel::operators::moves::neighbors;
use codelock_kernel::proof::canon::{canonical_json_bytes, CanonError};
use codelock_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_SEARCH_RESULT};

use crate::error::SearchError;
use crate::frontier::BestFirstFrontier;
use crate::heuristic::{CircularDistance, Heuristic};
use crate::node::SearchNode;
use crate::path::reconstruct_path;
use crate::policy::SearchPolicy;

/// Result of a search execution.
///
/// Constructed once per call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub start: Code,
    pub goal: Code,
    /// Codes from `start` to `goal`, both inclusive.
    pub path: Vec<Code>,
    /// Number of moves; always `path.len() - 1`.
    pub cost: u32,
    /// Nodes finalized, the goal included.
    pub expansions: u64,
    /// Largest open-set size seen.
    pub frontier_high_water: u64,
    /// Open-set entries discarded because their code was already closed.
    pub stale_pops: u64,
    /// Name of the heuristic that drove the search.
    pub heuristic: &'static str,
    /// Expanded codes in order, when the policy asked for them.
    pub expanded: Option<Vec<Code>>,
}

impl SearchResult {
    fn trivial(start: &Code, heuristic: &'static str, record: bool) -> Self {
        Self {
            start: start.clone(),
            goal: start.clone(),
            path: vec![start.clone()],
            cost: 0,
            expansions: 0,
            frontier_high_water: 0,
            stale_pops: 0,
            heuristic,
            expanded: record.then(Vec::new),
        }
    }

    /// Canonical JSON record of this result.
    ///
    /// The expansion log is excluded; it is a diagnostic and does not
    /// change what the search decided.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let path: Vec<&str> = self.path.iter().map(Code::as_str).collect();
        json!({
            "schema_version": "search_result.v1",
            "start": self.start.as_str(),
            "goal": self.goal.as_str(),
            "path": path,
            "cost": self.cost,
            "expansions": self.expansions,
            "frontier_high_water": self.frontier_high_water,
            "stale_pops": self.stale_pops,
            "heuristic": self.heuristic,
        })
    }

    /// Serialize the record to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content hash of the canonical record.
    ///
    /// Two runs with the same inputs must produce the same digest.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(DOMAIN_SEARCH_RESULT, &bytes))
    }
}

/// Find a minimum-move path from `start` to `goal`.
///
/// Uses the circular-distance heuristic and the default policy.
///
/// # Errors
///
/// See [`search_with`].
pub fn search(start: &Code, goal: &Code) -> Result<SearchResult, SearchError> {
    search_with(start, goal, &SearchPolicy::default(), &CircularDistance)
}

/// Run A* from `start` to `goal`.
///
/// The open set is ordered by `(f, g, code)` ascending. Each popped code
/// that is not yet closed is closed, its predecessor recorded and the
/// expansion counter incremented; the goal is recognized when popped, not
/// when generated. A neighbor is pushed only when its tentative cost is
/// strictly better than any cost recorded for it so far.
///
/// All bookkeeping maps are local to this call.
///
/// # Errors
///
/// - [`SearchError::WidthMismatch`] if the codes differ in width.
/// - [`SearchError::NoPathFound`] / [`SearchError::BrokenPredecessorChain`]
///   only if an engine invariant is broken.
pub fn search_with(
    start: &Code,
    goal: &Code,
    policy: &SearchPolicy,
    heuristic: &dyn Heuristic,
) -> Result<SearchResult, SearchError> {
    if start.width() != goal.width() {
        return Err(SearchError::WidthMismatch {
            start: start.width(),
            goal: goal.width(),
        });
    }

    debug!(%start, %goal, heuristic = heuristic.name(), "search started");

    if start == goal {
        debug!(%start, "start is the goal");
        return Ok(SearchResult::trivial(
            start,
            heuristic.name(),
            policy.record_expansions,
        ));
    }

    let mut frontier = BestFirstFrontier::new();
    let mut best_cost: HashMap<Code, u32> = HashMap::new();
    let mut predecessors: HashMap<Code, Option<Code>> = HashMap::new();
    let mut expanded = policy.record_expansions.then(Vec::new);
    let mut expansions: u64 = 0;

    best_cost.insert(start.clone(), 0);
    frontier.push(SearchNode {
        code: start.clone(),
        parent: None,
        g_cost: 0,
        h_cost: heuristic.estimate(start, goal),
    });

    while let Some(current) = frontier.pop() {
        expansions += 1;
        trace!(
            code = %current.code,
            g = current.g_cost,
            f = current.f_cost(),
            expansions,
            open = frontier.len(),
            "expand"
        );
        if let Some(log) = expanded.as_mut() {
            log.push(current.code.clone());
        }
        predecessors.insert(current.code.clone(), current.parent.clone());

        if current.code == *goal {
            let path = reconstruct_path(&predecessors, goal)?;
            debug_assert_eq!(path.len() - 1, current.g_cost as usize);
            debug!(
                %start,
                %goal,
                cost = current.g_cost,
                expansions,
                closed = frontier.closed_count(),
                stale_pops = frontier.stale_pops(),
                "search reached goal"
            );
            return Ok(SearchResult {
                start: start.clone(),
                goal: goal.clone(),
                path,
                cost: current.g_cost,
                expansions,
                frontier_high_water: frontier.high_water(),
                stale_pops: frontier.stale_pops(),
                heuristic: heuristic.name(),
                expanded,
            });
        }

        let tentative_g = current.g_cost + 1;
        for neighbor in neighbors(&current.code) {
            if frontier.is_closed(&neighbor) {
                continue;
            }
            if best_cost
                .get(&neighbor)
                .is_some_and(|&known| known <= tentative_g)
            {
                continue;
            }
            best_cost.insert(neighbor.clone(), tentative_g);
            let h_cost = heuristic.estimate(&neighbor, goal);
            frontier.push(SearchNode {
                code: neighbor,
                parent: Some(current.code.clone()),
                g_cost: tentative_g,
                h_cost,
            });
        }
    }

    debug_assert!(frontier.is_empty());
    Err(SearchError::NoPathFound {
        start: start.clone(),
        goal: goal.clone(),
        expansions,
    })
}
