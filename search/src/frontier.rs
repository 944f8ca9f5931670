//! Best-first open set with a closed set and lazy stale pruning.
//!
//! There is no decrease-key: a better route to a code is pushed as a new
//! entry, and the older, worse entry is discarded when it surfaces after the
//! code has already been closed.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use codelock_kernel::carrier::code::Code;

use crate::node::{FrontierKey, SearchNode};

/// A frontier entry: ordering key plus the back-reference it was pushed with.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior.
#[derive(Debug)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    parent: Option<Code>,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Open set + closed set for one search invocation.
pub struct BestFirstFrontier {
    heap: BinaryHeap<FrontierEntry>,
    closed: HashSet<Code>,
    high_water: u64,
    stale_pops: u64,
}

impl BestFirstFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            closed: HashSet::new(),
            high_water: 0,
            stale_pops: 0,
        }
    }

    /// Push a candidate. Duplicates of an open code are allowed.
    pub fn push(&mut self, node: SearchNode) {
        let key = FrontierKey::from(&node);
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            parent: node.parent,
        });
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Pop the best entry whose code is not yet closed, and close it.
    ///
    /// Entries for already-closed codes are discarded on the way and counted
    /// as stale pops. Returns `None` once the open set is exhausted.
    pub fn pop(&mut self) -> Option<SearchNode> {
        while let Some(FrontierEntry {
            key: Reverse(key),
            parent,
        }) = self.heap.pop()
        {
            if self.closed.contains(&key.code) {
                self.stale_pops += 1;
                continue;
            }
            self.closed.insert(key.code.clone());
            return Some(SearchNode {
                h_cost: key.f_cost - key.g_cost,
                g_cost: key.g_cost,
                code: key.code,
                parent,
            });
        }
        None
    }

    #[must_use]
    pub fn is_closed(&self, code: &Code) -> bool {
        self.closed.contains(code)
    }

    /// Number of open-set entries, stale ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[must_use]
    pub fn closed_count(&self) -> usize {
        self.closed.len()
    }

    /// High-water mark of open-set size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }

    /// Entries discarded because their code was already closed.
    #[must_use]
    pub fn stale_pops(&self) -> u64 {
        self.stale_pops
    }
}

impl Default for BestFirstFrontier {
    fn default() -> Self {
        Self::new()
    }
}
