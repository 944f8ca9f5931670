//! Path assembly from the call-local predecessor index.

use std::collections::HashMap;

use codelock_kernel::carrier::code::Code;
use codelock_kernel::operators::moves::{move_between, Move};

use crate::error::SearchError;

/// Reconstruct the path from the start to `goal`.
///
/// Walks `predecessors` back from `goal` until a code whose predecessor is
/// `None` (the start), then reverses. The walk is bounded by the index
/// size, so a cyclic index is reported instead of looping forever.
///
/// # Errors
///
/// [`SearchError::BrokenPredecessorChain`] if a code on the walk is missing
/// from the index or the walk does not terminate.
pub fn reconstruct_path(
    predecessors: &HashMap<Code, Option<Code>>,
    goal: &Code,
) -> Result<Vec<Code>, SearchError> {
    let mut path = Vec::new();
    let mut current = goal.clone();

    loop {
        if path.len() > predecessors.len() {
            return Err(SearchError::BrokenPredecessorChain { at: current });
        }
        let parent = predecessors
            .get(&current)
            .ok_or_else(|| SearchError::BrokenPredecessorChain {
                at: current.clone(),
            })?
            .clone();
        path.push(current);
        match parent {
            Some(p) => current = p,
            None => break,
        }
    }

    path.reverse();
    Ok(path)
}

/// The moves along `path`, or `None` if any consecutive pair is not
/// exactly one move apart.
#[must_use]
pub fn path_moves(path: &[Code]) -> Option<Vec<Move>> {
    path.windows(2)
        .map(|pair| move_between(&pair[0], &pair[1]))
        .collect()
}
