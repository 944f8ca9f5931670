//! Helpers for building codes and checking search results in lock tests.

use codelock_kernel::carrier::code::Code;
use codelock_kernel::operators::moves::move_between;
use codelock_search::search::SearchResult;

/// Parse a code literal.
///
/// # Panics
///
/// Panics if `text` is not a valid code. Test-only invariant.
#[must_use]
pub fn code(text: &str) -> Code {
    Code::parse(text).unwrap_or_else(|e| panic!("bad code literal {text:?}: {e}"))
}

/// Every code of the given width, in ascending order.
///
/// # Panics
///
/// Panics if `width` is 0 or larger than 8.
#[must_use]
pub fn all_codes(width: usize) -> Vec<Code> {
    assert!((1..=8).contains(&width), "width {width} out of range");
    let count = 10usize.pow(u32::try_from(width).unwrap_or(8));
    (0..count)
        .map(|n| Code::padded(&n.to_string(), width).unwrap_or_else(|e| panic!("{n}: {e}")))
        .collect()
}

/// Assert the structural guarantees every search result makes.
///
/// # Panics
///
/// Panics with a description of the first broken guarantee.
pub fn assert_well_formed(result: &SearchResult) {
    let path = &result.path;
    assert_eq!(path.first(), Some(&result.start), "path must begin at start");
    assert_eq!(path.last(), Some(&result.goal), "path must end at goal");
    assert_eq!(
        path.len() - 1,
        result.cost as usize,
        "cost must equal number of moves"
    );
    for step in path.windows(2) {
        assert!(
            move_between(&step[0], &step[1]).is_some(),
            "{} -> {} is not a single move",
            step[0],
            step[1]
        );
    }
}
