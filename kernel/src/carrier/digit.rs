//! Single-digit arithmetic on the circular dial `0..=9`.
//!
//! Every function here assumes its inputs are already in range; `Code`
//! construction is where digits get validated.

/// Number of positions on one dial.
pub const RADIX: u8 = 10;

/// The digit one step up the dial (`9` wraps to `0`).
#[must_use]
pub const fn increment(d: u8) -> u8 {
    (d + 1) % RADIX
}

/// The digit one step down the dial (`0` wraps to `9`).
#[must_use]
pub const fn decrement(d: u8) -> u8 {
    (d + RADIX - 1) % RADIX
}

/// Minimum number of single steps connecting `a` and `b` on the dial.
///
/// `min(|a - b|, 10 - |a - b|)`, always in `0..=5`.
#[must_use]
pub fn digit_distance(a: u8, b: u8) -> u32 {
    debug_assert!(a < RADIX && b < RADIX, "digits out of range: {a}, {b}");
    let diff = a.abs_diff(b);
    u32::from(diff.min(RADIX - diff))
}
