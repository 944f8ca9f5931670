//! The move relation: one digit, one step, either direction.
//!
//! A move never fails on a valid code whose width covers its position; the
//! relation is symmetric (every move can be undone by another) and every code has
//! exactly `2 * width` outgoing moves.
//!
//! # Enumeration order
//!
//! [`moves`] and [`neighbors`] are position-major, `Decrement` before
//! `Increment`. Callers that need a different order sort the result; nothing
//! in the kernel depends on hash iteration order.

use std::fmt;

use crate::carrier::code::Code;
use crate::carrier::digit::{decrement, increment};

/// Which way a single dial turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// `d - 1 (mod 10)`.
    Decrement,
    /// `d + 1 (mod 10)`.
    Increment,
}

impl Direction {
    /// Both directions in enumeration order.
    pub const ALL: [Self; 2] = [Self::Decrement, Self::Increment];

    /// Turn one digit in this direction.
    #[must_use]
    pub const fn turn(self, d: u8) -> u8 {
        match self {
            Self::Decrement => decrement(d),
            Self::Increment => increment(d),
        }
    }

    const fn sign(self) -> char {
        match self {
            Self::Decrement => '-',
            Self::Increment => '+',
        }
    }
}

/// A single unit-cost transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move {
    /// Digit position, `0` is the leftmost dial.
    pub position: usize,
    pub direction: Direction,
}

/// Typed failure for move application.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The move addresses a dial the code does not have.
    #[error("move position {position} out of range for a {width}-digit code")]
    PositionOutOfRange { position: usize, width: usize },
}

impl Move {
    #[must_use]
    pub const fn new(position: usize, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }

    /// Apply this move to `code`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::PositionOutOfRange`] if `position >= code.width()`.
    pub fn apply(self, code: &Code) -> Result<Code, MoveError> {
        let d = code.digit(self.position).ok_or(MoveError::PositionOutOfRange {
            position: self.position,
            width: code.width(),
        })?;
        Ok(code.with_digit(self.position, self.direction.turn(d)))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}{}", self.position, self.direction.sign())
    }
}

/// All `2 * width` moves in enumeration order.
pub fn moves(width: usize) -> impl Iterator<Item = Move> {
    (0..width).flat_map(|position| Direction::ALL.map(|direction| Move::new(position, direction)))
}

/// Every code exactly one move away from `code`.
///
/// Always returns `2 * code.width()` codes. For radix 10 the two directions
/// never alias, so the codes are pairwise distinct.
#[must_use]
pub fn neighbors(code: &Code) -> Vec<Code> {
    // Every position produced by `moves(width)` is in range.
    moves(code.width())
        .filter_map(|m| m.apply(code).ok())
        .collect()
}

/// The single move taking `from` to `to`, if they are adjacent.
///
/// Returns `None` for codes of different width, equal codes, or codes that
/// differ in more than one position or by more than one step.
#[must_use]
pub fn move_between(from: &Code, to: &Code) -> Option<Move> {
    if from.width() != to.width() {
        return None;
    }
    let mut found = None;
    for (position, (a, b)) in from.digits().zip(to.digits()).enumerate() {
        if a == b {
            continue;
        }
        if found.is_some() {
            return None;
        }
        let direction = Direction::ALL.into_iter().find(|dir| dir.turn(a) == b)?;
        found = Some(Move::new(position, direction));
    }
    found
}
