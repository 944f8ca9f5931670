//! `Code`: a fixed-width lock combination.
//!
//! # Canonical form
//!
//! A code is stored as its zero-padded ASCII text (`"0042"`, never `"42"`).
//! Equality, hashing and ordering all operate on that text, so two codes of
//! the same width order exactly as their numeric values do.
//!
//! # Validation boundary
//!
//! The only ways to obtain a `Code` are the validating constructors below.
//! Everything downstream (moves, heuristic, search) assumes a well-formed
//! code and never re-checks digits.

use std::fmt;
use std::str::FromStr;

use crate::carrier::digit::RADIX;

/// Typed failure for code construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeError {
    /// The input had no digits at all.
    #[error("code is empty")]
    Empty,
    /// A character other than `0`-`9` was found.
    #[error("non-digit character {found:?} at position {position}")]
    NonDigit { position: usize, found: char },
    /// A raw digit value was outside `0..=9`.
    #[error("digit value {value} at position {position} is outside 0-9")]
    DigitOutOfRange { position: usize, value: u8 },
    /// The input is longer than the configured width; it cannot be padded.
    #[error("code has {len} digits but the lock only has {width}")]
    TooLong { len: usize, width: usize },
    /// The input does not have exactly the expected width.
    #[error("expected a {expected}-digit code, got {found} digits")]
    WidthMismatch { expected: usize, found: usize },
}

/// A validated lock combination of fixed width.
///
/// Derives `Ord` so codes can key `BTreeMap`s and break frontier ties.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code(String);

impl Code {
    /// Parse a code of any non-zero width from its digit text.
    ///
    /// # Errors
    ///
    /// Returns [`CodeError::Empty`] for empty input and
    /// [`CodeError::NonDigit`] for any character outside `0`-`9`.
    pub fn parse(text: &str) -> Result<Self, CodeError> {
        if text.is_empty() {
            return Err(CodeError::Empty);
        }
        if let Some((position, found)) = text.chars().enumerate().find(|(_, c)| !c.is_ascii_digit())
        {
            return Err(CodeError::NonDigit { position, found });
        }
        Ok(Self(text.to_string()))
    }

    /// Parse a code that must have exactly `width` digits.
    ///
    /// # Errors
    ///
    /// Everything [`Code::parse`] rejects, plus
    /// [`CodeError::WidthMismatch`] when the digit count differs.
    pub fn parse_width(text: &str, width: usize) -> Result<Self, CodeError> {
        let code = Self::parse(text)?;
        if code.width() != width {
            return Err(CodeError::WidthMismatch {
                expected: width,
                found: code.width(),
            });
        }
        Ok(code)
    }

    /// Left-pad `text` with zeros up to `width`, then parse it.
    ///
    /// `"7"` at width 4 becomes `"0007"`.
    ///
    /// # Errors
    ///
    /// [`CodeError::TooLong`] if `text` already exceeds `width`, otherwise
    /// whatever [`Code::parse`] rejects.
    pub fn padded(text: &str, width: usize) -> Result<Self, CodeError> {
        if text.is_empty() {
            return Err(CodeError::Empty);
        }
        let len = text.chars().count();
        if len > width {
            return Err(CodeError::TooLong { len, width });
        }
        let mut full = "0".repeat(width - len);
        full.push_str(text);
        Self::parse(&full)
    }

    /// Build a code from raw digit values.
    ///
    /// # Errors
    ///
    /// [`CodeError::Empty`] for no digits, [`CodeError::DigitOutOfRange`]
    /// for any value above 9.
    pub fn from_digits(digits: &[u8]) -> Result<Self, CodeError> {
        if digits.is_empty() {
            return Err(CodeError::Empty);
        }
        let mut text = String::with_capacity(digits.len());
        for (position, &value) in digits.iter().enumerate() {
            if value >= RADIX {
                return Err(CodeError::DigitOutOfRange { position, value });
            }
            text.push(char::from(b'0' + value));
        }
        Ok(Self(text))
    }

    /// Number of digit positions.
    #[must_use]
    pub fn width(&self) -> usize {
        self.0.len()
    }

    /// The canonical zero-padded text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digit value at `position`, or `None` past the end.
    #[must_use]
    pub fn digit(&self, position: usize) -> Option<u8> {
        self.0.as_bytes().get(position).map(|b| b - b'0')
    }

    /// Digit values, most significant first.
    pub fn digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b - b'0')
    }

    /// Copy of this code with `position` set to `value`.
    ///
    /// Callers guarantee `position < width` and `value < 10`.
    #[must_use]
    pub(crate) fn with_digit(&self, position: usize, value: u8) -> Self {
        debug_assert!(position < self.width() && value < RADIX);
        let text = self
            .digits()
            .enumerate()
            .map(|(i, d)| char::from(b'0' + if i == position { value } else { d }))
            .collect();
        Self(text)
    }
}

impl fmt::Debug for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Code({})", self.0)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Code {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
