//! User input normalization: the validation boundary in front of the core.
//!
//! Raw text is trimmed, an empty line means "quit", short input is
//! zero-padded on the left, and anything else must be exactly `digits`
//! decimal digits.

use codelock_kernel::carrier::code::{Code, CodeError};

/// What one line of input asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attempt {
    /// Blank line: leave the session.
    Quit,
    /// A well-formed code of the configured width.
    Code(Code),
}

/// Rejected input line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid format. Use {digits} digits (0-9).")]
pub struct InputError {
    pub digits: usize,
    #[source]
    pub cause: CodeError,
}

/// Normalize one line of user input.
///
/// `"7"` with 4 dials becomes `0007`; `"  2910\n"` becomes `2910`.
///
/// # Errors
///
/// [`InputError`] when the trimmed text is longer than `digits` or contains
/// anything but `0`-`9`.
pub fn normalize_attempt(raw: &str, digits: usize) -> Result<Attempt, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Attempt::Quit);
    }
    Code::padded(trimmed, digits)
        .map(Attempt::Code)
        .map_err(|cause| InputError { digits, cause })
}
