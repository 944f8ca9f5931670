//! Lock configuration: how many dials, and which code opens the lock.
//!
//! The binary feeds [`LockConfigInput`] from CLI flags and environment
//! variables; anything left unset falls back to the defaults below.

use codelock_kernel::carrier::code::{Code, CodeError};

/// Default number of dials.
pub const DEFAULT_DIGITS: usize = 4;

/// Default code that opens the lock.
pub const DEFAULT_TARGET: &str = "2910";

/// Largest supported dial count (10^8 codes).
pub const MAX_DIGITS: usize = 8;

/// Optional overrides for [`LockConfig`].
#[derive(Debug, Clone, Default)]
pub struct LockConfigInput {
    /// Dial count. `None` uses `DEFAULT_DIGITS`, or the target's width when
    /// only a target is given.
    pub digits: Option<usize>,
    /// Target code text. `None` uses `DEFAULT_TARGET`.
    pub target: Option<String>,
}

/// Error building a [`LockConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("dial count {digits} is outside 1..={max}", max = MAX_DIGITS)]
    DigitsOutOfRange { digits: usize },
    #[error("invalid target code: {0}")]
    InvalidTarget(#[source] CodeError),
}

/// Validated lock configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockConfig {
    digits: usize,
    target: Code,
}

impl LockConfig {
    /// Build a configuration from optional overrides.
    ///
    /// # Errors
    ///
    /// [`ConfigError::DigitsOutOfRange`] for a dial count outside
    /// `1..=MAX_DIGITS`; [`ConfigError::InvalidTarget`] if the target is
    /// not exactly `digits` decimal digits.
    pub fn build(input: &LockConfigInput) -> Result<Self, ConfigError> {
        let target_text = input.target.as_deref().unwrap_or(DEFAULT_TARGET);
        let digits = match (input.digits, &input.target) {
            (Some(d), _) => d,
            (None, Some(t)) => t.chars().count(),
            (None, None) => DEFAULT_DIGITS,
        };
        if !(1..=MAX_DIGITS).contains(&digits) {
            return Err(ConfigError::DigitsOutOfRange { digits });
        }
        let target = Code::parse_width(target_text, digits).map_err(ConfigError::InvalidTarget)?;
        Ok(Self { digits, target })
    }

    #[must_use]
    pub fn digits(&self) -> usize {
        self.digits
    }

    #[must_use]
    pub fn target(&self) -> &Code {
        &self.target
    }

    /// Configuration echo for run records.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "digits": self.digits,
            "target": self.target.as_str(),
        })
    }
}
