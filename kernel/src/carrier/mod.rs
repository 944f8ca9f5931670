//! Carrier module: `Code` and single-digit arithmetic.
//!
//! This is the foundational layer. No other kernel module is imported here.

pub mod code;
pub mod digit;
