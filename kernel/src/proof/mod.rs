//! Proof module: canonical JSON and content hashing for reproducibility checks.

pub mod canon;
pub mod hash;
