//! Operators module: the move relation between codes.
//!
//! Depends on `carrier`. Does not import from `proof`.

pub mod moves;
