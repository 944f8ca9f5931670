//! Codelock Kernel: the state model of an N-digit combination lock.
//!
//! # API Surface
//!
//! - [`carrier::code::Code`] -- a validated, fixed-width digit code
//! - [`carrier::digit::digit_distance`] -- circular distance between two digits
//! - [`operators::moves::neighbors`] -- every code one move away
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 content hash
//!
//! # Module Dependency Direction
//!
//! `carrier` ← `operators` ← `proof`
//!
//! One-way only. `carrier` depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod operators;
pub mod proof;
