//! Codelock Harness: the interactive front end around the search core.
//!
//! The harness owns everything the core deliberately does not: reading and
//! validating user input, deciding whether an attempt opens the lock,
//! rendering the explored neighborhood, and persisting a run to disk.
//!
//! The harness does NOT implement search logic; it delegates to
//! `codelock_search`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod input;
pub mod render;
pub mod run_dir;
pub mod session;
