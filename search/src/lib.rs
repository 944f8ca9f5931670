//! Codelock Search: deterministic A* over the combination-lock move graph.
//!
//! This crate provides the search layer. It depends only on
//! `codelock_kernel`; it does NOT depend on `codelock_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! codelock_kernel  ←  codelock_search  ←  codelock_harness
//! (codes, moves)      (heuristic, A*)      (config, session, rendering)
//! ```
//!
//! # Key types
//!
//! - [`search::search`]: primary entry point, returns an optimal path
//! - [`heuristic::Heuristic`]: trait for remaining-cost estimates
//! - [`frontier::BestFirstFrontier`]: open set with lazy stale pruning
//! - [`node::FrontierKey`]: the `(f, g, code)` ordering key
//! - [`search::SearchResult`]: path, cost and expansion diagnostics

#![forbid(unsafe_code)]

pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod path;
pub mod policy;
pub mod search;
