//! Shared helpers for codelock benchmark suites.

use codelock_harness::config::{LockConfig, LockConfigInput};
use codelock_harness::run_dir::{build_run_artifacts, RunManifest};
use codelock_harness::session::evaluate;
use codelock_kernel::carrier::code::Code;

/// A named start/goal pair with a known search shape.
pub struct Regime {
    pub name: &'static str,
    pub start: Code,
    pub goal: Code,
}

fn regime(name: &'static str, start: &str, goal: &str) -> Regime {
    Regime {
        name,
        start: Code::parse(start).unwrap_or_else(|e| panic!("{name}: {e}")),
        goal: Code::parse(goal).unwrap_or_else(|e| panic!("{name}: {e}")),
    }
}

/// Regimes from a handful of expansions up to the whole 4-dial space.
///
/// - `adjacent`: one move apart.
/// - `default_lock`: `0000` to the default target, a 12-node optimal box.
/// - `mixed`: mid-distance on every dial, a few hundred expansions.
/// - `antipodal`: every dial at distance 5, so every code is on some
///   shortest path and all 10^4 are expanded.
/// - `wide`: 6 dials, antipodal on half of them.
///
/// # Panics
///
/// Panics if a regime literal is not a valid code.
#[must_use]
pub fn regimes() -> Vec<Regime> {
    vec![
        regime("adjacent", "0000", "0001"),
        regime("default_lock", "0000", "2910"),
        regime("mixed", "1234", "8765"),
        regime("antipodal", "0000", "5555"),
        regime("wide", "000000", "555123"),
    ]
}

/// Judge `attempt` against `target` and build the run artifacts in memory,
/// the same work `codelock --save` does minus the filesystem.
///
/// # Panics
///
/// Panics if any step fails. Benchmark setup failures are fatal.
#[must_use]
pub fn judge_and_build(target: &Code, attempt: &Code) -> RunManifest {
    let config = LockConfig::build(&LockConfigInput {
        digits: Some(target.width()),
        target: Some(target.to_string()),
    })
    .unwrap_or_else(|e| panic!("config: {e}"));
    let report = evaluate(&config, attempt).unwrap_or_else(|e| panic!("evaluate: {e}"));
    build_run_artifacts(&config, &report).unwrap_or_else(|e| panic!("artifacts: {e}"))
}
