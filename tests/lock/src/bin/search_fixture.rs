//! Binary that runs a fixed set of searches and prints deterministic
//! output lines for cross-process verification.
//!
//! Usage: `search_fixture`
//!
//! Output: one `key=value` line per field, grouped by `start->goal`.

use codelock_harness::config::{LockConfig, LockConfigInput};
use codelock_harness::run_dir::build_run_artifacts;
use codelock_harness::session::evaluate;
use codelock_kernel::carrier::code::Code;
use codelock_search::search::search;

const PAIRS: &[(&str, &str)] = &[
    ("0000", "2910"),
    ("0000", "5555"),
    ("1234", "8765"),
    ("9999", "0000"),
    ("42", "42"),
];

fn main() {
    for &(start, goal) in PAIRS {
        let start = Code::parse(start).expect("fixture start code");
        let goal = Code::parse(goal).expect("fixture goal code");
        let result = search(&start, &goal).expect("search failed");
        let digest = result.digest().expect("digest failed");

        let prefix = format!("{start}->{goal}");
        println!("{prefix}.result_digest={}", digest.as_str());
        println!("{prefix}.cost={}", result.cost);
        println!("{prefix}.expansions={}", result.expansions);
        println!("{prefix}.stale_pops={}", result.stale_pops);
    }

    let config = LockConfig::build(&LockConfigInput::default()).expect("default config");
    let attempt = Code::parse("0000").expect("attempt code");
    let report = evaluate(&config, &attempt).expect("evaluate failed");
    let manifest = build_run_artifacts(&config, &report).expect("run artifacts");
    for artifact in &manifest.artifacts {
        println!("run.{}={}", artifact.name, artifact.content_hash.as_str());
    }
}
