//! Golden lock for search results.
//!
//! Pins the chosen path, counters and result digest of a few fixed
//! searches. Any change to neighbor order, tie-breaking, the canonical
//! record or the hash domain shows up here first; if the change is
//! intentional, regenerate the values and say why in the commit.

use codelock_search::search::search;
use lock_tests::search_helpers::{assert_well_formed, code};

struct Golden {
    start: &'static str,
    goal: &'static str,
    cost: u32,
    expansions: u64,
    frontier_high_water: u64,
    digest: &'static str,
}

const GOLDEN: &[Golden] = &[
    Golden {
        start: "0000",
        goal: "2910",
        cost: 4,
        expansions: 12,
        frontier_high_water: 52,
        digest: "sha256:d099e2e3199feabb1958b31bae589b1a3cccac7214a75f7ab0d24abb3bf8acd0",
    },
    Golden {
        start: "0000",
        goal: "0001",
        cost: 1,
        expansions: 2,
        frontier_high_water: 8,
        digest: "sha256:1ec478fc141d9f0cabacf0343f1a8fcce5e484087ba60e0da45a921ea204d564",
    },
    Golden {
        start: "9999",
        goal: "0000",
        cost: 4,
        expansions: 16,
        frontier_high_water: 61,
        digest: "sha256:628599843f5bf9cc2b3aa28a67b036c76c27b16621d566ef353e28eba1433611",
    },
    Golden {
        start: "1234",
        goal: "8765",
        cost: 12,
        expansions: 320,
        frontier_high_water: 638,
        digest: "sha256:f880552df7c9708727aebdd6a800921982b1b710b545dc04e6cce33eb696b7c2",
    },
    Golden {
        start: "42",
        goal: "42",
        cost: 0,
        expansions: 0,
        frontier_high_water: 0,
        digest: "sha256:3bebb49b3ef06e3e54d74a0bd901cc0a1af0dab60c994b8f9696178c0d538291",
    },
];

#[test]
fn golden_searches_match() {
    for g in GOLDEN {
        let result = search(&code(g.start), &code(g.goal)).unwrap();
        let label = format!("{} -> {}", g.start, g.goal);
        assert_well_formed(&result);
        assert_eq!(result.cost, g.cost, "{label}: cost");
        assert_eq!(result.expansions, g.expansions, "{label}: expansions");
        assert_eq!(
            result.frontier_high_water, g.frontier_high_water,
            "{label}: frontier_high_water"
        );
        assert_eq!(result.stale_pops, 0, "{label}: stale_pops");
        assert_eq!(result.digest().unwrap().as_str(), g.digest, "{label}: digest");
    }
}

#[test]
fn golden_paths_follow_tie_break() {
    let path: Vec<String> = search(&code("0000"), &code("2910"))
        .unwrap()
        .path
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(path, ["0000", "0010", "0910", "1910", "2910"]);

    let path: Vec<String> = search(&code("9999"), &code("0000"))
        .unwrap()
        .path
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(path, ["9999", "0999", "0099", "0009", "0000"]);
}

#[test]
fn canonical_record_bytes_are_pinned() {
    let result = search(&code("0000"), &code("0001")).unwrap();
    let bytes = result.to_canonical_json_bytes().unwrap();
    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        r#"{"cost":1,"expansions":2,"frontier_high_water":8,"goal":"0001","heuristic":"circular_distance","path":["0000","0001"],"schema_version":"search_result.v1","stale_pops":0,"start":"0000"}"#
    );
}
