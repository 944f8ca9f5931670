//! Property tests over random code pairs.

use proptest::prelude::*;

use codelock_kernel::carrier::code::Code;
use codelock_search::heuristic::{heuristic, ZeroHeuristic};
use codelock_search::policy::SearchPolicy;
use codelock_search::search::{search, search_with};
use lock_tests::search_helpers::assert_well_formed;

fn arb_code(width: usize) -> impl Strategy<Value = Code> {
    proptest::collection::vec(0u8..10, width)
        .prop_map(|digits| Code::from_digits(&digits).unwrap())
}

fn arb_pair() -> impl Strategy<Value = (Code, Code)> {
    (1usize..=5).prop_flat_map(|w| (arb_code(w), arb_code(w)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn cost_equals_heuristic((start, goal) in arb_pair()) {
        let result = search(&start, &goal).unwrap();
        assert_well_formed(&result);
        prop_assert_eq!(result.cost, heuristic(&start, &goal));
    }

    #[test]
    fn cost_is_symmetric((a, b) in arb_pair()) {
        let forward = search(&a, &b).unwrap();
        let backward = search(&b, &a).unwrap();
        prop_assert_eq!(forward.cost, backward.cost);
    }

    #[test]
    fn uniform_cost_search_agrees(a in arb_code(3), b in arb_code(3)) {
        let informed = search(&a, &b).unwrap();
        let uniform = search_with(&a, &b, &SearchPolicy::default(), &ZeroHeuristic).unwrap();
        prop_assert_eq!(informed.cost, uniform.cost);
        prop_assert!(informed.expansions <= uniform.expansions);
    }

    #[test]
    fn expansion_log_matches_counter((a, b) in arb_pair()) {
        let result = search_with(
            &a,
            &b,
            &SearchPolicy::recording(),
            &codelock_search::heuristic::CircularDistance,
        )
        .unwrap();
        let log = result.expanded.as_ref().unwrap();
        prop_assert_eq!(log.len() as u64, result.expansions);
        if a != b {
            prop_assert_eq!(log.first(), Some(&a));
            prop_assert_eq!(log.last(), Some(&b));
        }
    }
}
