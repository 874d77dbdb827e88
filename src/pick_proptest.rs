#![cfg(test)]

// Property tests for pick / picked, checked against filtering a plain
// iteration of the source. Requested keys come from a pool slightly larger
// than the source's, so hits, misses and repeats are all common.

use crate::pick::{pick, picked};
use indexmap::IndexMap;
use proptest::prelude::*;

const POOL: u8 = 8;

fn key(i: u8) -> String {
    format!("k{}", i % POOL)
}

fn arb_map() -> impl Strategy<Value = IndexMap<String, Option<i32>>> {
    proptest::collection::vec((0u8..POOL, proptest::option::of(any::<i32>())), 0..12)
        .prop_map(|pairs| pairs.into_iter().map(|(k, v)| (key(k), v)).collect())
}

fn arb_keys() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec((0u8..POOL + 2).prop_map(|i| format!("k{}", i)), 0..10)
}

proptest! {
    #[test]
    fn prop_pick_matches_filter_model(obj in arb_map(), keys in arb_keys()) {
        let before = obj.clone();
        let out = pick(&obj, &keys);

        // Model: obj's entries in order, filtered by membership in keys.
        let model: Vec<(String, Option<i32>)> = obj
            .iter()
            .filter(|(k, _)| keys.contains(k))
            .map(|(k, v)| (k.clone(), *v))
            .collect();
        prop_assert_eq!(out.clone().into_iter().collect::<Vec<_>>(), model);

        for k in out.keys() {
            prop_assert!(keys.contains(k));
            prop_assert!(obj.contains_key(k));
        }
        prop_assert_eq!(&obj, &before);

        let borrowed: Vec<_> = picked(&obj, &keys).map(|(k, v)| (k.clone(), *v)).collect();
        prop_assert_eq!(borrowed, out.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn prop_pick_disjoint_is_empty(obj in arb_map()) {
        let keys = [format!("k{}", POOL), format!("k{}", POOL + 1)];
        prop_assert!(pick(&obj, &keys).is_empty());
        let none: [String; 0] = [];
        prop_assert!(pick(&obj, &none).is_empty());
    }
}
