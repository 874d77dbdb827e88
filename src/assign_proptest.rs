#![cfg(test)]

// Property tests for assign_existing_keys / assign_existing_entries. Target
// and source keys share a small pool so they overlap often; the target's
// key set and order must survive every call.

use crate::assign::{assign_existing_entries, assign_existing_keys};
use indexmap::IndexMap;
use proptest::prelude::*;
use std::collections::BTreeSet;

const POOL: u8 = 8;

fn key(i: u8) -> String {
    format!("k{}", i % POOL)
}

fn arb_map() -> impl Strategy<Value = IndexMap<String, Option<i32>>> {
    proptest::collection::vec((0u8..POOL, proptest::option::of(any::<i32>())), 0..12)
        .prop_map(|pairs| pairs.into_iter().map(|(k, v)| (key(k), v)).collect())
}

fn key_set(m: &IndexMap<String, Option<i32>>) -> BTreeSet<String> {
    m.keys().cloned().collect()
}

proptest! {
    #[test]
    fn prop_assign_keeps_key_set(target in arb_map(), source in arb_map()) {
        let mut target = target;
        let before = target.clone();
        assign_existing_keys(&mut target, &source);

        prop_assert_eq!(key_set(&target), key_set(&before));
        // Order of the target is untouched too.
        prop_assert!(target.keys().eq(before.keys()));
        for (k, v) in &target {
            match source.get(k) {
                Some(sv) => prop_assert_eq!(v, sv),
                None => prop_assert_eq!(Some(v), before.get(k)),
            }
        }
    }

    #[test]
    fn prop_assign_empty_source_is_noop(target in arb_map()) {
        let mut target = target;
        let before = target.clone();
        assign_existing_keys(&mut target, &IndexMap::new());
        prop_assert_eq!(target, before);
    }

    #[test]
    fn prop_assign_entries_agrees(target in arb_map(), source in arb_map()) {
        let mut by_ref = target.clone();
        let mut by_val = target;
        assign_existing_keys(&mut by_ref, &source);
        assign_existing_entries(&mut by_val, source);
        prop_assert_eq!(by_ref, by_val);
    }
}
