#![cfg(test)]

// Property tests for BucketTable kept inside the crate so they can check
// traversal counts and bucket growth directly.

use crate::bucket_table::BucketTable;
use crate::config::TableConfig;
use crate::hash::bucket_index;
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet, HashMap};

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Set(usize, String),
    Get(usize),
    Remove(usize),
    Contains(String),
    Clear,
    Snapshot,
}

fn arb_config() -> impl Strategy<Value = TableConfig> {
    (
        1usize..=8,
        proptest::sample::select(vec![0.1, 0.25, 0.5, 0.75, 1.0, 2.0]),
    )
        .prop_map(|(b, lf)| {
            TableConfig::new()
                .with_initial_buckets(b)
                .with_load_factor(lf)
        })
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=12).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            4 => (idx.clone(), "[0-9]{0,3}").prop_map(|(i, v)| OpI::Set(i, v)),
            2 => idx.clone().prop_map(OpI::Get),
            2 => idx.clone().prop_map(OpI::Remove),
            1 => prop_oneof![contains_pool, "[a-z]{0,5}"].prop_map(OpI::Contains),
            1 => Just(OpI::Clear),
            1 => Just(OpI::Snapshot),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Property: State-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - `get` returns the latest value set for every live key; overwrites keep `len`.
// - `remove` returns the model's value once, then absent; absent removal keeps `len`.
// - `len` equals the model size and the sum of chain sizes after every op.
// - After every insert, `len / bucket_count < load_factor`; a triggering insert
//   doubles exactly once whenever `load_factor * bucket_count >= 1`.
// - After a rehash, allocated chains = distinct bucket indices of live keys.
// - `clear` keeps the bucket count; the bucket count is always
//   `initial * 2^k` and never shrinks.
// - Iteration yields each live entry exactly once.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine(config in arb_config(), (pool, ops) in arb_scenario()) {
        let mut sut: BucketTable<String> = BucketTable::with_config(config).unwrap();
        let mut model: HashMap<String, String> = HashMap::new();
        let initial = config.initial_buckets;

        for op in ops {
            let buckets_before = sut.bucket_count();
            match op {
                OpI::Set(i, v) => {
                    let k = pool[i].clone();
                    let prev = sut.set(k.clone(), v.clone());
                    let mprev = model.insert(k, v);
                    prop_assert_eq!(prev.clone(), mprev);

                    let after = sut.bucket_count();
                    let ratio = sut.len() as f64 / after as f64;
                    prop_assert!(ratio < sut.load_factor(), "ratio {} not below threshold", ratio);
                    if prev.is_some() {
                        prop_assert_eq!(after, buckets_before, "overwrite must not grow");
                    } else if sut.len() as f64 / buckets_before as f64 >= sut.load_factor() {
                        if sut.load_factor() * buckets_before as f64 >= 1.0 {
                            prop_assert_eq!(after, buckets_before * 2);
                        } else {
                            prop_assert!(after >= buckets_before * 2);
                        }
                    } else {
                        prop_assert_eq!(after, buckets_before);
                    }
                    if after != buckets_before {
                        // Fresh array: only buckets holding a live key have a chain.
                        let occupied: BTreeSet<usize> =
                            model.keys().map(|k| bucket_index(k, after)).collect();
                        prop_assert_eq!(sut.allocated_chains(), occupied.len());
                    }
                }
                OpI::Get(i) => {
                    let k = &pool[i];
                    prop_assert_eq!(sut.get(k), model.get(k));
                    prop_assert_eq!(sut.contains(k), model.contains_key(k));
                }
                OpI::Remove(i) => {
                    let k = &pool[i];
                    prop_assert_eq!(sut.remove(k), model.remove(k));
                    prop_assert!(sut.get(k).is_none());
                    prop_assert_eq!(sut.bucket_count(), buckets_before, "remove must not resize");
                }
                OpI::Contains(s) => {
                    prop_assert_eq!(sut.contains(&s), model.contains_key(&s));
                }
                OpI::Clear => {
                    sut.clear();
                    model.clear();
                    prop_assert_eq!(sut.bucket_count(), buckets_before);
                    prop_assert_eq!(sut.allocated_chains(), 0);
                    for k in &pool {
                        prop_assert!(!sut.contains(k));
                    }
                }
                OpI::Snapshot => {
                    let s: Vec<(String, String)> = sut
                        .iter()
                        .map(|(k, v)| (k.to_owned(), v.clone()))
                        .collect();
                    let as_map: BTreeMap<_, _> = s.iter().cloned().collect();
                    prop_assert_eq!(as_map.len(), s.len(), "duplicate key in iteration");
                    let m: BTreeMap<_, _> = model.clone().into_iter().collect();
                    prop_assert_eq!(as_map, m);
                }
            }

            // Post-conditions after each op
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
            prop_assert_eq!(sut.len(), sut.counted_len());
            let n = sut.bucket_count();
            prop_assert!(n >= buckets_before);
            prop_assert_eq!(n % initial, 0);
            prop_assert!((n / initial).is_power_of_two());
        }

        // Every surviving key still resolves to its latest value.
        for (k, v) in &model {
            prop_assert_eq!(sut.get(k), Some(v));
        }
    }
}

// Property: with a single bucket and a huge load factor every key shares one
// chain, so lookups and removals exercise head, middle and tail splicing.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_single_chain((pool, ops) in arb_scenario()) {
        let config = TableConfig::new().with_initial_buckets(1).with_load_factor(1e9);
        let mut sut: BucketTable<String> = BucketTable::with_config(config).unwrap();
        let mut model: HashMap<String, String> = HashMap::new();

        for op in ops {
            match op {
                OpI::Set(i, v) => {
                    prop_assert_eq!(sut.set(pool[i].clone(), v.clone()), model.insert(pool[i].clone(), v));
                }
                OpI::Get(i) => prop_assert_eq!(sut.get(&pool[i]), model.get(&pool[i])),
                OpI::Remove(i) => prop_assert_eq!(sut.remove(&pool[i]), model.remove(&pool[i])),
                OpI::Contains(s) => prop_assert_eq!(sut.contains(&s), model.contains_key(&s)),
                OpI::Clear => {
                    sut.clear();
                    model.clear();
                }
                OpI::Snapshot => prop_assert_eq!(sut.iter().count(), model.len()),
            }
            prop_assert_eq!(sut.bucket_count(), 1);
            prop_assert_eq!(sut.len(), sut.counted_len());
            prop_assert_eq!(sut.len(), model.len());
        }
    }
}
