use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use indexmap::IndexMap;
use map_pick::{assign_existing_entries, assign_existing_keys};
use std::collections::BTreeMap;
use std::time::Duration;

mod common;

use common::{key, lcg};

// Target and source overlap on half of the target's keys.
fn maps<T, S>(n: usize) -> (T, S)
where
    T: FromIterator<(String, u64)>,
    S: FromIterator<(String, u64)>,
{
    let target = lcg(1).take(n).map(|x| (key(x), 0)).collect();
    let source = lcg(1)
        .take(n)
        .step_by(2)
        .chain(lcg(42).take(n / 2))
        .map(|x| (key(x), x))
        .collect();
    (target, source)
}

fn bench_assign_indexmap(c: &mut Criterion) {
    c.bench_function("assign_existing_keys_indexmap_10k", |b| {
        let (target, source): (IndexMap<String, u64>, IndexMap<String, u64>) = maps(10_000);
        b.iter_batched(
            || target.clone(),
            |mut t| {
                assign_existing_keys(&mut t, &source);
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_assign_btree_from_hashbrown(c: &mut Criterion) {
    c.bench_function("assign_existing_keys_btree_from_hashbrown_10k", |b| {
        let (target, source): (BTreeMap<String, u64>, hashbrown::HashMap<String, u64>) =
            maps(10_000);
        b.iter_batched(
            || target.clone(),
            |mut t| {
                assign_existing_keys(&mut t, &source);
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_assign_entries(c: &mut Criterion) {
    c.bench_function("assign_existing_entries_indexmap_10k", |b| {
        let (target, source): (IndexMap<String, u64>, Vec<(String, u64)>) = maps(10_000);
        b.iter_batched(
            || (target.clone(), source.clone()),
            |(mut t, s)| {
                assign_existing_entries(&mut t, s);
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        // Every batch clones a 10k-entry target outside the timed region.
        .sample_size(30)
        .measurement_time(Duration::from_secs(6))
        .warm_up_time(Duration::from_secs(1))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_assign_indexmap, bench_assign_btree_from_hashbrown, bench_assign_entries
}
criterion_main!(benches);
