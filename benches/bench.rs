use std::cmp::Ordering;
use std::mem;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use rand::prelude::*;

const WIDTH_I32: usize = mem::size_of::<i32>();

fn pin_thread_to_core() {
    use std::cell::Cell;
    let pin_core_id: usize = 2;

    thread_local! {static AFFINITY_ALREADY_SET: Cell<bool> = Cell::new(false); }

    // Set affinity only once per thread.
    AFFINITY_ALREADY_SET.with(|affinity_already_set| {
        if !affinity_already_set.get() {
            if let Some(core_id) = core_affinity::get_core_ids()
                .as_ref()
                .and_then(|ids| ids.get(pin_core_id))
            {
                core_affinity::set_for_current(*core_id);
            }

            affinity_already_set.set(true);
        }
    });
}

fn random(len: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(714856756);

    (0..len).map(|_| rng.gen::<i32>()).collect()
}

fn random_low_cardinality(len: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(714856756);
    let dist = rand::distributions::Uniform::from(0..=16);

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

fn to_record_bytes(vals: &[i32]) -> Vec<u8> {
    vals.iter().flat_map(|val| val.to_ne_bytes()).collect()
}

fn cmp_i32(a: &[u8], b: &[u8]) -> Ordering {
    let a = i32::from_ne_bytes(a.try_into().unwrap());
    let b = i32::from_ne_bytes(b.try_into().unwrap());
    a.cmp(&b)
}

fn bench_patterns(c: &mut Criterion) {
    let pattern_providers: [(&str, fn(usize) -> Vec<i32>); 5] = [
        ("random", random),
        ("random_d16", random_low_cardinality),
        ("ascending", ascending),
        ("descending", descending),
        ("all_equal", all_equal),
    ];

    for test_size in [20, 1_000, 100_000] {
        let batch_size = if test_size > 30 {
            BatchSize::LargeInput
        } else {
            BatchSize::SmallInput
        };

        for (pattern_name, pattern_provider) in pattern_providers {
            // Pin the benchmark to the same core to improve repeatability.
            pin_thread_to_core();

            c.bench_function(&format!("rawsort-i32-{pattern_name}-{test_size}"), |b| {
                b.iter_batched(
                    || to_record_bytes(&pattern_provider(test_size)),
                    |mut test_data| {
                        rawsort::sort_by(black_box(test_data.as_mut_slice()), WIDTH_I32, cmp_i32)
                    },
                    batch_size,
                )
            });

            // The typed stdlib sort as a reference point for the cost of
            // width-generic record handling.
            c.bench_function(&format!("std_unstable-i32-{pattern_name}-{test_size}"), |b| {
                b.iter_batched(
                    || pattern_provider(test_size),
                    |mut test_data| black_box(test_data.as_mut_slice()).sort_unstable(),
                    batch_size,
                )
            });
        }
    }
}

criterion_group!(benches, bench_patterns);
criterion_main!(benches);
