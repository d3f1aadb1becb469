// Copyright 2026 the Sapwood Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use sapwood_algebra::{SelectionMode, SelectionValue, transition};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}

fn gen_keys(count: usize, universe: u64, seed: u64) -> Vec<u32> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| (rng.next_u64() % universe) as u32)
        .collect()
}

fn bench_single_fixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_fixed");
    for &n in &[1024usize, 4096] {
        let keys = gen_keys(n, 64, 0xD1CE_5EED_0000_0001);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("select_stream_n{}", n), |b| {
            b.iter_batched(
                || SelectionValue::<u32>::Empty,
                |mut value| {
                    for &key in &keys {
                        if let Some(next) = transition(SelectionMode::SingleFixed, &value, key) {
                            value = next;
                        }
                    }
                    black_box(value);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_single_collapsible(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_collapsible");
    for &n in &[1024usize, 4096] {
        // A small universe maximizes repeat hits, the collapse-heavy case.
        let keys = gen_keys(n, 8, 0xD1CE_5EED_0000_0002);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("select_stream_n{}", n), |b| {
            b.iter_batched(
                || SelectionValue::<u32>::Empty,
                |mut value| {
                    for &key in &keys {
                        if let Some(next) =
                            transition(SelectionMode::SingleCollapsible, &value, key)
                        {
                            value = next;
                        }
                    }
                    black_box(value);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_multiple(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiple");
    let n = 1024usize;
    group.throughput(Throughput::Elements(n as u64));
    // The universe bounds the working set, which each step copies.
    for &universe in &[16u64, 64, 256] {
        let keys = gen_keys(n, universe, 0xD1CE_5EED_0000_0003);
        group.bench_function(format!("toggle_stream_u{}", universe), |b| {
            b.iter_batched(
                || SelectionValue::<u32>::Empty,
                |mut value| {
                    for &key in &keys {
                        if let Some(next) = transition(SelectionMode::Multiple, &value, key) {
                            value = next;
                        }
                    }
                    black_box(value);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("range");
    for &n in &[1024usize, 4096] {
        let keys = gen_keys(n, 4096, 0xD1CE_5EED_0000_0004);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("pair_stream_n{}", n), |b| {
            b.iter_batched(
                || SelectionValue::<u32>::Empty,
                |mut value| {
                    for &key in &keys {
                        if let Some(next) = transition(SelectionMode::Range, &value, key) {
                            value = next;
                        }
                    }
                    black_box(value);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_single_fixed,
    bench_single_collapsible,
    bench_multiple,
    bench_range,
);
criterion_main!(benches);
