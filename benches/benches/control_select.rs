// Copyright 2026 the Sapwood Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::Cell;
use std::rc::Rc;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use sapwood_algebra::{KeySet, SelectionMode, SelectionValue};
use sapwood_control::SelectionControl;

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

fn bench_uncontrolled(c: &mut Criterion) {
    let mut group = c.benchmark_group("uncontrolled_multiple");
    for &n in &[1024usize, 4096] {
        let keys = gen_keys(n, 128, 0xBEEF_CA11_0000_0001);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("select_stream_n{}", n), |b| {
            b.iter_batched(
                || SelectionControl::<u32>::uncontrolled(SelectionMode::Multiple),
                |mut control| {
                    let mut committed = 0u32;
                    for &key in &keys {
                        if control.select(key).transitioned() {
                            committed += 1;
                        }
                    }
                    black_box(committed);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_disabled_checks(c: &mut Criterion) {
    let mut group = c.benchmark_group("disabled_checks");
    let n = 1024usize;
    let keys = gen_keys(n, 512, 0xBEEF_CA11_0000_0002);
    group.throughput(Throughput::Elements(n as u64));

    for &blocked in &[16usize, 256] {
        let disabled = KeySet::from_keys(gen_keys(blocked, 512, 0xBEEF_CA11_0000_0003));
        group.bench_function(format!("keyset_d{}", blocked), |b| {
            b.iter_batched(
                || {
                    SelectionControl::<u32, _>::uncontrolled(SelectionMode::Multiple)
                        .with_disabled(disabled.clone())
                },
                |mut control| {
                    let mut committed = 0u32;
                    for &key in &keys {
                        if control.select(key).transitioned() {
                            committed += 1;
                        }
                    }
                    black_box(committed);
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.bench_function("predicate", |b| {
        b.iter_batched(
            || {
                SelectionControl::<u32, _>::uncontrolled(SelectionMode::Multiple)
                    .with_disabled((|key: &u32| key % 7 == 0) as fn(&u32) -> bool)
            },
            |mut control| {
                let mut committed = 0u32;
                for &key in &keys {
                    if control.select(key).transitioned() {
                        committed += 1;
                    }
                }
                black_box(committed);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_controlled_requests(c: &mut Criterion) {
    let mut group = c.benchmark_group("controlled_requests");
    let n = 1024usize;
    let keys = gen_keys(n, 128, 0xBEEF_CA11_0000_0004);
    group.throughput(Throughput::Elements(n as u64));
    group.bench_function("request_stream", |b| {
        b.iter_batched(
            || {
                let requests = Rc::new(Cell::new(0u32));
                let sink = Rc::clone(&requests);
                let mirror = SelectionValue::Empty;
                let control = SelectionControl::<u32>::controlled(SelectionMode::Multiple, mirror)
                    .with_on_change(move |_| sink.set(sink.get() + 1));
                (control, requests)
            },
            |(mut control, requests)| {
                for &key in &keys {
                    control.select(key);
                }
                black_box(requests.get());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_uncontrolled,
    bench_disabled_checks,
    bench_controlled_requests,
);
criterion_main!(benches);
