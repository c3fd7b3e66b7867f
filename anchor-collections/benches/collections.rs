//! Benchmarks for the chain, the heap and the two heapsorts.
//!
//! Run with: cargo bench
//!
//! The chain benches compare against `VecDeque`, the heap benches against
//! `BinaryHeap<Reverse<_>>`, and the sorts against `sort_unstable`.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use anchor_collections::{Chain, MinHeap, heapsort_aux, heapsort_in_place};
use criterion::{
    BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const QUEUE_OPS: usize = 10_000;
const TAIL_OPS: usize = 1_000;
const HEAP_OPS: usize = 10_000;
const SORT_LEN: usize = 10_000;

fn random_values(len: usize, seed: u64) -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random()).collect()
}

// ============================================================================
// Chain: front operations (O(1))
// ============================================================================

fn bench_chain_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_front");
    group.throughput(Throughput::Elements(QUEUE_OPS as u64 * 2));

    // Storage reaches full size on the first iteration and is reused after
    let mut chain: Chain<u64> = Chain::with_capacity(QUEUE_OPS);
    let mut deque: VecDeque<u64> = VecDeque::with_capacity(QUEUE_OPS);

    group.bench_function("chain", |b| {
        b.iter(|| {
            for i in 0..QUEUE_OPS as u64 {
                chain.append_left(i);
            }
            while let Some(v) = chain.pop_left() {
                black_box(v);
            }
        });
    });

    group.bench_function("vecdeque", |b| {
        b.iter(|| {
            for i in 0..QUEUE_OPS as u64 {
                deque.push_front(i);
            }
            while let Some(v) = deque.pop_front() {
                black_box(v);
            }
        });
    });

    group.finish();
}

// ============================================================================
// Chain: tail operations (walk to the end)
// ============================================================================

fn bench_chain_tail(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_tail");
    group.throughput(Throughput::Elements(TAIL_OPS as u64 * 2));

    let mut chain: Chain<u64> = Chain::with_capacity(TAIL_OPS);

    group.bench_function("append_then_pop", |b| {
        b.iter(|| {
            for i in 0..TAIL_OPS as u64 {
                chain.append(i);
            }
            while let Some(v) = chain.pop() {
                black_box(v);
            }
        });
    });

    group.finish();
}

fn bench_chain_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_lookup");

    let chain: Chain<u64> = (0..TAIL_OPS as u64).collect();
    let missing = TAIL_OPS as u64;

    group.bench_function("len", |b| b.iter(|| black_box(chain.len())));
    group.bench_function("get_middle", |b| {
        b.iter(|| black_box(chain.get(black_box(TAIL_OPS / 2))))
    });
    group.bench_function("find_missing", |b| {
        b.iter(|| black_box(chain.find(black_box(&missing))))
    });

    group.finish();
}

// ============================================================================
// Heap: add/poll
// ============================================================================

fn bench_heap(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap");
    group.throughput(Throughput::Elements(HEAP_OPS as u64 * 2));

    let values = random_values(HEAP_OPS, 0xBEEF);
    let mut heap: MinHeap<u64> = MinHeap::with_capacity(HEAP_OPS);
    let mut binary: BinaryHeap<Reverse<u64>> = BinaryHeap::with_capacity(HEAP_OPS);

    group.bench_function("min_heap", |b| {
        b.iter(|| {
            for &v in &values {
                heap.add(v);
            }
            while let Some(v) = heap.poll() {
                black_box(v);
            }
        });
    });

    group.bench_function("binary_heap", |b| {
        b.iter(|| {
            for &v in &values {
                binary.push(Reverse(v));
            }
            while let Some(v) = binary.pop() {
                black_box(v);
            }
        });
    });

    group.finish();
}

fn bench_heap_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap_build");
    group.throughput(Throughput::Elements(HEAP_OPS as u64));

    let values = random_values(HEAP_OPS, 0xF00D);

    group.bench_function("repeated_add", |b| {
        b.iter_batched(
            || values.clone(),
            |values| black_box(values.into_iter().collect::<MinHeap<u64>>()),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("heapify", |b| {
        b.iter_batched(
            || values.clone(),
            |values| black_box(MinHeap::heapify(values)),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ============================================================================
// Heapsort
// ============================================================================

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    group.throughput(Throughput::Elements(SORT_LEN as u64));

    let values = random_values(SORT_LEN, 0x5027);

    group.bench_function("heapsort_aux", |b| {
        b.iter_batched(
            || values.clone(),
            |values| black_box(heapsort_aux(values)),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("heapsort_in_place", |b| {
        b.iter_batched(
            || values.clone(),
            |mut values| {
                heapsort_in_place(&mut values);
                black_box(values)
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("sort_unstable", |b| {
        b.iter_batched(
            || values.clone(),
            |mut values| {
                values.sort_unstable();
                black_box(values)
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_chain_front,
    bench_chain_tail,
    bench_chain_lookup,
    bench_heap,
    bench_heap_build,
    bench_sort,
);

criterion_main!(benches);
