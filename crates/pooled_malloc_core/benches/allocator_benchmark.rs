//! # Allocator Benchmark
//!
//! Measures the three allocation paths:
//! 1. Bump allocation into a fresh arena
//! 2. First-fit reuse once the bump region is drained (worst case: last slot)
//! 3. Reallocation that moves and copies a block
//!
//! Every lookup scans the 1000-slot table, so cost tracks slot position,
//! not bytes in use.

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pooled_malloc_core::{PooledAllocator, BLOCK_COUNT};

/// Fill a fresh allocator through the bump path.
fn bench_bump(c: &mut Criterion) {
    let mut group = c.benchmark_group("bump_allocate");

    for count in [10usize, 100, BLOCK_COUNT] {
        group.bench_with_input(BenchmarkId::new("fill", count), &count, |b, &count| {
            b.iter(|| {
                let mut pool = PooledAllocator::new(count * 64);
                for _ in 0..count {
                    black_box(pool.allocate(black_box(64), 16).ok());
                }
            });
        });
    }

    group.finish();
}

/// Release and reclaim a block at a given table position with the bump region drained.
fn bench_reuse(c: &mut Criterion) {
    let mut group = c.benchmark_group("free_list_reuse");

    for position in [0usize, BLOCK_COUNT / 2, BLOCK_COUNT - 1] {
        let mut pool = PooledAllocator::new(BLOCK_COUNT * 64);
        let blocks: Vec<_> = (0..BLOCK_COUNT)
            .filter_map(|_| pool.allocate(64, 16).ok())
            .collect();
        let target = blocks[position];

        group.bench_with_input(BenchmarkId::new("slot", position), &target, |b, &target| {
            b.iter(|| {
                pool.release(Some(target));
                black_box(pool.allocate(black_box(32), 16).ok());
            });
        });
    }

    group.finish();
}

/// Grow a block, forcing a move and a copy.
fn bench_reallocate(c: &mut Criterion) {
    let mut group = c.benchmark_group("reallocate_grow");

    for size in [64usize, 4096, 64 * 1024] {
        group.throughput(criterion::Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("bytes", size), &size, |b, &size| {
            b.iter(|| {
                let mut pool = PooledAllocator::new(size * 4);
                let block = pool.allocate(size, 16).ok();
                black_box(pool.reallocate(block, size * 2, 16).ok());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_bump, bench_reuse, bench_reallocate);
criterion_main!(benches);
