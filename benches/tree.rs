//! Performance benchmarks for the suffix tree engine
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sfxi::tree::SuffixTree;

/// Deterministic pseudo-random byte keys over a small alphabet.
fn sample_keys(count: usize, len: usize) -> Vec<Vec<u8>> {
    let mut state = 0x2545_f491_4f6c_dd1du64;
    (0..count)
        .map(|_| {
            (0..len)
                .map(|_| {
                    // xorshift* step
                    state ^= state >> 12;
                    state ^= state << 25;
                    state ^= state >> 27;
                    b'a' + (state.wrapping_mul(0x2545_f491_4f6c_dd1d) >> 60) as u8 % 8
                })
                .collect()
        })
        .collect()
}

fn build_tree(keys: &[Vec<u8>]) -> SuffixTree<u8, u32> {
    let mut tree = SuffixTree::new();
    for (idx, key) in keys.iter().enumerate() {
        tree.put(key.clone(), idx as u32).unwrap();
    }
    tree
}

fn bench_put(c: &mut Criterion) {
    let mut group = c.benchmark_group("put");

    for &count in &[10usize, 100, 500] {
        let keys = sample_keys(count, 64);
        group.bench_with_input(BenchmarkId::from_parameter(count), &keys, |b, keys| {
            b.iter(|| build_tree(black_box(keys)));
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let keys = sample_keys(200, 64);
    let tree = build_tree(&keys);

    let mut group = c.benchmark_group("search");

    group.bench_function("hit", |b| {
        let q = &keys[42][10..20];
        b.iter(|| black_box(&tree).search(black_box(q)));
    });

    group.bench_function("miss", |b| {
        let q = b"zzzzzzzz";
        b.iter(|| black_box(&tree).search(black_box(q)));
    });

    group.bench_function("capped", |b| {
        let q = &keys[42][10..14];
        b.iter(|| black_box(&tree).search_capped(black_box(q), 8));
    });

    group.finish();
}

fn bench_compute_count(c: &mut Criterion) {
    let keys = sample_keys(100, 64);

    c.bench_function("compute_count", |b| {
        b.iter_batched(
            || build_tree(&keys),
            |mut tree| black_box(tree.compute_count()),
            criterion::BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, bench_put, bench_search, bench_compute_count);
criterion_main!(benches);
