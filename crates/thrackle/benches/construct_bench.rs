//! Criterion benches for the constructor and the canonical-form engine.
//!
//! - construct: cycles C5/C7, paths P6, random trees on 7 vertices.
//! - canon: canonical certificate of C7 drawings, registry classification.
//!
//! Results live under `target/criterion`.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use thrackle::api::{
    canonical_certificate, collect_thrackles, count_thrackles, random_tree, special, Registry,
    ReplayToken, SearchCfg,
};

fn fast_cfg() -> SearchCfg {
    SearchCfg {
        limit: None,
        check_invariants: false,
    }
}

fn bench_construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct");
    for n in [5usize, 7] {
        let g = special::cycle(n);
        group.bench_function(BenchmarkId::new("cycle", n), |b| {
            b.iter(|| count_thrackles(black_box(&g)).unwrap())
        });
    }
    let p6 = special::path(6);
    group.bench_function(BenchmarkId::new("path", 6), |b| {
        b.iter(|| count_thrackles(black_box(&p6)).unwrap())
    });
    group.bench_function(BenchmarkId::new("random_tree", 7), |b| {
        b.iter_batched(
            || ReplayToken { seed: 42, index: 0 },
            |mut tok| {
                tok.index = tok.index.wrapping_add(1);
                let _ = count_thrackles(&random_tree(7, tok));
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_canon(c: &mut Criterion) {
    let mut group = c.benchmark_group("canon");
    let drawings = collect_thrackles(&special::cycle(7), fast_cfg()).unwrap();
    group.bench_function(BenchmarkId::new("canonical_certificate", "C7"), |b| {
        b.iter(|| canonical_certificate(black_box(&drawings[0])).unwrap())
    });
    group.bench_function(BenchmarkId::new("registry", "C7"), |b| {
        b.iter(|| {
            let mut registry = Registry::new();
            for rs in &drawings {
                registry.classify(rs).unwrap();
            }
            registry.unique()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_construct, bench_canon);
criterion_main!(benches);
