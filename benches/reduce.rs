//! Reduction and table-generation benchmarks.
//!
//! Run with:
//! ```bash
//! cargo bench --bench reduce
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use truth_table::reduce::reduce;
use truth_table::registry::VariableRegistry;
use truth_table::substitute::tokenize;
use truth_table::table::generate;

/// `(T ^ F) v (T ^ F) v ...` with `n` groups.
fn wide_formula(n: usize) -> String {
    vec!["(T ^ F)"; n].join(" v ")
}

/// `~(~(...T...))` nested `n` times.
fn deep_formula(n: usize) -> String {
    format!("{}T{}", "~(".repeat(n), ")".repeat(n))
}

fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce");

    for n in [4, 16, 64, 256] {
        let tokens = tokenize(&wide_formula(n)).unwrap();
        group.throughput(Throughput::Elements(tokens.len() as u64));
        group.bench_with_input(BenchmarkId::new("wide", n), &tokens, |b, tokens| {
            b.iter(|| reduce(black_box(tokens)))
        });
    }

    for n in [4, 16, 60] {
        let tokens = tokenize(&deep_formula(n)).unwrap();
        group.throughput(Throughput::Elements(tokens.len() as u64));
        group.bench_with_input(BenchmarkId::new("deep", n), &tokens, |b, tokens| {
            b.iter(|| reduce(black_box(tokens)))
        });
    }

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let names = ["a", "b", "c", "e", "f", "g", "h", "j", "k", "l", "m", "n"];

    for n in [4, 8, 12] {
        let mut registry = VariableRegistry::new();
        registry.register(&names[..n]).unwrap();
        let formulas = ["(a ^ b) > ~c", "a = (b x c) v ~(a ^ c)"];

        group.throughput(Throughput::Elements(1 << n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &registry, |b, registry| {
            b.iter(|| generate(registry, black_box(&formulas)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reduce, bench_generate);
criterion_main!(benches);
