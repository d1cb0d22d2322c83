//! Benchmarks for feature map circuit construction
//!
//! Run with: cargo bench -p qfm-encode

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qfm_encode::{Entanglement, FeatureMapBuilder, FirstOrderExpansion, SecondOrderExpansion};

fn data(num_qubits: u32) -> Vec<f64> {
    (0..num_qubits).map(|i| 0.1 * f64::from(i)).collect()
}

/// Benchmark first-order construction, forward and inverse
fn bench_first_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_order");

    for num_qubits in &[2u32, 8, 32, 128] {
        let map = FirstOrderExpansion::with_depth(*num_qubits, 2).unwrap();
        let x = data(*num_qubits);

        group.bench_with_input(BenchmarkId::new("forward", num_qubits), &x, |b, x| {
            b.iter(|| map.construct_circuit(black_box(x), None, false).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("inverse", num_qubits), &x, |b, x| {
            b.iter(|| map.construct_circuit(black_box(x), None, true).unwrap());
        });
    }

    group.finish();
}

/// Benchmark second-order construction for both built-in patterns
fn bench_second_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("second_order");

    for num_qubits in &[2u32, 8, 16] {
        let x = data(*num_qubits);
        for entanglement in [Entanglement::Linear, Entanglement::Full] {
            let map = SecondOrderExpansion::with_pattern(*num_qubits, 2, entanglement).unwrap();
            group.bench_with_input(
                BenchmarkId::new(entanglement.to_string(), num_qubits),
                &x,
                |b, x| {
                    b.iter(|| map.construct_circuit(black_box(x), None, false).unwrap());
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_first_order, bench_second_order);
criterion_main!(benches);
