//! ΔE2000 Benchmarks
//!
//! Single-call latency in both precisions and throughput over a fixed batch.

use ciede2000_core::{Ciede2000, HueMeanConvention, Lab, delta_e_2000, delta_e_2000_f32};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

/// Deterministic spread of pairs over the usual L*a*b* ranges
fn generate_pairs(count: usize) -> Vec<[f64; 6]> {
    (0..count)
        .map(|i| {
            let t = i as f64 / count as f64;
            [
                100.0 * t,
                255.0 * ((t * 3.0) % 1.0) - 128.0,
                255.0 * ((t * 5.0) % 1.0) - 128.0,
                100.0 * ((t * 7.0) % 1.0),
                255.0 * ((t * 11.0) % 1.0) - 128.0,
                255.0 * ((t * 13.0) % 1.0) - 128.0,
            ]
        })
        .collect()
}

fn bench_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("delta_e_single");

    group.bench_function("f64", |b| {
        b.iter(|| {
            delta_e_2000(
                black_box(19.9),
                black_box(115.3644),
                black_box(13.3),
                black_box(68.258),
                black_box(-120.0),
                black_box(49.8956),
            )
        })
    });

    group.bench_function("f32", |b| {
        b.iter(|| {
            delta_e_2000_f32(
                black_box(19.9),
                black_box(115.3644),
                black_box(13.3),
                black_box(68.258),
                black_box(-120.0),
                black_box(49.8956),
            )
        })
    });

    let sharma = Ciede2000::new().with_convention(HueMeanConvention::Sharma);
    group.bench_function("f64_sharma", |b| {
        b.iter(|| {
            sharma.difference(
                black_box(Lab::new(19.9, 115.3644, 13.3)),
                black_box(Lab::new(68.258, -120.0, 49.8956)),
            )
        })
    });

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("delta_e_batch");

    for size in [100, 1000, 10000].iter() {
        let pairs = generate_pairs(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("f64", size), &pairs, |b, pairs| {
            b.iter(|| {
                pairs
                    .iter()
                    .map(|p| delta_e_2000(p[0], p[1], p[2], p[3], p[4], p[5]))
                    .sum::<f64>()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single, bench_batch);
criterion_main!(benches);
