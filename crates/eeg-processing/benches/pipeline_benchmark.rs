//! Performance benchmarks for the EEG processing pipeline
//!
//! Compares the direct and FFT spectral backends and times a full pipeline
//! run on buffers of typical lengths.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use eeg_core::SampleBuffer;
use eeg_processing::{extract, Pipeline, SpectralAnalyzer, StftConfig, TransformKind};
use std::f64::consts::PI;

const RATE: f64 = 250.0;

fn mixture(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64 / RATE;
            (2.0 * PI * 10.0 * t).sin() + 0.4 * (2.0 * PI * 22.0 * t).sin() + 0.1
        })
        .collect()
}

/// Direct summation against the planned FFT
fn bench_spectral_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("spectral_backends");
    let samples = mixture(2500);

    for &window_size in &[128usize, 256, 512] {
        for transform in [TransformKind::Direct, TransformKind::Fft] {
            let analyzer = SpectralAnalyzer::new(StftConfig {
                window_size,
                overlap_fraction: 0.5,
                transform,
            });

            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", transform), window_size),
                &samples,
                |b, samples| {
                    b.iter(|| analyzer.analyze_samples(black_box(samples), black_box(RATE)));
                },
            );
        }
    }

    group.finish();
}

/// Feature extraction on growing buffers
fn bench_feature_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("feature_extraction");

    for &size in &[256usize, 2500, 10_000] {
        let samples = mixture(size);
        group.bench_with_input(BenchmarkId::new("extract", size), &samples, |b, samples| {
            b.iter(|| extract(black_box(samples), black_box(RATE)));
        });
    }

    group.finish();
}

/// Both branches end to end
fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    let pipeline = Pipeline::new("bench");

    for &seconds in &[2usize, 10, 30] {
        let buffer = SampleBuffer::new(mixture(seconds * RATE as usize), RATE)
            .expect("benchmark buffer");
        group.bench_with_input(
            BenchmarkId::new("process", format!("{}s", seconds)),
            &buffer,
            |b, buffer| {
                b.iter(|| pipeline.process(black_box(buffer)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_spectral_backends,
    bench_feature_extraction,
    bench_full_pipeline
);
criterion_main!(benches);
