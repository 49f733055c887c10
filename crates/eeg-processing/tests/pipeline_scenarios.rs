//! End-to-end scenarios over the public processing API

use approx::{assert_abs_diff_eq, assert_relative_eq};
use eeg_core::{EegBand, EegError, SampleBuffer, FEATURE_VECTOR_LEN};
use eeg_processing::filters::remove_dc_offset;
use eeg_processing::{aggregate, analyze, condition, extract, Pipeline};
use std::f64::consts::PI;

const RATE: f64 = 250.0;

fn sine(frequency: f64, n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| (2.0 * PI * frequency * i as f64 / RATE).sin())
        .collect()
}

fn offset_mixture(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64 / RATE;
            3.5 + 40.0 * (2.0 * PI * 10.0 * t).sin() + 12.0 * (2.0 * PI * 3.0 * t).cos()
        })
        .collect()
}

#[test]
fn test_silent_input_is_degenerate() {
    let result = condition(&vec![0.0; 2500], RATE, 1.0, 50.0);
    assert!(matches!(result, Err(EegError::DegenerateSignal { .. })));
}

#[test]
fn test_dc_removal_centers_signal() {
    let centered = remove_dc_offset(&offset_mixture(2500)).unwrap();
    let mean = centered.iter().sum::<f64>() / centered.len() as f64;
    assert_abs_diff_eq!(mean, 0.0, epsilon = 1e-9);
}

#[test]
fn test_conditioned_output_is_unit_peak() {
    let conditioned = condition(&offset_mixture(2500), RATE, 1.0, 50.0).unwrap();

    assert_eq!(conditioned.len(), 2500);
    let peak = conditioned.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()));
    assert_relative_eq!(peak, 1.0);
    assert!(conditioned.iter().all(|x| x.abs() <= 1.0));
}

#[test]
fn test_spectrogram_shape_for_ten_seconds() {
    let spec = analyze(&sine(10.0, 2500), RATE, 256, 0.5).unwrap();

    assert_eq!(spec.frequency_bins(), 129);
    assert_eq!(spec.time_bins(), 18);
    assert_eq!(spec.power().len(), 129);
    assert!(spec.power().iter().all(|row| row.len() == 18));
    let top = spec.max_frequency().unwrap();
    assert_relative_eq!(top, 125.0);
    assert!(top <= RATE / 2.0);
    assert!(spec.times().windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_single_window_when_lengths_match() {
    let spec = analyze(&sine(10.0, 256), RATE, 256, 0.5).unwrap();
    assert_eq!(spec.time_bins(), 1);
    assert_eq!(spec.times(), &[0.0]);
}

#[test]
fn test_short_buffer_rejected() {
    let result = analyze(&sine(10.0, 255), RATE, 256, 0.5);
    assert_eq!(
        result.unwrap_err(),
        EegError::InsufficientSamples { required: 256, available: 255 }
    );
}

#[test]
fn test_alpha_dominates_ten_hertz() {
    let spec = analyze(&sine(10.0, 2500), RATE, 256, 0.5).unwrap();
    let powers = aggregate(&spec);

    assert!(powers.alpha > powers.delta);
    assert_eq!(powers.dominant(), EegBand::Alpha);
}

#[test]
fn test_extract_is_fixed_length_and_deterministic() {
    for n in [64, 65, 500, 2500] {
        let samples = offset_mixture(n);
        let first = extract(&samples, RATE).unwrap();
        let second = extract(&samples, RATE).unwrap();

        assert_eq!(first.len(), FEATURE_VECTOR_LEN);
        assert!(first
            .as_slice()
            .iter()
            .zip(second.as_slice())
            .all(|(a, b)| a.to_bits() == b.to_bits()));
    }
}

#[test]
fn test_pipeline_branches_are_independent() {
    let raw = SampleBuffer::with_channel(offset_mixture(2500), RATE, "Pz").unwrap();
    let pipeline = Pipeline::new("scenario");

    let output = pipeline.process(&raw).unwrap();

    // Raw offset survives in the features, not in the conditioned branch
    assert_relative_eq!(output.features.statistical()[0], raw.stats().mean, epsilon = 1e-12);
    assert!(output.conditioned.stats().mean.abs() < 0.05);
    assert_eq!(output.features, extract(raw.samples(), RATE).unwrap());
}

#[test]
fn test_branches_run_on_separate_threads() {
    let raw = SampleBuffer::new(offset_mixture(2500), RATE).unwrap();
    let pipeline = Pipeline::new("threaded");

    let (view, features) = std::thread::scope(|scope| {
        let spectral = scope.spawn(|| pipeline.spectral_view(&raw));
        let features = scope.spawn(|| pipeline.features(&raw));
        (spectral.join(), features.join())
    });

    let view = view.unwrap().unwrap();
    let features = features.unwrap().unwrap();
    let sequential = pipeline.process(&raw).unwrap();

    assert_eq!(view.spectrogram, sequential.spectrogram);
    assert_eq!(features, sequential.features);
}
