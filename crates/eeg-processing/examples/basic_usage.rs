//! Basic usage examples for the EEG processing crates
//!
//! Walks through conditioning, spectral analysis, band aggregation and
//! feature extraction on a synthetic two-rhythm signal.

use eeg_core::{Classification, Classifier, EegResult, FeatureVector, SampleBuffer};
use eeg_processing::{aggregate, analyze, condition, extract, Pipeline};
use std::f64::consts::PI;

/// Labels a vector by the sign of its mean, standing in for a trained model
struct MeanSignClassifier;

impl Classifier for MeanSignClassifier {
    fn classify(&self, features: &FeatureVector) -> EegResult<Classification> {
        let label = if features.statistical()[0] >= 0.0 { "raised" } else { "lowered" };
        Ok(Classification {
            label: label.to_string(),
            confidence: 0.5,
            model_version: self.model_version().to_string(),
        })
    }

    fn model_version(&self) -> &str {
        "mean-sign-0"
    }
}

fn main() -> EegResult<()> {
    println!("=== EEG processing basic usage ===\n");

    let rate = 250.0;
    let samples: Vec<f64> = (0..2500)
        .map(|i| {
            let t = i as f64 / rate;
            12.0 + 20.0 * (2.0 * PI * 10.0 * t).sin() + 8.0 * (2.0 * PI * 2.0 * t).sin()
        })
        .collect();

    // 1. Free functions, one stage at a time
    let conditioned = condition(&samples, rate, 1.0, 50.0)?;
    let peak = conditioned.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()));
    println!("1. Conditioned {} samples, peak |x| = {:.3}", conditioned.len(), peak);

    let spectrogram = analyze(&conditioned, rate, 256, 0.5)?;
    println!(
        "2. Spectrogram: {} bins x {} windows",
        spectrogram.frequency_bins(),
        spectrogram.time_bins()
    );

    let powers = aggregate(&spectrogram);
    for (band, power) in powers.iter() {
        println!("   {:<20} {:>8.3}", band.to_string(), power);
    }

    let features = extract(&samples, rate)?;
    println!("3. Feature vector of {} values, mean {:.3}", features.len(), features[0]);

    // 2. The same work through the pipeline, plus a classifier
    let pipeline = Pipeline::new("example");
    let buffer = SampleBuffer::with_channel(samples, rate, "O1")?;
    let output = pipeline.process(&buffer)?;
    let classification = pipeline.classify(&output, &MeanSignClassifier)?;

    println!(
        "4. Pipeline: dominant {} band, classified '{}' by {} in {} us",
        output.band_powers.dominant().name(),
        classification.label,
        classification.model_version,
        output.total_latency_us()
    );

    Ok(())
}
