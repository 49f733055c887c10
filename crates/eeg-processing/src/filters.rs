//! Conditioning filters: DC-offset removal, centered smoothing, peak normalization

use crate::processor::SignalProcessor;
use eeg_core::{EegError, EegResult, SampleBuffer};

/// Subtract the arithmetic mean from every sample
pub fn remove_dc_offset(samples: &[f64]) -> EegResult<Vec<f64>> {
    if samples.is_empty() {
        return Err(EegError::EmptyInput {
            operation: "DC-offset removal",
        });
    }

    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    Ok(samples.iter().map(|x| x - mean).collect())
}

/// Smoothing window width for a sampling rate: `floor(rate / 10)` (about 100 ms)
pub fn smoothing_window(sampling_rate: f64) -> usize {
    (sampling_rate / 10.0).floor().max(0.0) as usize
}

/// Centered moving average
///
/// Output `i` averages the inputs with index in `[i - w/2, i + w/2)`, clamped
/// to the buffer, so the averaging span shrinks near both edges. A window
/// whose half-width is zero leaves the samples unchanged.
pub fn centered_moving_average(samples: &[f64], window: usize) -> Vec<f64> {
    let half = window / 2;
    if half == 0 {
        return samples.to_vec();
    }

    let n = samples.len();
    (0..n)
        .map(|i| {
            let start = i.saturating_sub(half);
            let end = (i + half).min(n);
            let span = &samples[start..end];
            span.iter().sum::<f64>() / span.len() as f64
        })
        .collect()
}

/// Divide every sample by the maximum absolute sample
pub fn normalize_peak(samples: &[f64]) -> EegResult<Vec<f64>> {
    if samples.is_empty() {
        return Err(EegError::EmptyInput {
            operation: "peak normalization",
        });
    }

    let peak = samples.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()));
    if peak == 0.0 {
        return Err(EegError::DegenerateSignal {
            reason: "maximum absolute amplitude is zero",
        });
    }

    Ok(samples.iter().map(|x| x / peak).collect())
}

/// DC-offset removal stage
#[derive(Debug, Clone, Copy, Default)]
pub struct DcOffsetRemoval;

impl SignalProcessor for DcOffsetRemoval {
    fn process(&self, input: &SampleBuffer) -> EegResult<SampleBuffer> {
        input.derive(remove_dc_offset(input.samples())?)
    }

    fn name(&self) -> &str {
        "DC Offset Removal"
    }
}

/// Centered moving-average smoothing stage
///
/// With no explicit window the width follows the input's sampling rate.
#[derive(Debug, Clone, Copy, Default)]
pub struct CenteredMovingAverage {
    window: Option<usize>,
}

impl CenteredMovingAverage {
    /// Window derived from each input's sampling rate
    pub fn rate_scaled() -> Self {
        CenteredMovingAverage { window: None }
    }

    /// Fixed window in samples
    pub fn with_window(window: usize) -> Self {
        CenteredMovingAverage { window: Some(window) }
    }

    /// Window applied to a buffer at the given rate
    pub fn window_for(&self, sampling_rate: f64) -> usize {
        self.window.unwrap_or_else(|| smoothing_window(sampling_rate))
    }
}

impl SignalProcessor for CenteredMovingAverage {
    fn process(&self, input: &SampleBuffer) -> EegResult<SampleBuffer> {
        let window = self.window_for(input.sampling_rate());
        input.derive(centered_moving_average(input.samples(), window))
    }

    fn name(&self) -> &str {
        "Centered Moving Average"
    }
}

/// Peak normalization stage
#[derive(Debug, Clone, Copy, Default)]
pub struct PeakNormalizer;

impl SignalProcessor for PeakNormalizer {
    fn process(&self, input: &SampleBuffer) -> EegResult<SampleBuffer> {
        input.derive(normalize_peak(input.samples())?)
    }

    fn name(&self) -> &str {
        "Peak Normalizer"
    }
}
