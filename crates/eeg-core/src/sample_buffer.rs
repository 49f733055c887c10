//! SampleBuffer: Immutable container for a single-channel biosignal

use crate::error::{validate_sampling_rate, EegError, EegResult};
use serde::{Deserialize, Serialize};

/// Ordered amplitude samples recorded at a fixed sampling rate
///
/// A buffer is never empty and always carries a finite, positive sampling
/// rate. Processing steps never mutate a buffer; they build a new one with
/// [`SampleBuffer::derive`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleBuffer {
    samples: Vec<f64>,
    sampling_rate: f64,
    channel: Option<String>,
}

impl SampleBuffer {
    /// Create new buffer from samples and sampling rate
    pub fn new(samples: Vec<f64>, sampling_rate: f64) -> EegResult<Self> {
        validate_sampling_rate(sampling_rate)?;

        if samples.is_empty() {
            return Err(EegError::EmptyInput {
                operation: "sample buffer construction",
            });
        }

        Ok(SampleBuffer {
            samples,
            sampling_rate,
            channel: None,
        })
    }

    /// Create new buffer tagged with a channel label (e.g. "Fp1")
    pub fn with_channel(
        samples: Vec<f64>,
        sampling_rate: f64,
        channel: impl Into<String>,
    ) -> EegResult<Self> {
        let mut buffer = Self::new(samples, sampling_rate)?;
        buffer.channel = Some(channel.into());
        Ok(buffer)
    }

    /// Build a new buffer that shares this buffer's rate and channel label
    pub fn derive(&self, samples: Vec<f64>) -> EegResult<Self> {
        if samples.is_empty() {
            return Err(EegError::EmptyInput {
                operation: "derived sample buffer",
            });
        }

        Ok(SampleBuffer {
            samples,
            sampling_rate: self.sampling_rate,
            channel: self.channel.clone(),
        })
    }

    /// Get the samples
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Consume the buffer and return its samples
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    /// Get number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false; kept for parity with slice-like containers
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Get sampling rate in Hz
    pub fn sampling_rate(&self) -> f64 {
        self.sampling_rate
    }

    /// Get channel label, if any
    pub fn channel(&self) -> Option<&str> {
        self.channel.as_deref()
    }

    /// Get signal duration in seconds
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / self.sampling_rate
    }

    /// Get time vector for plotting
    pub fn time_vector(&self) -> Vec<f64> {
        let dt = 1.0 / self.sampling_rate;

        (0..self.samples.len())
            .map(|i| i as f64 * dt)
            .collect()
    }

    /// Calculate basic statistics over the buffer
    pub fn stats(&self) -> ChannelStats {
        // A buffer is never empty, so the summary always exists.
        ChannelStats::summarize(&self.samples)
    }

    /// Slice the buffer to a time range in seconds
    pub fn slice_time(&self, start_time: f64, end_time: f64) -> EegResult<SampleBuffer> {
        // Negated form so NaN bounds are rejected too
        if !(start_time >= 0.0 && end_time <= self.duration() && start_time < end_time) {
            return Err(EegError::InvalidSignalData {
                reason: format!(
                    "Invalid time range [{:.3}, {:.3}]s for signal duration {:.3}s",
                    start_time, end_time, self.duration()
                ),
            });
        }

        let start_sample = (start_time * self.sampling_rate) as usize;
        let end_sample = ((end_time * self.sampling_rate) as usize).min(self.samples.len());

        self.derive(self.samples[start_sample..end_sample].to_vec())
    }
}

/// Basic statistics for a sample sequence
///
/// Variance and standard deviation use the population divisor `N`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelStats {
    pub mean: f64,
    pub std_dev: f64,
    pub variance: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub rms: f64,
}

impl ChannelStats {
    /// Calculate statistics, failing on an empty sequence
    pub fn calculate(data: &[f64]) -> EegResult<Self> {
        if data.is_empty() {
            return Err(EegError::EmptyInput {
                operation: "channel statistics",
            });
        }

        Ok(Self::summarize(data))
    }

    fn summarize(data: &[f64]) -> Self {
        let n = data.len() as f64;

        let sum: f64 = data.iter().sum();
        let mean = sum / n;

        let sum_sq: f64 = data.iter().map(|x| x * x).sum();
        let rms = (sum_sq / n).sqrt();

        let variance: f64 = data.iter()
            .map(|x| (x - mean).powi(2))
            .sum::<f64>() / n;
        let std_dev = variance.sqrt();

        let min = data.iter().fold(f64::INFINITY, |a, &b| a.min(b));
        let max = data.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));

        Self {
            mean,
            std_dev,
            variance,
            min,
            max,
            range: max - min,
            rms,
        }
    }
}
