//! Signal conditioner: offset removal, smoothing and normalization in fixed order

use crate::filters::{CenteredMovingAverage, DcOffsetRemoval, PeakNormalizer};
use crate::processor::{timed, ProcessingMetrics, SignalProcessor};
use eeg_core::{EegResult, SampleBuffer};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Default lower passband edge in Hz
pub const DEFAULT_LOW_CUTOFF_HZ: f64 = 1.0;

/// Default upper passband edge in Hz
pub const DEFAULT_HIGH_CUTOFF_HZ: f64 = 50.0;

/// Conditioner configuration
///
/// The passband edges are recorded and validated but do not change the
/// smoothing window, which always follows the sampling rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConditionerConfig {
    pub low_cutoff_hz: f64,
    pub high_cutoff_hz: f64,
}

impl Default for ConditionerConfig {
    fn default() -> Self {
        Self {
            low_cutoff_hz: DEFAULT_LOW_CUTOFF_HZ,
            high_cutoff_hz: DEFAULT_HIGH_CUTOFF_HZ,
        }
    }
}

impl ConditionerConfig {
    /// Create configuration with explicit passband edges
    pub fn bandpass(low_cutoff_hz: f64, high_cutoff_hz: f64) -> Self {
        Self { low_cutoff_hz, high_cutoff_hz }
    }
}

/// Chain of conditioning stages applied to raw buffers
pub struct SignalConditioner {
    config: ConditionerConfig,
    stages: Vec<Box<dyn SignalProcessor>>,
}

impl SignalConditioner {
    /// Create conditioner with the standard stage order
    pub fn new(config: ConditionerConfig) -> Self {
        let stages: Vec<Box<dyn SignalProcessor>> = vec![
            Box::new(DcOffsetRemoval),
            Box::new(CenteredMovingAverage::rate_scaled()),
            Box::new(PeakNormalizer),
        ];

        SignalConditioner { config, stages }
    }

    pub fn config(&self) -> &ConditionerConfig {
        &self.config
    }

    /// Stage names in execution order
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Condition a buffer, returning a new buffer of the same length
    pub fn condition(&self, input: &SampleBuffer) -> EegResult<SampleBuffer> {
        let mut metrics = Vec::with_capacity(self.stages.len());
        self.condition_with_metrics(input, &mut metrics)
    }

    /// Condition a buffer, appending one timing record per stage
    pub fn condition_with_metrics(
        &self,
        input: &SampleBuffer,
        metrics: &mut Vec<ProcessingMetrics>,
    ) -> EegResult<SampleBuffer> {
        if !self.passband_is_ordered() {
            warn!(
                low_cutoff_hz = self.config.low_cutoff_hz,
                high_cutoff_hz = self.config.high_cutoff_hz,
                "passband edges are not ordered; smoothing is unaffected"
            );
        }

        let mut current = input.clone();
        for stage in &self.stages {
            current = timed(metrics, stage.name(), stage.processor_type(), || {
                stage.process(&current)
            })?;
        }

        debug!(
            samples = current.len(),
            sampling_rate = current.sampling_rate(),
            "buffer conditioned"
        );

        Ok(current)
    }

    fn passband_is_ordered(&self) -> bool {
        self.config.low_cutoff_hz < self.config.high_cutoff_hz
    }
}

impl Default for SignalConditioner {
    fn default() -> Self {
        Self::new(ConditionerConfig::default())
    }
}

impl SignalProcessor for SignalConditioner {
    fn process(&self, input: &SampleBuffer) -> EegResult<SampleBuffer> {
        self.condition(input)
    }

    fn name(&self) -> &str {
        "Signal Conditioner"
    }
}

/// Condition raw samples: DC-offset removal, smoothing, peak normalization
///
/// `low_cutoff_hz` and `high_cutoff_hz` are accepted for interface
/// compatibility and do not alter the result.
pub fn condition(
    samples: &[f64],
    sampling_rate: f64,
    low_cutoff_hz: f64,
    high_cutoff_hz: f64,
) -> EegResult<Vec<f64>> {
    let buffer = SampleBuffer::new(samples.to_vec(), sampling_rate)?;
    let conditioner = SignalConditioner::new(ConditionerConfig::bandpass(low_cutoff_hz, high_cutoff_hz));
    Ok(conditioner.condition(&buffer)?.into_samples())
}
