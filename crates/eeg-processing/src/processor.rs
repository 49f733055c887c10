//! Core signal processor trait and timing types

use eeg_core::{EegResult, SampleBuffer};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Core trait for buffer-to-buffer processing stages
///
/// Stages are pure: `process` borrows its input and returns a new buffer,
/// so one stage instance can be shared across threads.
pub trait SignalProcessor: Send + Sync {
    /// Process a buffer and return the processed result
    fn process(&self, input: &SampleBuffer) -> EegResult<SampleBuffer>;

    /// Get processor name/identifier
    fn name(&self) -> &str;

    /// Get processor type for pipeline organization
    fn processor_type(&self) -> ProcessorType {
        ProcessorType::Conditioning
    }
}

/// Types of processing stages for pipeline organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessorType {
    /// Offset removal, smoothing, normalization
    Conditioning,
    /// Short-time spectral analysis
    SpectralAnalysis,
    /// Reduction of a spectrogram to band powers
    BandAggregation,
    /// Feature vector construction
    FeatureExtraction,
}

/// Timing record for one executed stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingMetrics {
    /// Stage name
    pub stage: String,
    /// Stage type
    pub processor_type: ProcessorType,
    /// Actual processing time in microseconds
    pub processing_time_us: u64,
    /// Success/failure status
    pub success: bool,
    /// Error message if processing failed
    pub error_message: Option<String>,
}

impl ProcessingMetrics {
    /// Start timing a processing operation
    pub fn start_timing(stage: &str, processor_type: ProcessorType) -> ProcessingTimer {
        ProcessingTimer {
            start_time: Instant::now(),
            stage: stage.to_string(),
            processor_type,
        }
    }
}

/// Helper for timing processing operations
pub struct ProcessingTimer {
    start_time: Instant,
    stage: String,
    processor_type: ProcessorType,
}

impl ProcessingTimer {
    /// Finish timing and return metrics
    pub fn finish(self) -> ProcessingMetrics {
        ProcessingMetrics {
            processing_time_us: self.start_time.elapsed().as_micros() as u64,
            stage: self.stage,
            processor_type: self.processor_type,
            success: true,
            error_message: None,
        }
    }

    /// Finish with error
    pub fn finish_with_error(self, error: &str) -> ProcessingMetrics {
        let mut metrics = self.finish();
        metrics.success = false;
        metrics.error_message = Some(error.to_string());
        metrics
    }

    /// Finish according to a stage outcome
    pub fn finish_with<T>(self, outcome: &EegResult<T>) -> ProcessingMetrics {
        match outcome {
            Ok(_) => self.finish(),
            Err(e) => self.finish_with_error(&e.to_string()),
        }
    }
}

/// Run a closure as a timed stage, appending its metrics to `log`
pub fn timed<T>(
    log: &mut Vec<ProcessingMetrics>,
    stage: &str,
    processor_type: ProcessorType,
    run: impl FnOnce() -> EegResult<T>,
) -> EegResult<T> {
    let timer = ProcessingMetrics::start_timing(stage, processor_type);
    let outcome = run();
    log.push(timer.finish_with(&outcome));
    outcome
}
