//! EEG-Processing: signal conditioning, spectral analysis and feature extraction
//!
//! A raw [`SampleBuffer`](eeg_core::SampleBuffer) feeds two independent
//! branches: conditioning followed by STFT and band aggregation for display,
//! and feature extraction on the unmodified samples for classification.

pub mod bands;
pub mod conditioner;
pub mod config;
pub mod features;
pub mod filters;
pub mod pipeline;
pub mod processor;
pub mod spectral;

pub use bands::{aggregate, band_average, BandAggregator};
pub use conditioner::{condition, ConditionerConfig, SignalConditioner};
pub use config::{ProcessingConfig, ProcessingProfile};
pub use features::{extract, FeatureExtractor, PROJECTION_REFERENCE_RATE_HZ};
pub use filters::{CenteredMovingAverage, DcOffsetRemoval, PeakNormalizer};
pub use pipeline::{Pipeline, PipelineBuilder, PipelineOutput, SpectralView};
pub use processor::{ProcessingMetrics, ProcessorType, SignalProcessor};
pub use spectral::{analyze, hann_window, SpectralAnalyzer, StftConfig, TransformKind};
