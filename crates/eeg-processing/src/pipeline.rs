//! Processing pipeline: conditioning, spectral analysis and feature extraction

use crate::bands::BandAggregator;
use crate::conditioner::{ConditionerConfig, SignalConditioner};
use crate::config::ProcessingConfig;
use crate::features::FeatureExtractor;
use crate::processor::{timed, ProcessingMetrics, ProcessorType};
use crate::spectral::{SpectralAnalyzer, StftConfig};
use eeg_core::{
    BandPowers, Classification, Classifier, EegError, EegResult, FeatureVector, SampleBuffer,
    Spectrogram,
};
use serde::Serialize;
use tracing::{info, info_span};

/// Fixed composition of the processing components
///
/// The spectral branch sees the conditioned buffer; the feature branch sees
/// the raw buffer. Neither branch feeds the other.
pub struct Pipeline {
    name: String,
    conditioner: SignalConditioner,
    analyzer: SpectralAnalyzer,
    aggregator: BandAggregator,
    extractor: FeatureExtractor,
}

/// Pipeline builder
pub struct PipelineBuilder {
    name: String,
    conditioner: ConditionerConfig,
    stft: StftConfig,
}

/// Everything derived from one raw buffer
#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutput {
    /// Conditioned buffer (visual branch)
    pub conditioned: SampleBuffer,
    /// Spectrogram of the conditioned buffer
    pub spectrogram: Spectrogram,
    /// Band powers of the spectrogram
    pub band_powers: BandPowers,
    /// Feature vector of the raw buffer
    pub features: FeatureVector,
    /// One record per executed stage
    pub metrics: Vec<ProcessingMetrics>,
}

impl PipelineOutput {
    /// Sum of stage processing times
    pub fn total_latency_us(&self) -> u64 {
        self.metrics.iter().map(|m| m.processing_time_us).sum()
    }
}

/// Conditioned buffer and its spectrogram
#[derive(Debug, Clone)]
pub struct SpectralView {
    pub conditioned: SampleBuffer,
    pub spectrogram: Spectrogram,
    pub band_powers: BandPowers,
}

impl Pipeline {
    /// Create pipeline with default components
    pub fn new(name: &str) -> Self {
        PipelineBuilder::new(name).build()
    }

    /// Create pipeline from a validated configuration
    pub fn from_config(config: &ProcessingConfig) -> EegResult<Self> {
        config.validate()?;

        Ok(PipelineBuilder::new(&config.name)
            .conditioner(config.conditioner)
            .stft(config.stft)
            .build())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stft_config(&self) -> &StftConfig {
        self.analyzer.config()
    }

    pub fn conditioner_config(&self) -> &ConditionerConfig {
        self.conditioner.config()
    }

    /// Run both branches on a raw buffer
    pub fn process(&self, raw: &SampleBuffer) -> EegResult<PipelineOutput> {
        let span = info_span!("pipeline", name = %self.name, channel = raw.channel().unwrap_or("-"));
        let _guard = span.enter();

        let mut metrics = Vec::new();
        let view = self.spectral_branch(raw, &mut metrics)?;
        let features = self.feature_branch(raw, &mut metrics)?;

        let output = PipelineOutput {
            conditioned: view.conditioned,
            spectrogram: view.spectrogram,
            band_powers: view.band_powers,
            features,
            metrics,
        };

        info!(
            samples = raw.len(),
            sampling_rate = raw.sampling_rate(),
            time_bins = output.spectrogram.time_bins(),
            dominant_band = output.band_powers.dominant().name(),
            latency_us = output.total_latency_us(),
            "pipeline run complete"
        );

        Ok(output)
    }

    /// Conditioning, spectral analysis and band aggregation only
    pub fn spectral_view(&self, raw: &SampleBuffer) -> EegResult<SpectralView> {
        let mut metrics = Vec::new();
        self.spectral_branch(raw, &mut metrics)
    }

    /// Feature extraction only (raw buffer, no conditioning)
    pub fn features(&self, raw: &SampleBuffer) -> EegResult<FeatureVector> {
        self.extractor.extract(raw)
    }

    /// Hand the feature vector of a run to an external classifier
    pub fn classify(
        &self,
        output: &PipelineOutput,
        classifier: &dyn Classifier,
    ) -> EegResult<Classification> {
        let classification = classifier.classify(&output.features)?;

        if !(0.0..=1.0).contains(&classification.confidence) {
            return Err(EegError::ClassifierError {
                message: format!(
                    "model {} reported confidence {} outside [0, 1]",
                    classifier.model_version(),
                    classification.confidence
                ),
            });
        }

        info!(
            label = %classification.label,
            confidence = classification.confidence,
            model_version = %classification.model_version,
            "feature vector classified"
        );

        Ok(classification)
    }

    fn spectral_branch(
        &self,
        raw: &SampleBuffer,
        metrics: &mut Vec<ProcessingMetrics>,
    ) -> EegResult<SpectralView> {
        let conditioned = self.conditioner.condition_with_metrics(raw, metrics)?;

        let spectrogram = timed(metrics, "STFT", ProcessorType::SpectralAnalysis, || {
            self.analyzer.analyze(&conditioned)
        })?;

        let band_powers = timed(metrics, "Band Aggregation", ProcessorType::BandAggregation, || {
            Ok(self.aggregator.aggregate(&spectrogram))
        })?;

        Ok(SpectralView {
            conditioned,
            spectrogram,
            band_powers,
        })
    }

    fn feature_branch(
        &self,
        raw: &SampleBuffer,
        metrics: &mut Vec<ProcessingMetrics>,
    ) -> EegResult<FeatureVector> {
        timed(metrics, "Feature Extraction", ProcessorType::FeatureExtraction, || {
            self.extractor.extract(raw)
        })
    }
}

impl PipelineBuilder {
    /// Create new pipeline builder
    pub fn new(name: &str) -> Self {
        PipelineBuilder {
            name: name.to_string(),
            conditioner: ConditionerConfig::default(),
            stft: StftConfig::default(),
        }
    }

    /// Set conditioner parameters
    pub fn conditioner(mut self, config: ConditionerConfig) -> Self {
        self.conditioner = config;
        self
    }

    /// Set spectral analysis parameters
    pub fn stft(mut self, config: StftConfig) -> Self {
        self.stft = config;
        self
    }

    /// Build the pipeline
    pub fn build(self) -> Pipeline {
        Pipeline {
            name: self.name,
            conditioner: SignalConditioner::new(self.conditioner),
            analyzer: SpectralAnalyzer::new(self.stft),
            aggregator: BandAggregator,
            extractor: FeatureExtractor,
        }
    }
}
