//! Interfaces of the collaborators that feed and consume the pipeline

use crate::error::EegResult;
use crate::feature_vector::FeatureVector;
use crate::sample_buffer::SampleBuffer;
use serde::{Deserialize, Serialize};

/// Supplier of sample buffers (file loader, device, synthetic generator)
pub trait DataSource {
    /// Produce the next buffer covering `duration` seconds
    fn next_buffer(&mut self, duration: f64) -> EegResult<SampleBuffer>;

    /// Human-readable source description
    fn describe(&self) -> String;
}

/// Outcome reported by a classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: String,
    /// Confidence in `[0, 1]`
    pub confidence: f64,
    pub model_version: String,
}

/// Consumer of feature vectors
///
/// Implementations (a trained model, a heuristic mock) are chosen once by
/// the host and handed to the pipeline explicitly.
pub trait Classifier: Send + Sync {
    fn classify(&self, features: &FeatureVector) -> EegResult<Classification>;

    fn model_version(&self) -> &str;
}
