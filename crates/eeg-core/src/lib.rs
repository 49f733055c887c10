//! EEG-Core: Foundation types for biosignal processing
//!
//! Sample buffers, spectrograms, band powers and feature vectors shared by
//! the processing pipeline and its collaborators.

pub mod bands;
pub mod collaborators;
pub mod error;
pub mod feature_vector;
pub mod sample_buffer;
pub mod spectrogram;

pub use bands::{BandPowers, EegBand};
pub use collaborators::{Classification, Classifier, DataSource};
pub use error::{validate_sampling_rate, EegError, EegResult};
pub use feature_vector::{
    FeatureVector, FEATURE_VECTOR_LEN, FREQUENCY_ZONE, STATISTICAL_ZONE, WINDOWED_MEANS_ZONE,
};
pub use sample_buffer::{ChannelStats, SampleBuffer};
pub use spectrogram::Spectrogram;
