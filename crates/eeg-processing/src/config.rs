//! Configuration management for the processing pipeline

use crate::conditioner::ConditionerConfig;
use crate::spectral::{StftConfig, TransformKind};
use eeg_core::{config_error, EegResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Processing profiles for different use cases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingProfile {
    /// 256-sample windows with half overlap
    Standard,
    /// Longer, denser windows for finer frequency resolution
    HighResolution,
    /// Hand-edited configuration
    Custom,
}

/// Complete pipeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Configuration name
    pub name: String,
    /// Profile the configuration was derived from
    pub profile: ProcessingProfile,
    /// Conditioner parameters
    #[serde(default)]
    pub conditioner: ConditionerConfig,
    /// Spectral analysis parameters
    #[serde(default)]
    pub stft: StftConfig,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Preset configurations for common scenarios
impl ProcessingConfig {
    /// Default analysis: 256-sample windows, 50% overlap, 1-50 Hz passband
    pub fn standard() -> Self {
        ProcessingConfig {
            name: "Standard EEG".to_string(),
            profile: ProcessingProfile::Standard,
            conditioner: ConditionerConfig::default(),
            stft: StftConfig::default(),
        }
    }

    /// 512-sample windows with 75% overlap
    pub fn high_resolution() -> Self {
        ProcessingConfig {
            name: "High-resolution EEG".to_string(),
            profile: ProcessingProfile::HighResolution,
            conditioner: ConditionerConfig::default(),
            stft: StftConfig {
                window_size: 512,
                overlap_fraction: 0.75,
                transform: TransformKind::Fft,
            },
        }
    }

    /// Create configuration suitable for given profile
    pub fn for_profile(profile: ProcessingProfile) -> Self {
        match profile {
            ProcessingProfile::Standard => Self::standard(),
            ProcessingProfile::HighResolution => Self::high_resolution(),
            ProcessingProfile::Custom => ProcessingConfig {
                name: "Custom EEG".to_string(),
                profile: ProcessingProfile::Custom,
                ..Self::standard()
            },
        }
    }

    /// Validate parameter ranges
    pub fn validate(&self) -> EegResult<()> {
        if self.name.is_empty() {
            return Err(config_error!("Configuration name cannot be empty"));
        }

        let ConditionerConfig { low_cutoff_hz, high_cutoff_hz } = self.conditioner;
        for (label, value) in [("low_cutoff_hz", low_cutoff_hz), ("high_cutoff_hz", high_cutoff_hz)] {
            if !value.is_finite() || value < 0.0 {
                return Err(config_error!("{} must be a finite non-negative frequency, got {}", label, value));
            }
        }

        self.stft.validate()
    }

    /// Export configuration to JSON
    pub fn to_json(&self) -> EegResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| config_error!("Failed to serialize configuration: {}", e))
    }

    /// Import and validate configuration from JSON
    pub fn from_json(json: &str) -> EegResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| config_error!("Failed to deserialize configuration: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Import and validate configuration from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> EegResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| config_error!("Failed to read {}: {}", path.display(), e))?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eeg_core::EegError;

    #[test]
    fn test_presets_validate() {
        for profile in [
            ProcessingProfile::Standard,
            ProcessingProfile::HighResolution,
            ProcessingProfile::Custom,
        ] {
            let config = ProcessingConfig::for_profile(profile);
            assert_eq!(config.profile, profile);
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_standard_defaults() {
        let config = ProcessingConfig::standard();
        assert_eq!(config.stft.window_size, 256);
        assert_eq!(config.stft.overlap_fraction, 0.5);
        assert_eq!(config.conditioner.low_cutoff_hz, 1.0);
        assert_eq!(config.conditioner.high_cutoff_hz, 50.0);
    }

    #[test]
    fn test_json_serialization() {
        let config = ProcessingConfig::high_resolution();

        let json = config.to_json().unwrap();
        assert!(json.contains("\"high_resolution\""));

        let deserialized = ProcessingConfig::from_json(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{
            "name": "short windows",
            "profile": "custom",
            "stft": { "window_size": 128 }
        }"#;

        let config = ProcessingConfig::from_json(json).unwrap();
        assert_eq!(config.stft.window_size, 128);
        assert_eq!(config.stft.overlap_fraction, 0.5);
        assert_eq!(config.stft.transform, TransformKind::Fft);
        assert_eq!(config.conditioner, ConditionerConfig::default());
    }

    #[test]
    fn test_invalid_configs_rejected() {
        let mut config = ProcessingConfig::standard();
        config.stft.overlap_fraction = 1.0;
        assert!(matches!(config.validate(), Err(EegError::InvalidWindow { .. })));

        let mut config = ProcessingConfig::standard();
        config.conditioner.high_cutoff_hz = f64::NAN;
        assert!(matches!(config.validate(), Err(EegError::ConfigurationError { .. })));

        let mut config = ProcessingConfig::standard();
        config.name.clear();
        assert!(config.validate().is_err());

        assert!(ProcessingConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn test_missing_file() {
        let result = ProcessingConfig::from_json_file("/nonexistent/eeg-config.json");
        assert!(matches!(result, Err(EegError::ConfigurationError { .. })));
    }
}
