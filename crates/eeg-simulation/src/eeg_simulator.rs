//! EEG signal simulator producing seeded single-channel recordings

use crate::rhythm_patterns::RhythmPattern;
use eeg_core::{validate_sampling_rate, DataSource, EegError, EegResult, SampleBuffer};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::debug;

/// Largest magnitude an amplifier channel reports, in microvolts
pub const AMPLIFIER_RANGE_UV: f64 = 500.0;

/// Largest buffer a single call generates (about 3 days at 250 Hz)
pub const MAX_BUFFER_SAMPLES: usize = 1 << 26;

/// Configuration for EEG simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Sampling rate in Hz
    pub sampling_rate: f64,
    /// Electrode label attached to generated buffers
    pub channel: String,
    /// Rhythm to generate
    pub pattern: RhythmPattern,
    /// Noise configuration
    pub noise: NoiseConfig,
    /// Power line interference (50/60Hz)
    pub powerline_freq: Option<f64>,
    /// Electrode offset added to every sample, in microvolts
    pub dc_offset_uv: f64,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

/// Noise configuration for realistic EEG simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseConfig {
    /// Gaussian noise standard deviation in microvolts (0.0 = no noise)
    pub gaussian_std: f64,
    /// Baseline wander amplitude
    pub baseline_wander: f64,
    /// Per-sample probability of an electrode pop
    pub artifact_prob: f64,
    /// Electrode pop amplitude
    pub artifact_amp: f64,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            gaussian_std: 2.0,
            baseline_wander: 3.0,
            artifact_prob: 0.0005,
            artifact_amp: 40.0,
        }
    }
}

impl NoiseConfig {
    /// Noise-free configuration
    pub fn silent() -> Self {
        Self {
            gaussian_std: 0.0,
            baseline_wander: 0.0,
            artifact_prob: 0.0,
            artifact_amp: 0.0,
        }
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            sampling_rate: 250.0,
            channel: "Oz".to_string(),
            pattern: RhythmPattern::Rest,
            noise: NoiseConfig::default(),
            powerline_freq: Some(50.0),
            dc_offset_uv: 15.0,
            seed: None,
        }
    }
}

impl SimulatorConfig {
    /// Validate parameter ranges
    pub fn validate(&self) -> EegResult<()> {
        validate_sampling_rate(self.sampling_rate)?;

        if !(0.0..=1.0).contains(&self.noise.artifact_prob) {
            return Err(EegError::ConfigurationError {
                message: format!(
                    "artifact probability must lie in [0, 1], got {}",
                    self.noise.artifact_prob
                ),
            });
        }

        if !self.dc_offset_uv.is_finite() {
            return Err(EegError::ConfigurationError {
                message: format!("DC offset must be finite, got {}", self.dc_offset_uv),
            });
        }

        Ok(())
    }
}

/// EEG signal simulator
pub struct EegSimulator {
    config: SimulatorConfig,
    rng: StdRng,
    normal_dist: Normal<f64>,
    time_offset: f64,
}

impl EegSimulator {
    /// Create new EEG simulator with configuration
    pub fn new(config: SimulatorConfig) -> EegResult<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let normal_dist = Normal::new(0.0, config.noise.gaussian_std).map_err(|e| {
            EegError::ConfigurationError {
                message: format!("Failed to create normal distribution: {}", e),
            }
        })?;

        Ok(EegSimulator {
            config,
            rng,
            normal_dist,
            time_offset: 0.0,
        })
    }

    /// Generate EEG signal for specified duration in seconds
    pub fn generate(&mut self, duration: f64) -> EegResult<SampleBuffer> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(EegError::InvalidSignalData {
                reason: format!("duration must be a positive number of seconds, got {}", duration),
            });
        }

        let rate = self.config.sampling_rate;
        let requested = (duration * rate).round();
        if requested > MAX_BUFFER_SAMPLES as f64 {
            return Err(EegError::InvalidSignalData {
                reason: format!(
                    "{} s at {} Hz needs {} samples, limit is {}",
                    duration, rate, requested, MAX_BUFFER_SAMPLES
                ),
            });
        }
        let sample_count = requested as usize;
        let dt = 1.0 / rate;

        let mut samples = Vec::with_capacity(sample_count);
        for sample_idx in 0..sample_count {
            let time = self.time_offset + sample_idx as f64 * dt;

            let mut value = self.config.pattern.value_at(time) + self.config.dc_offset_uv;
            value += self.add_noise(time);
            if let Some(powerline_freq) = self.config.powerline_freq {
                value += Self::powerline_interference(time, powerline_freq);
            }

            samples.push(value.clamp(-AMPLIFIER_RANGE_UV, AMPLIFIER_RANGE_UV));
        }

        // Continue where this buffer ends on the next call
        self.time_offset += sample_count as f64 * dt;

        debug!(
            pattern = self.config.pattern.description(),
            samples = sample_count,
            sampling_rate = rate,
            "simulated EEG buffer"
        );

        SampleBuffer::with_channel(samples, rate, &self.config.channel)
    }

    fn add_noise(&mut self, time: f64) -> f64 {
        let noise = &self.config.noise;
        let mut value = self.normal_dist.sample(&mut self.rng);

        // Slow drift from electrode impedance changes
        value += noise.baseline_wander * (2.0 * PI * 0.05 * time).sin();

        if noise.artifact_prob > 0.0 && self.rng.gen::<f64>() < noise.artifact_prob {
            value += noise.artifact_amp * self.rng.gen_range(-1.0..1.0);
        }

        value
    }

    fn powerline_interference(time: f64, frequency: f64) -> f64 {
        let amplitude = 1.5;
        amplitude * (2.0 * PI * frequency * time).sin()
    }

    /// Elapsed simulated time in seconds
    pub fn elapsed(&self) -> f64 {
        self.time_offset
    }

    /// Reset time offset (useful for restarting simulation)
    pub fn reset_time(&mut self) {
        self.time_offset = 0.0;
    }

    /// Get current configuration
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }
}

impl DataSource for EegSimulator {
    fn next_buffer(&mut self, duration: f64) -> EegResult<SampleBuffer> {
        self.generate(duration)
    }

    fn describe(&self) -> String {
        format!(
            "simulated {} on {} at {} Hz",
            self.config.pattern.description().to_lowercase(),
            self.config.channel,
            self.config.sampling_rate
        )
    }
}
