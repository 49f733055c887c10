//! Pre-defined EEG rhythm patterns for synthetic recordings

use eeg_core::EegBand;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// One sinusoidal component of a rhythm, amplitude in microvolts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RhythmComponent {
    pub frequency_hz: f64,
    pub amplitude_uv: f64,
    pub phase: f64,
}

impl RhythmComponent {
    pub const fn new(frequency_hz: f64, amplitude_uv: f64, phase: f64) -> Self {
        Self {
            frequency_hz,
            amplitude_uv,
            phase,
        }
    }

    pub fn value_at(&self, time: f64) -> f64 {
        self.amplitude_uv * (2.0 * PI * self.frequency_hz * time + self.phase).sin()
    }
}

/// Predefined EEG rhythm patterns
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum RhythmPattern {
    /// Eyes closed, relaxed: posterior alpha with slow waxing and waning
    Rest,
    /// Drowsiness: theta takes over from a weakened alpha
    Drowsy,
    /// Active concentration: low-voltage beta
    Focused,
    /// Slow-wave sleep: large delta waves
    DeepSleep,
    /// Single sinusoid, useful for calibration
    PureTone { frequency_hz: f64, amplitude_uv: f64 },
}

impl RhythmPattern {
    /// Sinusoidal components of the pattern
    pub fn components(&self) -> Vec<RhythmComponent> {
        match self {
            RhythmPattern::Rest => vec![
                RhythmComponent::new(10.0, 20.0, 0.0),
                RhythmComponent::new(20.0, 4.0, 0.7),
            ],
            RhythmPattern::Drowsy => vec![
                RhythmComponent::new(6.0, 25.0, 0.0),
                RhythmComponent::new(9.0, 6.0, 1.1),
            ],
            RhythmPattern::Focused => vec![
                RhythmComponent::new(18.0, 10.0, 0.0),
                RhythmComponent::new(24.0, 7.0, 0.4),
                RhythmComponent::new(10.0, 4.0, 2.0),
            ],
            RhythmPattern::DeepSleep => vec![
                RhythmComponent::new(1.5, 60.0, 0.0),
                RhythmComponent::new(3.0, 20.0, 0.9),
            ],
            RhythmPattern::PureTone {
                frequency_hz,
                amplitude_uv,
            } => vec![RhythmComponent::new(*frequency_hz, *amplitude_uv, 0.0)],
        }
    }

    /// Slow amplitude envelope applied to all components
    pub fn envelope_at(&self, time: f64) -> f64 {
        match self {
            // Alpha spindles wax and wane every few seconds
            RhythmPattern::Rest => 1.0 + 0.3 * (2.0 * PI * 0.2 * time).sin(),
            RhythmPattern::Drowsy => 1.0 + 0.2 * (2.0 * PI * 0.1 * time).sin(),
            _ => 1.0,
        }
    }

    /// Noise-free signal value at given time
    pub fn value_at(&self, time: f64) -> f64 {
        let envelope = self.envelope_at(time);
        self.components()
            .iter()
            .map(|c| envelope * c.value_at(time))
            .sum()
    }

    /// Band the pattern is built around
    pub fn dominant_band(&self) -> Option<EegBand> {
        match self {
            RhythmPattern::Rest => Some(EegBand::Alpha),
            RhythmPattern::Drowsy => Some(EegBand::Theta),
            RhythmPattern::Focused => Some(EegBand::Beta),
            RhythmPattern::DeepSleep => Some(EegBand::Delta),
            RhythmPattern::PureTone { frequency_hz, .. } => {
                EegBand::ALL.into_iter().find(|band| band.contains(*frequency_hz))
            }
        }
    }

    /// Get pattern description
    pub fn description(&self) -> &'static str {
        match self {
            RhythmPattern::Rest => "Relaxed, eyes closed",
            RhythmPattern::Drowsy => "Drowsy",
            RhythmPattern::Focused => "Focused attention",
            RhythmPattern::DeepSleep => "Deep sleep",
            RhythmPattern::PureTone { .. } => "Pure tone",
        }
    }

    /// Create common preset patterns
    pub fn presets() -> Vec<(&'static str, RhythmPattern)> {
        vec![
            ("rest", RhythmPattern::Rest),
            ("drowsy", RhythmPattern::Drowsy),
            ("focused", RhythmPattern::Focused),
            ("deep_sleep", RhythmPattern::DeepSleep),
            (
                "alpha_tone",
                RhythmPattern::PureTone {
                    frequency_hz: 10.0,
                    amplitude_uv: 20.0,
                },
            ),
        ]
    }
}

impl Default for RhythmPattern {
    fn default() -> Self {
        RhythmPattern::Rest
    }
}
