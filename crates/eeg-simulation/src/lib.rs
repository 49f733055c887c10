//! EEG-Simulation: synthetic EEG generation
//!
//! Seeded, reproducible single-channel recordings built from rhythm
//! presets, Gaussian noise, electrode artifacts and powerline interference.

pub mod eeg_simulator;
pub mod rhythm_patterns;

pub use eeg_simulator::*;
pub use rhythm_patterns::*;
