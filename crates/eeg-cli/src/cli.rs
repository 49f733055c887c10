use clap::{Parser, ValueEnum};
use eeg_processing::{ProcessingConfig, ProcessingProfile, TransformKind};
use eeg_simulation::RhythmPattern;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "eeg-analyze", about = "Simulate an EEG channel and run the analysis pipeline")]
pub struct Cli {
    /// Rhythm to simulate
    #[arg(short, long, value_enum, default_value_t = PatternArg::Rest)]
    pub pattern: PatternArg,

    /// Frequency of the `tone` pattern in Hz
    #[arg(long, default_value_t = 10.0)]
    pub tone_frequency: f64,

    /// Recording length in seconds
    #[arg(short, long, default_value_t = 10.0)]
    pub duration: f64,

    /// Sampling rate in Hz
    #[arg(short, long, default_value_t = 250.0)]
    pub rate: f64,

    /// Random seed; omit for a fresh recording each run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Electrode label
    #[arg(long, default_value = "Oz")]
    pub channel: String,

    /// Disable 50 Hz powerline interference
    #[arg(long)]
    pub no_powerline: bool,

    /// Preset processing profile
    #[arg(long, value_enum)]
    pub profile: Option<ProfileArg>,

    /// Processing configuration file (JSON); flags below override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// STFT window length in samples
    #[arg(short, long)]
    pub window: Option<usize>,

    /// STFT overlap fraction in [0, 1)
    #[arg(long)]
    pub overlap: Option<f64>,

    /// Spectral backend
    #[arg(long, value_enum)]
    pub transform: Option<TransformArg>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
    pub output: OutputFormat,

    /// List available rhythm presets and exit
    #[arg(long)]
    pub list_patterns: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PatternArg {
    Rest,
    Drowsy,
    Focused,
    DeepSleep,
    Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProfileArg {
    Standard,
    HighResolution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TransformArg {
    Direct,
    Fft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Summary,
    Json,
}

impl Cli {
    pub fn rhythm(&self) -> RhythmPattern {
        match self.pattern {
            PatternArg::Rest => RhythmPattern::Rest,
            PatternArg::Drowsy => RhythmPattern::Drowsy,
            PatternArg::Focused => RhythmPattern::Focused,
            PatternArg::DeepSleep => RhythmPattern::DeepSleep,
            PatternArg::Tone => RhythmPattern::PureTone {
                frequency_hz: self.tone_frequency,
                amplitude_uv: 20.0,
            },
        }
    }

    /// Apply profile and window flags on top of a loaded or default configuration
    pub fn apply_overrides(&self, base: ProcessingConfig) -> ProcessingConfig {
        let mut config = match self.profile {
            Some(ProfileArg::Standard) => ProcessingConfig::for_profile(ProcessingProfile::Standard),
            Some(ProfileArg::HighResolution) => {
                ProcessingConfig::for_profile(ProcessingProfile::HighResolution)
            }
            None => base,
        };

        let mut overridden = false;
        if let Some(window) = self.window {
            config.stft.window_size = window;
            overridden = true;
        }
        if let Some(overlap) = self.overlap {
            config.stft.overlap_fraction = overlap;
            overridden = true;
        }
        if let Some(transform) = self.transform {
            config.stft.transform = match transform {
                TransformArg::Direct => TransformKind::Direct,
                TransformArg::Fft => TransformKind::Fft,
            };
            overridden = true;
        }

        if overridden {
            config.profile = ProcessingProfile::Custom;
        }
        config
    }
}
