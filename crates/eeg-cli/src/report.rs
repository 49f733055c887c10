use eeg_core::{BandPowers, EegBand, FeatureVector};
use eeg_processing::{PipelineOutput, ProcessingConfig, ProcessingMetrics};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SpectrogramShape {
    pub frequency_bins: usize,
    pub time_bins: usize,
    pub frequency_resolution_hz: Option<f64>,
    pub max_frequency_hz: Option<f64>,
}

/// Everything printed for one run
#[derive(Debug, Clone, Serialize)]
pub struct Report<'a> {
    pub source: String,
    pub config: &'a ProcessingConfig,
    pub samples: usize,
    pub sampling_rate: f64,
    pub spectrogram: SpectrogramShape,
    pub band_powers: BandPowers,
    pub dominant_band: EegBand,
    pub features: &'a FeatureVector,
    pub metrics: &'a [ProcessingMetrics],
    pub total_latency_us: u64,
}

impl<'a> Report<'a> {
    pub fn new(source: String, config: &'a ProcessingConfig, output: &'a PipelineOutput) -> Self {
        let spectrogram = &output.spectrogram;

        Report {
            source,
            config,
            samples: output.conditioned.len(),
            sampling_rate: output.conditioned.sampling_rate(),
            spectrogram: SpectrogramShape {
                frequency_bins: spectrogram.frequency_bins(),
                time_bins: spectrogram.time_bins(),
                frequency_resolution_hz: spectrogram.frequency_resolution(),
                max_frequency_hz: spectrogram.max_frequency(),
            },
            band_powers: output.band_powers,
            dominant_band: output.band_powers.dominant(),
            features: &output.features,
            metrics: &output.metrics,
            total_latency_us: output.total_latency_us(),
        }
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, label: &str, values: &[f64]) -> fmt::Result {
    write!(f, "  {:<16}", label)?;
    for value in values {
        write!(f, " {:>9.4}", value)?;
    }
    writeln!(f)
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Source:      {}", self.source)?;
        writeln!(
            f,
            "Pipeline:    {} (window {}, overlap {}, {:?})",
            self.config.name,
            self.config.stft.window_size,
            self.config.stft.overlap_fraction,
            self.config.stft.transform
        )?;
        writeln!(
            f,
            "Buffer:      {} samples at {} Hz",
            self.samples, self.sampling_rate
        )?;
        writeln!(
            f,
            "Spectrogram: {} frequency bins x {} windows",
            self.spectrogram.frequency_bins, self.spectrogram.time_bins
        )?;

        writeln!(f, "\nBand power (mean log10):")?;
        for (band, power) in self.band_powers.iter() {
            let marker = if band == self.dominant_band { " <" } else { "" };
            writeln!(f, "  {:<20} {:>9.4}{}", band.to_string(), power, marker)?;
        }

        writeln!(f, "\nFeatures ({} values):", self.features.len())?;
        write_row(f, "statistics", self.features.statistical())?;
        for (i, chunk) in self.features.frequency_projection().chunks(8).enumerate() {
            write_row(f, if i == 0 { "projection" } else { "" }, chunk)?;
        }
        for (i, chunk) in self.features.windowed_means().chunks(8).enumerate() {
            write_row(f, if i == 0 { "windowed means" } else { "" }, chunk)?;
        }

        writeln!(f, "\nStages:")?;
        for metric in self.metrics {
            writeln!(f, "  {:<20} {:>8} us", metric.stage, metric.processing_time_us)?;
        }
        writeln!(f, "  {:<20} {:>8} us", "total", self.total_latency_us)
    }
}
