//! Short-time spectral analysis (STFT) producing log-power spectrograms

use eeg_core::{validate_sampling_rate, EegError, EegResult, SampleBuffer, Spectrogram};
use num_complex::Complex;
use realfft::{RealFftPlanner, RealToComplex};
use rustfft::{Fft, FftPlanner};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::sync::Arc;
use tracing::debug;

/// Default analysis window in samples
pub const DEFAULT_WINDOW_SIZE: usize = 256;

/// Default fraction of each window shared with the next
pub const DEFAULT_OVERLAP_FRACTION: f64 = 0.5;

/// Added to every squared magnitude before taking log10
pub const POWER_FLOOR: f64 = 1e-10;

/// Transform used for each analysis window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformKind {
    /// Direct O(N·K) summation of the discrete Fourier transform
    Direct,
    /// Fast transform; agrees with `Direct` within floating-point tolerance
    #[default]
    Fft,
}

/// STFT configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StftConfig {
    /// Window size in samples
    pub window_size: usize,
    /// Window overlap (0.0 to 1.0)
    pub overlap_fraction: f64,
    /// Transform backend
    pub transform: TransformKind,
}

impl Default for StftConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            overlap_fraction: DEFAULT_OVERLAP_FRACTION,
            transform: TransformKind::default(),
        }
    }
}

impl StftConfig {
    /// Create configuration with the default transform backend
    pub fn new(window_size: usize, overlap_fraction: f64) -> Self {
        Self {
            window_size,
            overlap_fraction,
            transform: TransformKind::default(),
        }
    }

    /// Samples between consecutive window starts: `floor(N * (1 - overlap))`
    pub fn hop_size(&self) -> EegResult<usize> {
        let hop = (self.window_size as f64 * (1.0 - self.overlap_fraction)).floor();

        // The Hann taper divides by N - 1, so a window needs two samples.
        if self.window_size < 2 || !(hop >= 1.0) {
            return Err(EegError::InvalidWindow {
                window_size: self.window_size,
                overlap_fraction: self.overlap_fraction,
            });
        }

        Ok(hop as usize)
    }

    /// Number of frequency bins: `floor(N / 2) + 1`
    pub fn frequency_bins(&self) -> usize {
        self.window_size / 2 + 1
    }

    /// Number of complete windows that fit in `len` samples
    pub fn window_count(&self, len: usize) -> EegResult<usize> {
        let hop = self.hop_size()?;

        if len < self.window_size {
            return Err(EegError::InsufficientSamples {
                required: self.window_size,
                available: len,
            });
        }

        Ok((len - self.window_size) / hop + 1)
    }

    pub fn validate(&self) -> EegResult<()> {
        self.hop_size().map(|_| ())
    }
}

/// Symmetric Hann taper: `0.5 - 0.5 cos(2π i / (N - 1))`
pub fn hann_window(size: usize) -> Vec<f64> {
    if size < 2 {
        return vec![1.0; size];
    }

    let denominator = (size - 1) as f64;
    (0..size)
        .map(|i| 0.5 - 0.5 * (2.0 * PI * i as f64 / denominator).cos())
        .collect()
}

/// Per-window transform, planned once per analysis call
enum WindowTransform {
    Direct,
    Real {
        fft: Arc<dyn RealToComplex<f64>>,
        input: Vec<f64>,
        spectrum: Vec<Complex<f64>>,
    },
    Complex {
        fft: Arc<dyn Fft<f64>>,
        buffer: Vec<Complex<f64>>,
    },
}

impl WindowTransform {
    fn plan(kind: TransformKind, window_size: usize) -> Self {
        match kind {
            TransformKind::Direct => WindowTransform::Direct,
            // realfft handles even lengths; odd lengths go through a full complex FFT
            TransformKind::Fft if window_size % 2 == 0 => {
                let fft = RealFftPlanner::<f64>::new().plan_fft_forward(window_size);
                let input = fft.make_input_vec();
                let spectrum = fft.make_output_vec();
                WindowTransform::Real { fft, input, spectrum }
            }
            TransformKind::Fft => {
                let fft = FftPlanner::<f64>::new().plan_fft_forward(window_size);
                WindowTransform::Complex {
                    fft,
                    buffer: vec![Complex::new(0.0, 0.0); window_size],
                }
            }
        }
    }

    /// Write `log10(|X[k]|² + ε)` for every bin of a tapered frame into `out`
    fn log_power(&mut self, frame: &[f64], out: &mut [f64]) -> EegResult<()> {
        match self {
            WindowTransform::Direct => {
                let n = frame.len() as f64;
                for (k, power) in out.iter_mut().enumerate() {
                    let mut real = 0.0;
                    let mut imag = 0.0;
                    for (j, &x) in frame.iter().enumerate() {
                        let angle = -2.0 * PI * k as f64 * j as f64 / n;
                        real += x * angle.cos();
                        imag += x * angle.sin();
                    }
                    *power = (real * real + imag * imag + POWER_FLOOR).log10();
                }
            }
            WindowTransform::Real { fft, input, spectrum } => {
                input.copy_from_slice(frame);
                fft.process(input, spectrum).map_err(|e| EegError::InvalidSignalData {
                    reason: format!("Real FFT failed: {}", e),
                })?;
                for (power, c) in out.iter_mut().zip(spectrum.iter()) {
                    *power = (c.norm_sqr() + POWER_FLOOR).log10();
                }
            }
            WindowTransform::Complex { fft, buffer } => {
                for (slot, &x) in buffer.iter_mut().zip(frame) {
                    *slot = Complex::new(x, 0.0);
                }
                fft.process(buffer);
                for (power, c) in out.iter_mut().zip(buffer.iter()) {
                    *power = (c.norm_sqr() + POWER_FLOOR).log10();
                }
            }
        }
        Ok(())
    }
}

/// Short-time spectral analyzer
#[derive(Debug, Clone, Copy, Default)]
pub struct SpectralAnalyzer {
    config: StftConfig,
}

impl SpectralAnalyzer {
    /// Create analyzer with configuration
    pub fn new(config: StftConfig) -> Self {
        SpectralAnalyzer { config }
    }

    pub fn config(&self) -> &StftConfig {
        &self.config
    }

    /// Analyze a buffer
    pub fn analyze(&self, buffer: &SampleBuffer) -> EegResult<Spectrogram> {
        self.analyze_samples(buffer.samples(), buffer.sampling_rate())
    }

    /// Analyze raw samples at the given rate
    pub fn analyze_samples(&self, samples: &[f64], sampling_rate: f64) -> EegResult<Spectrogram> {
        validate_sampling_rate(sampling_rate)?;

        let window_size = self.config.window_size;
        let hop = self.config.hop_size()?;
        let num_windows = self.config.window_count(samples.len())?;
        let freq_bins = self.config.frequency_bins();

        let nyquist = sampling_rate / 2.0;
        let frequencies: Vec<f64> = (0..freq_bins)
            .map(|k| (k as f64 * sampling_rate / window_size as f64).min(nyquist))
            .collect();
        let times: Vec<f64> = (0..num_windows)
            .map(|w| (w * hop) as f64 / sampling_rate)
            .collect();

        let taper = hann_window(window_size);
        let mut transform = WindowTransform::plan(self.config.transform, window_size);
        let mut frame = vec![0.0; window_size];
        let mut column = vec![0.0; freq_bins];
        let mut power = vec![Vec::with_capacity(num_windows); freq_bins];

        for w in 0..num_windows {
            let start = w * hop;
            for ((slot, &x), &h) in frame
                .iter_mut()
                .zip(&samples[start..start + window_size])
                .zip(&taper)
            {
                *slot = x * h;
            }

            transform.log_power(&frame, &mut column)?;
            for (row, &value) in power.iter_mut().zip(&column) {
                row.push(value);
            }
        }

        debug!(
            window_size,
            hop,
            frequency_bins = freq_bins,
            time_bins = num_windows,
            transform = ?self.config.transform,
            "spectrogram computed"
        );

        Spectrogram::new(frequencies, times, power, sampling_rate)
    }
}

/// Compute the log-power spectrogram of raw samples
pub fn analyze(
    samples: &[f64],
    sampling_rate: f64,
    window_size: usize,
    overlap_fraction: f64,
) -> EegResult<Spectrogram> {
    SpectralAnalyzer::new(StftConfig::new(window_size, overlap_fraction))
        .analyze_samples(samples, sampling_rate)
}
