//! Time-frequency power matrix produced by short-time spectral analysis

use crate::error::{validate_sampling_rate, EegError, EegResult};
use serde::Serialize;

/// Log-power over (frequency, time) bins
///
/// `power[k][w]` is the log10 power of frequency bin `k` in analysis window
/// `w`. The constructor enforces the shape and axis invariants, so every
/// spectrogram in circulation is well formed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Spectrogram {
    frequencies: Vec<f64>,
    times: Vec<f64>,
    power: Vec<Vec<f64>>,
    sampling_rate: f64,
}

impl Spectrogram {
    /// Create a spectrogram, validating shape and axes
    pub fn new(
        frequencies: Vec<f64>,
        times: Vec<f64>,
        power: Vec<Vec<f64>>,
        sampling_rate: f64,
    ) -> EegResult<Self> {
        validate_sampling_rate(sampling_rate)?;

        if power.len() != frequencies.len() {
            return Err(EegError::InvalidSignalData {
                reason: format!(
                    "Power matrix has {} rows for {} frequency bins",
                    power.len(),
                    frequencies.len()
                ),
            });
        }

        if let Some((row, values)) = power.iter().enumerate().find(|(_, r)| r.len() != times.len()) {
            return Err(EegError::InvalidSignalData {
                reason: format!(
                    "Power row {} has {} columns for {} time bins",
                    row,
                    values.len(),
                    times.len()
                ),
            });
        }

        if frequencies.windows(2).any(|pair| pair[1] <= pair[0]) {
            return Err(EegError::InvalidSignalData {
                reason: "Frequency axis must be strictly increasing".to_string(),
            });
        }

        let nyquist = sampling_rate / 2.0;
        if frequencies.iter().any(|&f| !(0.0..=nyquist).contains(&f)) {
            return Err(EegError::InvalidSignalData {
                reason: format!("Frequency axis must lie within [0, {}] Hz", nyquist),
            });
        }

        if times.iter().any(|&t| !t.is_finite() || t < 0.0) {
            return Err(EegError::InvalidSignalData {
                reason: "Time axis must be finite and non-negative".to_string(),
            });
        }

        Ok(Spectrogram {
            frequencies,
            times,
            power,
            sampling_rate,
        })
    }

    /// Frequency axis in Hz
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Time axis in seconds (start of each analysis window)
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Power matrix indexed `[frequency][time]`
    pub fn power(&self) -> &[Vec<f64>] {
        &self.power
    }

    pub fn sampling_rate(&self) -> f64 {
        self.sampling_rate
    }

    pub fn frequency_bins(&self) -> usize {
        self.frequencies.len()
    }

    pub fn time_bins(&self) -> usize {
        self.times.len()
    }

    /// Power values of one frequency bin across all windows
    pub fn row(&self, frequency_bin: usize) -> Option<&[f64]> {
        self.power.get(frequency_bin).map(Vec::as_slice)
    }

    /// Power at a single (frequency, time) cell
    pub fn power_at(&self, frequency_bin: usize, time_bin: usize) -> Option<f64> {
        self.power.get(frequency_bin)?.get(time_bin).copied()
    }

    /// Spacing between adjacent frequency bins in Hz
    pub fn frequency_resolution(&self) -> Option<f64> {
        match self.frequencies.as_slice() {
            [first, second, ..] => Some(second - first),
            _ => None,
        }
    }

    /// Highest frequency on the axis
    pub fn max_frequency(&self) -> Option<f64> {
        self.frequencies.last().copied()
    }
}
