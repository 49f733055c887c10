//! Band aggregation: reduce a spectrogram to per-band average power

use eeg_core::{BandPowers, EegBand, Spectrogram};
use tracing::debug;

/// Average power of every spectrogram cell whose frequency lies in `band`
///
/// Rows are matched on their frequency value with inclusive edges; the
/// matched rows are flattened across all time windows and averaged. A band
/// with no matching rows (for example gamma above Nyquist) reports `0`.
pub fn band_average(spectrogram: &Spectrogram, band: EegBand) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;

    for (frequency, row) in spectrogram.frequencies().iter().zip(spectrogram.power()) {
        if band.contains(*frequency) {
            sum += row.iter().sum::<f64>();
            count += row.len();
        }
    }

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Reduce a spectrogram to delta/theta/alpha/beta/gamma powers
pub fn aggregate(spectrogram: &Spectrogram) -> BandPowers {
    let powers = BandPowers::from_fn(|band| band_average(spectrogram, band));

    debug!(
        delta = powers.delta,
        theta = powers.theta,
        alpha = powers.alpha,
        beta = powers.beta,
        gamma = powers.gamma,
        "band powers aggregated"
    );

    powers
}

/// Stateless band aggregator stage
#[derive(Debug, Clone, Copy, Default)]
pub struct BandAggregator;

impl BandAggregator {
    pub fn aggregate(&self, spectrogram: &Spectrogram) -> BandPowers {
        aggregate(spectrogram)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectral::analyze;
    use approx::assert_relative_eq;

    fn synthetic(frequencies: Vec<f64>, rows: Vec<Vec<f64>>, rate: f64) -> Spectrogram {
        let columns = rows.first().map_or(0, Vec::len);
        let times = (0..columns).map(|w| w as f64).collect();
        Spectrogram::new(frequencies, times, rows, rate).unwrap()
    }

    #[test]
    fn test_inclusive_band_edges() {
        let spec = synthetic(
            vec![0.0, 4.0, 8.0, 13.0, 20.0],
            vec![
                vec![100.0, 100.0],
                vec![1.0, 3.0],
                vec![5.0, 7.0],
                vec![9.0, 11.0],
                vec![2.0, 2.0],
            ],
            50.0,
        );

        let powers = aggregate(&spec);

        // 0 Hz is below delta; 4 Hz is shared by delta and theta
        assert_relative_eq!(powers.delta, 2.0);
        assert_relative_eq!(powers.theta, (1.0 + 3.0 + 5.0 + 7.0) / 4.0);
        assert_relative_eq!(powers.alpha, (5.0 + 7.0 + 9.0 + 11.0) / 4.0);
        assert_relative_eq!(powers.beta, (9.0 + 11.0 + 2.0 + 2.0) / 4.0);
        assert_eq!(powers.gamma, 0.0);
    }

    #[test]
    fn test_empty_band_reports_zero() {
        // 40 Hz sampling: Nyquist 20 Hz leaves gamma without bins
        let spec = synthetic(vec![0.0, 10.0, 20.0], vec![vec![-3.0], vec![-2.0], vec![-1.0]], 40.0);
        assert_eq!(band_average(&spec, EegBand::Gamma), 0.0);
    }

    #[test]
    fn test_alpha_tone_beats_delta() {
        let samples: Vec<f64> = (0..2500)
            .map(|i| (2.0 * std::f64::consts::PI * 10.0 * i as f64 / 250.0).sin())
            .collect();
        let spec = analyze(&samples, 250.0, 256, 0.5).unwrap();

        let powers = BandAggregator.aggregate(&spec);

        assert!(powers.alpha > powers.delta);
        assert_eq!(powers.dominant(), EegBand::Alpha);
    }
}
