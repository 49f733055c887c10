//! Feature extraction: fixed 128-element vectors for classifier input

use eeg_core::{
    validate_sampling_rate, ChannelStats, EegError, EegResult, FeatureVector, SampleBuffer,
    FEATURE_VECTOR_LEN, FREQUENCY_ZONE, STATISTICAL_ZONE, WINDOWED_MEANS_ZONE,
};
use std::f64::consts::PI;
use tracing::debug;

/// Rate assumed by the frequency projection, independent of the input rate
pub const PROJECTION_REFERENCE_RATE_HZ: f64 = 250.0;

/// Upper end of the projection frequency grid (exclusive)
pub const PROJECTION_MAX_FREQUENCY_HZ: f64 = 50.0;

/// Number of projection frequencies
pub const PROJECTION_FREQUENCIES: usize = 58;

/// Number of windowed means
pub const TIME_WINDOWS: usize = 64;

/// Frequency probed by projection slot `slot` (0-based within the zone)
pub fn projection_frequency(slot: usize) -> f64 {
    (slot as f64 / PROJECTION_FREQUENCIES as f64) * PROJECTION_MAX_FREQUENCY_HZ
}

/// Statistical zone: mean, std-dev, variance, min, max, range
pub fn statistical_features(samples: &[f64]) -> EegResult<[f64; 6]> {
    let stats = ChannelStats::calculate(samples)?;
    Ok([stats.mean, stats.std_dev, stats.variance, stats.min, stats.max, stats.range])
}

/// Frequency zone: `Σ_j cos(2π f j / 250) x[j] / N` for each grid frequency
pub fn frequency_projection(samples: &[f64]) -> EegResult<[f64; PROJECTION_FREQUENCIES]> {
    if samples.is_empty() {
        return Err(EegError::EmptyInput {
            operation: "frequency projection",
        });
    }

    let n = samples.len() as f64;
    let mut projection = [0.0; PROJECTION_FREQUENCIES];

    for (slot, value) in projection.iter_mut().enumerate() {
        let frequency = projection_frequency(slot);
        let sum: f64 = samples
            .iter()
            .enumerate()
            .map(|(j, &x)| (2.0 * PI * frequency * j as f64 / PROJECTION_REFERENCE_RATE_HZ).cos() * x)
            .sum();
        *value = sum / n;
    }

    Ok(projection)
}

/// Time zone: means of 64 disjoint windows of `floor(N / 64)` samples
///
/// Window `w` covers `[w * size, min(w * size + size, N))`. When `N` is not
/// a multiple of 64 the trailing `N mod 64` samples fall outside every
/// window.
pub fn windowed_means(samples: &[f64]) -> EegResult<[f64; TIME_WINDOWS]> {
    let n = samples.len();
    let size = n / TIME_WINDOWS;

    if size == 0 {
        return Err(EegError::InsufficientSamples {
            required: TIME_WINDOWS,
            available: n,
        });
    }

    let mut means = [0.0; TIME_WINDOWS];
    for (w, mean) in means.iter_mut().enumerate() {
        let start = w * size;
        let end = (start + size).min(n);
        let window = &samples[start..end];
        *mean = window.iter().sum::<f64>() / window.len() as f64;
    }

    Ok(means)
}

/// Builds feature vectors from raw, unconditioned samples
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureExtractor;

impl FeatureExtractor {
    /// Extract features from a buffer
    pub fn extract(&self, buffer: &SampleBuffer) -> EegResult<FeatureVector> {
        extract(buffer.samples(), buffer.sampling_rate())
    }

    /// Smallest buffer that yields a complete vector
    pub fn min_samples(&self) -> usize {
        TIME_WINDOWS
    }
}

/// Extract the 128-element feature vector
///
/// `sampling_rate` is validated but does not enter any feature: the
/// frequency projection always assumes [`PROJECTION_REFERENCE_RATE_HZ`].
pub fn extract(samples: &[f64], sampling_rate: f64) -> EegResult<FeatureVector> {
    validate_sampling_rate(sampling_rate)?;

    if samples.is_empty() {
        return Err(EegError::EmptyInput {
            operation: "feature extraction",
        });
    }

    let mut values = [0.0; FEATURE_VECTOR_LEN];
    values[STATISTICAL_ZONE].copy_from_slice(&statistical_features(samples)?);
    values[FREQUENCY_ZONE].copy_from_slice(&frequency_projection(samples)?);
    values[WINDOWED_MEANS_ZONE].copy_from_slice(&windowed_means(samples)?);

    debug!(
        samples = samples.len(),
        sampling_rate,
        "feature vector extracted"
    );

    Ok(FeatureVector::new(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn sine(frequency: f64, rate: f64, n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| (2.0 * PI * frequency * i as f64 / rate).sin())
            .collect()
    }

    #[test]
    fn test_projection_grid() {
        assert_eq!(projection_frequency(0), 0.0);
        assert_relative_eq!(projection_frequency(29), 25.0);
        assert!(projection_frequency(57) < 50.0);
    }

    #[test]
    fn test_statistical_zone() {
        let samples: Vec<f64> = (1..=128).map(|i| i as f64).collect();
        let features = extract(&samples, 250.0).unwrap();
        let stats = features.statistical();

        assert_relative_eq!(stats[0], 64.5);
        assert_relative_eq!(stats[2], (128.0 * 128.0 - 1.0) / 12.0);
        assert_relative_eq!(stats[1], stats[2].sqrt());
        assert_eq!(stats[3], 1.0);
        assert_eq!(stats[4], 128.0);
        assert_eq!(stats[5], 127.0);
    }

    #[test]
    fn test_dc_projection_is_mean() {
        let samples = vec![3.0; 200];
        let projection = frequency_projection(&samples).unwrap();
        // cos(0) = 1 at the 0 Hz slot
        assert_relative_eq!(projection[0], 3.0);
    }

    #[test]
    fn test_projection_ignores_sampling_rate() {
        let samples = sine(10.0, 250.0, 500);

        let at_250 = extract(&samples, 250.0).unwrap();
        let at_1000 = extract(&samples, 1000.0).unwrap();

        assert_eq!(at_250, at_1000);
    }

    #[test]
    fn test_projection_peaks_near_tone() {
        // One second of a 10 Hz cosine at the reference rate; 10 Hz sits at slot 11.6
        let samples: Vec<f64> = (0..250)
            .map(|j| (2.0 * PI * 10.0 * j as f64 / 250.0).cos())
            .collect();
        let projection = frequency_projection(&samples).unwrap();

        let peak_slot = (0..PROJECTION_FREQUENCIES)
            .max_by(|&a, &b| projection[a].abs().total_cmp(&projection[b].abs()))
            .unwrap();
        assert!((11..=12).contains(&peak_slot));
    }

    #[test]
    fn test_windowed_means_layout() {
        // 130 samples: windows of 2, last two samples unused
        let samples: Vec<f64> = (0..130).map(|i| i as f64).collect();
        let means = windowed_means(&samples).unwrap();

        assert_relative_eq!(means[0], 0.5);
        assert_relative_eq!(means[1], 2.5);
        assert_relative_eq!(means[63], 126.5);
    }

    #[test]
    fn test_too_short_for_windows() {
        let min = FeatureExtractor.min_samples();
        assert_eq!(min, TIME_WINDOWS);

        let result = extract(&vec![1.0; min - 1], 250.0);
        assert_eq!(
            result,
            Err(EegError::InsufficientSamples { required: min, available: min - 1 })
        );

        let shortest = SampleBuffer::new(vec![1.0; min], 250.0).unwrap();
        assert!(FeatureExtractor.extract(&shortest).is_ok());
        assert!(matches!(extract(&[], 250.0), Err(EegError::EmptyInput { .. })));
        assert!(matches!(
            extract(&vec![1.0; min], 0.0),
            Err(EegError::InvalidSamplingRate { .. })
        ));
    }

    #[test]
    fn test_always_128_features() {
        for n in [64, 100, 256, 2500, 4099] {
            let features = extract(&sine(7.0, 250.0, n), 250.0).unwrap();
            assert_eq!(features.as_slice().len(), FEATURE_VECTOR_LEN);
            assert!(features.is_finite());
        }
    }

    #[test]
    fn test_deterministic() {
        let samples = sine(12.0, 250.0, 2500);
        let first = FeatureExtractor.extract(&SampleBuffer::new(samples.clone(), 250.0).unwrap()).unwrap();
        let second = FeatureExtractor.extract(&SampleBuffer::new(samples, 250.0).unwrap()).unwrap();

        let first_bits: Vec<u64> = first.as_slice().iter().map(|v| v.to_bits()).collect();
        let second_bits: Vec<u64> = second.as_slice().iter().map(|v| v.to_bits()).collect();
        assert_eq!(first_bits, second_bits);
    }

    #[test]
    fn test_windowed_means_of_constant() {
        let means = windowed_means(&[0.25; 640]).unwrap();
        for mean in means {
            assert_abs_diff_eq!(mean, 0.25, epsilon = 1e-15);
        }
    }
}
