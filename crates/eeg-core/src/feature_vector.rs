//! Fixed-length feature vector handed to classifiers

use crate::error::{EegError, EegResult};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Total number of features
pub const FEATURE_VECTOR_LEN: usize = 128;

/// Statistical summary: mean, std-dev, variance, min, max, range
pub const STATISTICAL_ZONE: Range<usize> = 0..6;

/// Cosine-correlation magnitudes at evenly spaced frequencies
pub const FREQUENCY_ZONE: Range<usize> = 6..64;

/// Means of equal-width disjoint windows spanning the buffer
pub const WINDOWED_MEANS_ZONE: Range<usize> = 64..128;

/// Immutable 128-element feature vector
///
/// The layout is fixed; use the zone accessors instead of raw offsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct FeatureVector {
    values: [f64; FEATURE_VECTOR_LEN],
}

impl FeatureVector {
    /// Wrap exactly [`FEATURE_VECTOR_LEN`] values
    pub fn new(values: [f64; FEATURE_VECTOR_LEN]) -> Self {
        FeatureVector { values }
    }

    /// All features in layout order
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.values.to_vec()
    }

    pub fn len(&self) -> usize {
        FEATURE_VECTOR_LEN
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Indices 0-5
    pub fn statistical(&self) -> &[f64] {
        &self.values[STATISTICAL_ZONE]
    }

    /// Indices 6-63
    pub fn frequency_projection(&self) -> &[f64] {
        &self.values[FREQUENCY_ZONE]
    }

    /// Indices 64-127
    pub fn windowed_means(&self) -> &[f64] {
        &self.values[WINDOWED_MEANS_ZONE]
    }

    /// Whether every feature is a finite number
    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|v| v.is_finite())
    }
}

impl TryFrom<Vec<f64>> for FeatureVector {
    type Error = EegError;

    fn try_from(values: Vec<f64>) -> EegResult<Self> {
        let len = values.len();
        let values: [f64; FEATURE_VECTOR_LEN] = values.try_into().map_err(|_| {
            EegError::InvalidSignalData {
                reason: format!(
                    "Feature vector needs {} values, got {}",
                    FEATURE_VECTOR_LEN, len
                ),
            }
        })?;
        Ok(FeatureVector { values })
    }
}

impl From<FeatureVector> for Vec<f64> {
    fn from(vector: FeatureVector) -> Self {
        vector.into_vec()
    }
}

impl std::ops::Index<usize> for FeatureVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> FeatureVector {
        let mut values = [0.0; FEATURE_VECTOR_LEN];
        for (i, value) in values.iter_mut().enumerate() {
            *value = i as f64;
        }
        FeatureVector::new(values)
    }

    #[test]
    fn test_zone_layout() {
        let vector = ramp();

        assert_eq!(vector.len(), 128);
        assert_eq!(vector.statistical().len(), 6);
        assert_eq!(vector.frequency_projection().len(), 58);
        assert_eq!(vector.windowed_means().len(), 64);

        assert_eq!(vector.frequency_projection()[0], 6.0);
        assert_eq!(vector.windowed_means()[0], 64.0);
        assert_eq!(vector[127], 127.0);
    }

    #[test]
    fn test_try_from_length_checked() {
        assert!(FeatureVector::try_from(vec![0.0; 128]).is_ok());

        let short = FeatureVector::try_from(vec![0.0; 127]);
        assert!(matches!(short, Err(EegError::InvalidSignalData { .. })));
    }

    #[test]
    fn test_json_as_plain_array() {
        let vector = ramp();
        let json = serde_json::to_string(&vector).unwrap();
        assert!(json.starts_with("[0.0,1.0,2.0"));

        let parsed: FeatureVector = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, vector);

        let truncated: Result<FeatureVector, _> = serde_json::from_str("[1.0, 2.0]");
        assert!(truncated.is_err());
    }

    #[test]
    fn test_finite_check() {
        let mut values = [0.0; FEATURE_VECTOR_LEN];
        assert!(FeatureVector::new(values).is_finite());
        values[10] = f64::NAN;
        assert!(!FeatureVector::new(values).is_finite());
    }
}
