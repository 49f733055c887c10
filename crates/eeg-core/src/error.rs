//! Error handling for the EEG processing workspace
//!
//! Every failure in the core is local, synchronous and caused by malformed
//! input, so none of these errors is retryable.

use core::fmt;

/// Result type alias for EEG core operations
pub type EegResult<T> = Result<T, EegError>;

/// Error type for all core signal-processing operations
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EegError {
    /// Zero-length buffer where a mean or maximum is required
    EmptyInput {
        /// Operation that needed at least one sample
        operation: &'static str,
    },

    /// Normalization divisor is zero (constant-zero signal)
    DegenerateSignal {
        /// Description of the degenerate quantity
        reason: &'static str,
    },

    /// Analysis window cannot produce a positive hop size
    InvalidWindow {
        /// Requested window size in samples
        window_size: usize,
        /// Requested overlap fraction
        overlap_fraction: f64,
    },

    /// Buffer shorter than the analysis window
    InsufficientSamples {
        /// Minimum number of samples required
        required: usize,
        /// Number of samples provided
        available: usize,
    },

    /// Sampling rate is not a finite positive number
    InvalidSamplingRate {
        /// Provided sampling rate
        rate: f64,
    },

    /// Signal data violates a structural invariant
    InvalidSignalData {
        /// Description of the violation
        reason: String,
    },

    /// Invalid processing configuration
    ConfigurationError {
        /// Description of the configuration error
        message: String,
    },

    /// The external classifier rejected the feature vector
    ClassifierError {
        /// Message reported by the classifier
        message: String,
    },
}

impl fmt::Display for EegError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EegError::EmptyInput { operation } => {
                write!(f, "Empty input: {} requires at least one sample", operation)
            }
            EegError::DegenerateSignal { reason } => {
                write!(f, "Degenerate signal: {}", reason)
            }
            EegError::InvalidWindow { window_size, overlap_fraction } => {
                write!(f, "Invalid analysis window: size {} with overlap {} gives no positive hop",
                       window_size, overlap_fraction)
            }
            EegError::InsufficientSamples { required, available } => {
                write!(f, "Insufficient samples: required {}, available {}",
                       required, available)
            }
            EegError::InvalidSamplingRate { rate } => {
                write!(f, "Invalid sampling rate: {}Hz, must be finite and positive", rate)
            }
            EegError::InvalidSignalData { reason } => {
                write!(f, "Invalid signal data: {}", reason)
            }
            EegError::ConfigurationError { message } => {
                write!(f, "Configuration error: {}", message)
            }
            EegError::ClassifierError { message } => {
                write!(f, "Classifier error: {}", message)
            }
        }
    }
}

impl std::error::Error for EegError {}

/// Validate a sampling rate shared by every entry point
pub fn validate_sampling_rate(rate: f64) -> EegResult<()> {
    if rate.is_finite() && rate > 0.0 {
        Ok(())
    } else {
        Err(EegError::InvalidSamplingRate { rate })
    }
}

/// Convenience macro for creating configuration errors
#[macro_export]
macro_rules! config_error {
    ($($arg:tt)+) => {
        $crate::error::EegError::ConfigurationError {
            message: format!($($arg)+),
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = EegError::InsufficientSamples {
            required: 256,
            available: 100,
        };
        let display = format!("{}", error);
        assert!(display.contains("Insufficient samples"));
        assert!(display.contains("256"));
        assert!(display.contains("100"));
    }

    #[test]
    fn test_error_equality() {
        let error1 = EegError::DegenerateSignal { reason: "test" };
        let error2 = EegError::DegenerateSignal { reason: "test" };
        assert_eq!(error1, error2);
    }

    #[test]
    fn test_sampling_rate_validation() {
        assert!(validate_sampling_rate(250.0).is_ok());
        assert!(validate_sampling_rate(0.5).is_ok());
        assert_eq!(
            validate_sampling_rate(0.0),
            Err(EegError::InvalidSamplingRate { rate: 0.0 })
        );
        assert!(validate_sampling_rate(-250.0).is_err());
        assert!(validate_sampling_rate(f64::NAN).is_err());
        assert!(validate_sampling_rate(f64::INFINITY).is_err());
    }

    #[test]
    fn test_config_error_macro() {
        let error = config_error!("window {} too small", 1);
        assert_eq!(
            error,
            EegError::ConfigurationError { message: "window 1 too small".to_string() }
        );
    }
}
