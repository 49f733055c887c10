//! EEG frequency bands and per-band power summaries

use serde::{Deserialize, Serialize};

/// Standard EEG rhythm bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EegBand {
    /// Deep sleep rhythms, 0.5-4 Hz
    Delta,
    /// Drowsiness and memory encoding, 4-8 Hz
    Theta,
    /// Relaxed wakefulness, 8-13 Hz
    Alpha,
    /// Active concentration, 13-30 Hz
    Beta,
    /// High-frequency cortical activity, 30-100 Hz
    Gamma,
}

impl EegBand {
    /// All bands in ascending frequency order
    pub const ALL: [EegBand; 5] = [
        EegBand::Delta,
        EegBand::Theta,
        EegBand::Alpha,
        EegBand::Beta,
        EegBand::Gamma,
    ];

    /// Inclusive frequency range `(low, high)` in Hz
    pub fn range_hz(&self) -> (f64, f64) {
        match self {
            EegBand::Delta => (0.5, 4.0),
            EegBand::Theta => (4.0, 8.0),
            EegBand::Alpha => (8.0, 13.0),
            EegBand::Beta => (13.0, 30.0),
            EegBand::Gamma => (30.0, 100.0),
        }
    }

    /// Whether a frequency falls inside the band (both edges inclusive)
    ///
    /// Adjacent bands share their edge frequency, so 4 Hz belongs to both
    /// delta and theta.
    pub fn contains(&self, frequency: f64) -> bool {
        let (low, high) = self.range_hz();
        frequency >= low && frequency <= high
    }

    /// Lowercase band name
    pub fn name(&self) -> &'static str {
        match self {
            EegBand::Delta => "delta",
            EegBand::Theta => "theta",
            EegBand::Alpha => "alpha",
            EegBand::Beta => "beta",
            EegBand::Gamma => "gamma",
        }
    }
}

impl std::fmt::Display for EegBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (low, high) = self.range_hz();
        write!(f, "{} ({}-{} Hz)", self.name(), low, high)
    }
}

/// Averaged spectral power for each EEG band
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BandPowers {
    pub delta: f64,
    pub theta: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl BandPowers {
    /// Build band powers from a per-band function
    pub fn from_fn(mut power: impl FnMut(EegBand) -> f64) -> Self {
        BandPowers {
            delta: power(EegBand::Delta),
            theta: power(EegBand::Theta),
            alpha: power(EegBand::Alpha),
            beta: power(EegBand::Beta),
            gamma: power(EegBand::Gamma),
        }
    }

    /// Get the power of a single band
    pub fn get(&self, band: EegBand) -> f64 {
        match band {
            EegBand::Delta => self.delta,
            EegBand::Theta => self.theta,
            EegBand::Alpha => self.alpha,
            EegBand::Beta => self.beta,
            EegBand::Gamma => self.gamma,
        }
    }

    /// Iterate `(band, power)` pairs in ascending frequency order
    pub fn iter(&self) -> impl Iterator<Item = (EegBand, f64)> + '_ {
        EegBand::ALL.iter().map(move |&band| (band, self.get(band)))
    }

    /// Band with the highest power; ties resolve to the lower band
    pub fn dominant(&self) -> EegBand {
        self.iter()
            .fold((EegBand::Delta, f64::NEG_INFINITY), |best, (band, power)| {
                if power > best.1 { (band, power) } else { best }
            })
            .0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_ranges() {
        assert_eq!(EegBand::Alpha.range_hz(), (8.0, 13.0));
        assert!(EegBand::Alpha.contains(8.0));
        assert!(EegBand::Alpha.contains(13.0));
        assert!(!EegBand::Alpha.contains(13.5));

        // Shared edge
        assert!(EegBand::Delta.contains(4.0));
        assert!(EegBand::Theta.contains(4.0));
    }

    #[test]
    fn test_band_display() {
        assert_eq!(format!("{}", EegBand::Beta), "beta (13-30 Hz)");
    }

    #[test]
    fn test_band_powers_access() {
        let powers = BandPowers::from_fn(|band| match band {
            EegBand::Delta => 1.0,
            EegBand::Theta => 2.0,
            EegBand::Alpha => 5.0,
            EegBand::Beta => 3.0,
            EegBand::Gamma => -1.0,
        });

        assert_eq!(powers.get(EegBand::Alpha), 5.0);
        assert_eq!(powers.dominant(), EegBand::Alpha);

        let names: Vec<&str> = powers.iter().map(|(band, _)| band.name()).collect();
        assert_eq!(names, vec!["delta", "theta", "alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_band_powers_serialization() {
        let powers = BandPowers { alpha: 2.5, ..Default::default() };
        let json = serde_json::to_string(&powers).unwrap();
        assert!(json.contains("\"alpha\":2.5"));

        let band: EegBand = serde_json::from_str("\"gamma\"").unwrap();
        assert_eq!(band, EegBand::Gamma);
    }
}
