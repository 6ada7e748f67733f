//! Qualitative risk bands.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Three-level qualitative risk label derived from a predicted probability.
///
/// The bands follow the screening form's integer-percent convention:
/// below 30% is low, below 60% is moderate, 60% and above is high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum RiskBand {
    /// Risk percent below 30.
    #[display("Low")]
    Low,

    /// Risk percent from 30 up to (but not including) 60.
    #[display("Moderate")]
    Moderate,

    /// Risk percent of 60 or more.
    #[display("High")]
    High,
}

impl RiskBand {
    /// Bucket an integer risk percentage.
    ///
    /// # Examples
    ///
    /// ```
    /// use hepatica_report::RiskBand;
    ///
    /// assert_eq!(RiskBand::from_percent(29), RiskBand::Low);
    /// assert_eq!(RiskBand::from_percent(30), RiskBand::Moderate);
    /// assert_eq!(RiskBand::from_percent(60), RiskBand::High);
    /// ```
    pub const fn from_percent(percent: u8) -> Self {
        if percent < 30 {
            Self::Low
        } else if percent < 60 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    /// Bucket a probability in `[0, 1]`.
    pub fn from_probability(probability: f64) -> Self {
        Self::from_percent(percent_from_probability(probability))
    }
}

/// Convert a probability to the integer percentage shown to the user.
///
/// Truncates like the original form did, after clamping to `[0, 1]`.
pub fn percent_from_probability(probability: f64) -> u8 {
    (probability.clamp(0.0, 1.0) * 100.0) as u8
}
