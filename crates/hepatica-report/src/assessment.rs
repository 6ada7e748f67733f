//! Risk assessments produced for one screened patient.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::band::{RiskBand, percent_from_probability};

/// Errors that can occur while building or serializing assessments.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One feature's weight on the explanation chart.
///
/// For the logistic pipeline these are L1-normalized coefficients (signed,
/// absolute values summing to 1); for the forest they are impurity
/// importances. Neither is a causal claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureInfluence {
    /// Feature column name.
    pub feature: String,

    /// Normalized influence weight.
    pub weight: f64,
}

impl FeatureInfluence {
    /// Create a new influence entry.
    pub const fn new(feature: String, weight: f64) -> Self {
        Self { feature, weight }
    }

    /// Convert `(name, weight)` pairs as returned by the models.
    pub fn from_pairs(pairs: Vec<(String, f64)>) -> Vec<Self> {
        pairs
            .into_iter()
            .map(|(feature, weight)| Self::new(feature, weight))
            .collect()
    }
}

/// The full result of screening one patient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Assessment timestamp.
    pub generated_at: DateTime<Utc>,

    /// Predicted probability of the positive class.
    pub probability: f64,

    /// Probability as the truncated integer percentage shown to the user.
    pub risk_percent: u8,

    /// Qualitative risk band.
    pub band: RiskBand,

    /// Computed Body Mass Index, when the form collected height and weight.
    pub bmi: Option<f64>,

    /// Per-feature influence weights for the explanation chart.
    pub influences: Vec<FeatureInfluence>,
}

impl RiskAssessment {
    /// Build an assessment from a predicted probability.
    pub fn from_probability(probability: f64) -> Self {
        let risk_percent = percent_from_probability(probability);
        Self {
            generated_at: Utc::now(),
            probability,
            risk_percent,
            band: RiskBand::from_percent(risk_percent),
            bmi: None,
            influences: Vec::new(),
        }
    }

    /// Attach the computed BMI.
    #[must_use]
    pub const fn with_bmi(mut self, bmi: f64) -> Self {
        self.bmi = Some(bmi);
        self
    }

    /// Attach the influence weights.
    #[must_use]
    pub fn with_influences(mut self, influences: Vec<FeatureInfluence>) -> Self {
        self.influences = influences;
        self
    }

    /// Serialize to pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_probability_buckets() {
        let assessment = RiskAssessment::from_probability(0.45);
        assert_eq!(assessment.risk_percent, 45);
        assert_eq!(assessment.band, RiskBand::Moderate);
        assert!(assessment.bmi.is_none());
    }

    #[test]
    fn test_builder_attachments() {
        let influences = FeatureInfluence::from_pairs(vec![
            ("bmi".to_string(), 0.6),
            ("alcohol".to_string(), -0.4),
        ]);
        let assessment = RiskAssessment::from_probability(0.72)
            .with_bmi(24.22)
            .with_influences(influences);

        assert_eq!(assessment.band, RiskBand::High);
        assert_eq!(assessment.bmi, Some(24.22));
        assert_eq!(assessment.influences.len(), 2);
        assert_eq!(assessment.influences[1].feature, "alcohol");
    }

    #[test]
    fn test_json_contains_band() {
        let json = RiskAssessment::from_probability(0.1).to_json().unwrap();
        assert!(json.contains("\"band\": \"Low\""));
        assert!(json.contains("\"risk_percent\": 10"));
    }
}
