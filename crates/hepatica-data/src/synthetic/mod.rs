//! Seeded synthetic dataset generators.
//!
//! Each generator fabricates a labeled table from independent fixed
//! distributions and a hand-picked risk formula: a linear combination of
//! (possibly transformed) columns is squashed or thresholded, then binarized
//! by a [`LabelRule`]. Given the same configuration, a generator reproduces
//! its table bit-for-bit.

mod cohort;
mod screening;

pub use cohort::{CohortConfig, ExtendedScreeningConfig, generate_cohort, generate_extended};
pub use screening::{ScreeningConfig, generate_standard};

use serde::{Deserialize, Serialize};

use crate::error::{DataError, Result};

/// How a synthetic risk score is binarized into labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LabelRule {
    /// Positive when the score is strictly above a fixed cutoff.
    Cutoff(f64),

    /// Positive when the score is at or above the given quantile of the
    /// score distribution (e.g. 0.65 marks the top 35% positive).
    Percentile(f64),
}

impl LabelRule {
    /// Binarize the given scores.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty score slice or a percentile outside
    /// (0, 1).
    pub fn binarize(&self, scores: &[f64]) -> Result<Vec<u8>> {
        if scores.is_empty() {
            return Err(DataError::EmptyTable);
        }
        let cutoff = match *self {
            Self::Cutoff(cutoff) => cutoff,
            Self::Percentile(quantile) => {
                if !(quantile > 0.0 && quantile < 1.0) {
                    return Err(DataError::InvalidConfig(format!(
                        "percentile must be in (0, 1), got {quantile}"
                    )));
                }
                let mut sorted = scores.to_vec();
                sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
                let rank = ((sorted.len() as f64) * quantile).floor() as usize;
                // Everything at or above the quantile value is positive, so
                // the cutoff sits just below the rank-th smallest score.
                return Ok(scores
                    .iter()
                    .map(|&s| u8::from(s >= sorted[rank.min(sorted.len() - 1)]))
                    .collect());
            }
        };
        Ok(scores.iter().map(|&s| u8::from(s > cutoff)).collect())
    }
}

/// Logistic sigmoid.
pub(crate) fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cutoff_is_strict() {
        let labels = LabelRule::Cutoff(0.5).binarize(&[0.4, 0.5, 0.6]).unwrap();
        assert_eq!(labels, vec![0, 0, 1]);
    }

    #[test]
    fn test_percentile_positive_rate() {
        let scores: Vec<f64> = (0..1000).map(|i| i as f64 / 1000.0).collect();
        let labels = LabelRule::Percentile(0.65).binarize(&scores).unwrap();
        let positives = labels.iter().filter(|&&l| l == 1).count();
        // Top 35% of a uniform grid
        assert_eq!(positives, 350);
    }

    #[test]
    fn test_percentile_validation() {
        assert!(LabelRule::Percentile(1.0).binarize(&[0.1]).is_err());
        assert!(LabelRule::Percentile(0.0).binarize(&[0.1]).is_err());
    }

    #[test]
    fn test_empty_scores_rejected() {
        assert!(LabelRule::Cutoff(0.5).binarize(&[]).is_err());
    }

    #[test]
    fn test_sigmoid_bounds() {
        assert!(sigmoid(-20.0) < 1e-6);
        assert!(sigmoid(20.0) > 1.0 - 1e-6);
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-12);
    }
}
