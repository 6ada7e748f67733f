//! Extended screening and offline cohort generators.
//!
//! Both share the ten-column extended schema. The cohort generator mirrors
//! the offline trainer: an indicator-based score with additive noise,
//! thresholded at a fixed cutoff. The extended screening generator drives
//! the elaborate form variant: a weighted linear score squashed by the
//! sigmoid and binarized at a percentile of the score distribution.

use ndarray::Array2;
use rand::SeedableRng;
use rand::distributions::WeightedIndex;
use rand::prelude::*;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use statrs::distribution::Normal;

use super::{LabelRule, sigmoid};
use crate::error::{DataError, Result};
use crate::table::FeatureTable;

/// Column names of the extended/cohort schema, in schema order.
pub(crate) const EXTENDED_COLUMNS: [&str; 10] = [
    "age",
    "bmi",
    "waist_cm",
    "diabetes",
    "high_cholesterol",
    "alcohol_use",
    "activity_level",
    "fatigue",
    "right_side_pain",
    "alt_ast_ratio",
];

/// Configuration for the offline cohort generator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CohortConfig {
    /// Number of rows to generate (default: 5000).
    pub samples: usize,

    /// Random seed (default: 42).
    pub seed: u64,

    /// Standard deviation of the additive label noise (default: 0.1).
    pub noise_std: f64,

    /// Label rule applied to the noisy score (default: cutoff at 0.5).
    pub label_rule: LabelRule,
}

impl Default for CohortConfig {
    fn default() -> Self {
        Self {
            samples: 5000,
            seed: 42,
            noise_std: 0.1,
            label_rule: LabelRule::Cutoff(0.5),
        }
    }
}

/// Configuration for the extended screening generator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExtendedScreeningConfig {
    /// Number of rows to generate (default: 500).
    pub samples: usize,

    /// Random seed (default: 42).
    pub seed: u64,

    /// Score quantile at which labels turn positive (default: 0.65, i.e.
    /// the top 35% of scores are positive).
    pub positive_quantile: f64,
}

impl Default for ExtendedScreeningConfig {
    fn default() -> Self {
        Self {
            samples: 500,
            seed: 42,
            positive_quantile: 0.65,
        }
    }
}

/// The raw ten-column draw shared by both generators.
struct ExtendedDraw {
    features: Array2<f64>,
}

fn draw_extended_columns(n: usize, rng: &mut StdRng) -> Result<ExtendedDraw> {
    let diabetes_dist = WeightedIndex::new([0.7, 0.3])?;
    let cholesterol_dist = WeightedIndex::new([0.65, 0.35])?;
    let fatigue_dist = WeightedIndex::new([0.6, 0.4])?;
    let pain_dist = WeightedIndex::new([0.8, 0.2])?;

    let age: Vec<f64> = (0..n).map(|_| rng.gen_range(18..80) as f64).collect();
    let bmi: Vec<f64> = (0..n).map(|_| rng.gen_range(18.0..45.0)).collect();
    let waist_cm: Vec<f64> = (0..n).map(|_| rng.gen_range(60.0..150.0)).collect();
    let diabetes: Vec<f64> = (0..n).map(|_| rng.sample(&diabetes_dist) as f64).collect();
    let high_cholesterol: Vec<f64> = (0..n)
        .map(|_| rng.sample(&cholesterol_dist) as f64)
        .collect();
    let alcohol_use: Vec<f64> = (0..n).map(|_| rng.gen_range(0..3) as f64).collect();
    let activity_level: Vec<f64> = (0..n).map(|_| rng.gen_range(0..3) as f64).collect();
    let fatigue: Vec<f64> = (0..n).map(|_| rng.sample(&fatigue_dist) as f64).collect();
    let right_side_pain: Vec<f64> = (0..n).map(|_| rng.sample(&pain_dist) as f64).collect();
    let alt_ast_ratio: Vec<f64> = (0..n).map(|_| rng.gen_range(0.5..3.0)).collect();

    let columns = [
        age,
        bmi,
        waist_cm,
        diabetes,
        high_cholesterol,
        alcohol_use,
        activity_level,
        fatigue,
        right_side_pain,
        alt_ast_ratio,
    ];
    let features = Array2::from_shape_fn((n, EXTENDED_COLUMNS.len()), |(i, j)| columns[j][i]);
    Ok(ExtendedDraw { features })
}

fn extended_names() -> Vec<String> {
    EXTENDED_COLUMNS.iter().map(|s| s.to_string()).collect()
}

/// 1.0 when the risk indicator holds, 0.0 otherwise.
fn indicator(condition: bool) -> f64 {
    if condition { 1.0 } else { 0.0 }
}

/// Generate the offline training cohort.
///
/// The rule-based score is a sum of risk indicators:
/// `0.4*(bmi>30) + 0.3*(waist>100) + 0.25*diabetes + 0.2*(alt_ast>1.5)
///  + 0.15*(alcohol==heavy) - 0.1*(activity==high) + Normal(0, noise_std)`,
/// binarized by the configured label rule (cutoff 0.5 by default).
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub fn generate_cohort(config: &CohortConfig) -> Result<FeatureTable> {
    if config.samples == 0 {
        return Err(DataError::InvalidConfig(
            "samples must be positive".to_string(),
        ));
    }
    if config.noise_std < 0.0 {
        return Err(DataError::InvalidConfig(format!(
            "noise_std must be non-negative, got {}",
            config.noise_std
        )));
    }

    let n = config.samples;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let draw = draw_extended_columns(n, &mut rng)?;
    let noise_dist = Normal::new(0.0, config.noise_std.max(f64::MIN_POSITIVE))?;

    let scores: Vec<f64> = draw
        .features
        .outer_iter()
        .map(|row| {
            let bmi = row[1];
            let waist_cm = row[2];
            let diabetes = row[3];
            let alcohol_use = row[5];
            let activity_level = row[6];
            let alt_ast_ratio = row[9];

            let noise = if config.noise_std > 0.0 {
                rng.sample(noise_dist)
            } else {
                0.0
            };

            0.4 * indicator(bmi > 30.0)
                + 0.3 * indicator(waist_cm > 100.0)
                + 0.25 * diabetes
                + 0.2 * indicator(alt_ast_ratio > 1.5)
                + 0.15 * indicator(alcohol_use == 2.0)
                - 0.1 * indicator(activity_level == 2.0)
                + noise
        })
        .collect();
    let labels = config.label_rule.binarize(&scores)?;

    FeatureTable::new(extended_names(), draw.features, labels)
}

/// Weights of the extended screening risk formula, one per column.
const EXTENDED_WEIGHTS: [f64; 10] = [
    0.015, // age
    0.05,  // bmi
    0.01,  // waist_cm
    0.9,   // diabetes
    0.7,   // high_cholesterol
    0.6,   // alcohol_use
    -0.5,  // activity_level
    0.5,   // fatigue
    0.4,   // right_side_pain
    0.8,   // alt_ast_ratio
];

/// Centering intercept for the extended risk formula.
const EXTENDED_BASELINE: f64 = -4.0;

/// Generate the extended screening dataset.
///
/// A weighted linear combination of all ten columns is squashed by the
/// sigmoid; labels are positive for scores at or above the configured
/// quantile of the score distribution.
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub fn generate_extended(config: &ExtendedScreeningConfig) -> Result<FeatureTable> {
    if config.samples == 0 {
        return Err(DataError::InvalidConfig(
            "samples must be positive".to_string(),
        ));
    }

    let n = config.samples;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let draw = draw_extended_columns(n, &mut rng)?;

    let scores: Vec<f64> = draw
        .features
        .outer_iter()
        .map(|row| {
            sigmoid(
                row.iter()
                    .zip(EXTENDED_WEIGHTS.iter())
                    .map(|(x, w)| w * x)
                    .sum::<f64>()
                    + EXTENDED_BASELINE,
            )
        })
        .collect();
    let labels = LabelRule::Percentile(config.positive_quantile).binarize(&scores)?;

    Ok(FeatureTable::new(extended_names(), draw.features, labels)?
        .with_label_name("fatty_liver"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cohort_shape_and_schema() {
        let table = generate_cohort(&CohortConfig {
            samples: 200,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(table.n_samples(), 200);
        assert_eq!(table.n_features(), 10);
        assert_eq!(table.feature_names()[9], "alt_ast_ratio");
        assert_eq!(table.label_name(), "risk");
    }

    #[test]
    fn test_cohort_deterministic() {
        let a = generate_cohort(&CohortConfig::default()).unwrap();
        let b = generate_cohort(&CohortConfig::default()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_cohort_value_ranges() {
        let table = generate_cohort(&CohortConfig {
            samples: 500,
            ..Default::default()
        })
        .unwrap();
        for &age in table.column("age").unwrap() {
            assert!((18.0..80.0).contains(&age));
            assert_eq!(age, age.trunc());
        }
        for &ratio in table.column("alt_ast_ratio").unwrap() {
            assert!((0.5..3.0).contains(&ratio));
        }
        for &level in table.column("activity_level").unwrap() {
            assert!(level == 0.0 || level == 1.0 || level == 2.0);
        }
    }

    #[test]
    fn test_cohort_both_classes_present() {
        let table = generate_cohort(&CohortConfig::default()).unwrap();
        let rate = table.positive_rate();
        assert!(rate > 0.1 && rate < 0.9, "positive rate {rate}");
    }

    #[test]
    fn test_cohort_noise_validation() {
        let config = CohortConfig {
            noise_std: -0.1,
            ..Default::default()
        };
        assert!(generate_cohort(&config).is_err());
    }

    #[test]
    fn test_extended_percentile_rate() {
        let table = generate_extended(&ExtendedScreeningConfig::default()).unwrap();
        let rate = table.positive_rate();
        // Top 35% of scores are positive by construction.
        assert!((rate - 0.35).abs() < 0.02, "positive rate {rate}");
    }

    #[test]
    fn test_extended_deterministic() {
        let a = generate_extended(&ExtendedScreeningConfig::default()).unwrap();
        let b = generate_extended(&ExtendedScreeningConfig::default()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_extended_shares_cohort_schema() {
        let extended = generate_extended(&ExtendedScreeningConfig::default()).unwrap();
        let cohort = generate_cohort(&CohortConfig {
            samples: 10,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(extended.feature_names(), cohort.feature_names());
    }
}
