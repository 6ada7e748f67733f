//! Standard screening dataset generator.
//!
//! Fabricates the six-column table behind the quick screening form. The risk
//! formula is semi-realistic at best: it exists to give the logistic pipeline
//! a learnable signal, not to model disease.

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

/// Column names of the standard screening dataset, in schema order.
pub(crate) const STANDARD_COLUMNS: [&str; 6] = [
    "bmi",
    "alcohol",
    "diabetes",
    "cholesterol",
    "exercise",
    "fatigue",
];

/// Risk-formula weights, one per standard column.
const STANDARD_WEIGHTS: [f64; 6] = [0.04, 0.8, 1.0, 0.9, 0.6, 0.7];

/// Centering intercept for the risk formula. Without it the weighted sum is
/// at least 0.72 for every possible row and the sigmoid never drops below
/// the cutoff, leaving a single-class table.
const STANDARD_BASELINE: f64 = -2.7;

/// Configuration for the standard screening generator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScreeningConfig {
    /// Number of rows to generate (default: 500).
    pub samples: usize,

    /// Random seed (default: 42).
    pub seed: u64,

    /// Fixed cutoff applied to the squashed risk score (default: 0.6).
    pub label_cutoff: f64,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            samples: 500,
            seed: 42,
            label_cutoff: 0.6,
        }
    }
}

/// Generate the standard six-column screening dataset.
///
/// Column distributions:
/// - `bmi`: Normal(27, 5) clamped to [18, 45]
/// - `alcohol`: {0, 1, 2} with p = [0.4, 0.4, 0.2]
/// - `diabetes`: {0, 1} with p = [0.7, 0.3]
/// - `cholesterol`: {0, 1} with p = [0.6, 0.4]
/// - `exercise`: {0, 1, 2} with p = [0.4, 0.35, 0.25]
/// - `fatigue`: {0, 1} with p = [0.6, 0.4]
///
/// The label is `sigmoid(w . x + baseline) > label_cutoff`.
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub fn generate_standard(config: &ScreeningConfig) -> Result<FeatureTable> {
    if config.samples == 0 {
        return Err(DataError::InvalidConfig(
            "samples must be positive".to_string(),
        ));
    }

    let n = config.samples;
    let mut rng = StdRng::seed_from_u64(config.seed);

    let bmi_dist = Normal::new(27.0, 5.0)?;
    let alcohol_dist = WeightedIndex::new([0.4, 0.4, 0.2])?;
    let diabetes_dist = WeightedIndex::new([0.7, 0.3])?;
    let cholesterol_dist = WeightedIndex::new([0.6, 0.4])?;
    let exercise_dist = WeightedIndex::new([0.4, 0.35, 0.25])?;
    let fatigue_dist = WeightedIndex::new([0.6, 0.4])?;

    // Columns are drawn one at a time so the stream of draws (and therefore
    // the table) is reproducible for a given seed.
    let bmi: Vec<f64> = (0..n)
        .map(|_| rng.sample(bmi_dist).clamp(18.0, 45.0))
        .collect();
    let alcohol: Vec<f64> = (0..n).map(|_| rng.sample(&alcohol_dist) as f64).collect();
    let diabetes: Vec<f64> = (0..n).map(|_| rng.sample(&diabetes_dist) as f64).collect();
    let cholesterol: Vec<f64> = (0..n)
        .map(|_| rng.sample(&cholesterol_dist) as f64)
        .collect();
    let exercise: Vec<f64> = (0..n).map(|_| rng.sample(&exercise_dist) as f64).collect();
    let fatigue: Vec<f64> = (0..n).map(|_| rng.sample(&fatigue_dist) as f64).collect();

    let columns = [bmi, alcohol, diabetes, cholesterol, exercise, fatigue];
    let features = Array2::from_shape_fn((n, STANDARD_COLUMNS.len()), |(i, j)| columns[j][i]);

    let scores: Vec<f64> = features
        .outer_iter()
        .map(|row| {
            sigmoid(
                row.iter()
                    .zip(STANDARD_WEIGHTS.iter())
                    .map(|(x, w)| w * x)
                    .sum::<f64>()
                    + STANDARD_BASELINE,
            )
        })
        .collect();
    let labels = LabelRule::Cutoff(config.label_cutoff).binarize(&scores)?;

    Ok(FeatureTable::new(
        STANDARD_COLUMNS.iter().map(|s| s.to_string()).collect(),
        features,
        labels,
    )?
    .with_label_name("fatty_liver"))
}
