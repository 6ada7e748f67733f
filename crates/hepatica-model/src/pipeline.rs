//! The screening pipeline: standardization followed by logistic regression.
//!
//! Mirrors the scaler-plus-classifier pipeline of the original screening
//! form. The pipeline records the ordered feature names it was fitted with;
//! named single-record inference is validated against that order.

use ndarray::{Array1, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::logistic::{LogisticConfig, LogisticRegression};
use crate::scaler::StandardScaler;

/// A fitted scaler + logistic regression pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningPipeline {
    feature_names: Vec<String>,
    scaler: StandardScaler,
    model: LogisticRegression,
}

impl ScreeningPipeline {
    /// Fit the scaler and the logistic model on raw (unstandardized)
    /// features.
    ///
    /// # Errors
    ///
    /// Returns an error if the feature-name count disagrees with the matrix,
    /// or if scaling or fitting fails.
    pub fn fit(
        feature_names: Vec<String>,
        x: ArrayView2<'_, f64>,
        y: &[u8],
        config: &LogisticConfig,
    ) -> Result<Self> {
        if feature_names.len() != x.ncols() {
            return Err(ModelError::DimensionMismatch {
                expected: x.ncols(),
                actual: feature_names.len(),
            });
        }

        let scaler = StandardScaler::fit(x)?;
        let standardized = scaler.transform(x)?;
        let model = LogisticRegression::fit(standardized.view(), y, config)?;

        Ok(Self {
            feature_names,
            scaler,
            model,
        })
    }

    /// Feature names recorded at fit time, in training column order.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// The fitted logistic model.
    pub const fn model(&self) -> &LogisticRegression {
        &self.model
    }

    /// Predicted positive-class probabilities for a raw feature matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if the column count differs from the fitted data.
    pub fn predict_proba(&self, x: ArrayView2<'_, f64>) -> Result<Array1<f64>> {
        let standardized = self.scaler.transform(x)?;
        self.model.predict_proba(standardized.view())
    }

    /// Predicted probability for one named record.
    ///
    /// The names must match the training column order exactly; a reordered
    /// or renamed input is rejected rather than silently mis-scored.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::FeatureMismatch`] on any name or order
    /// difference.
    pub fn predict_proba_named(&self, features: &[(String, f64)]) -> Result<f64> {
        let values = align_named_features(&self.feature_names, features)?;
        let standardized = self.scaler.transform_row(&values)?;
        self.model.predict_proba_row(&standardized)
    }

    /// Coefficients normalized by the L1 norm, paired with feature names.
    ///
    /// The absolute values of the returned weights sum to 1 (unless every
    /// coefficient is exactly zero); signs are preserved so protective
    /// features show as negative bars on the explanation chart.
    pub fn normalized_coefficients(&self) -> Vec<(String, f64)> {
        let coefficients = self.model.coefficients();
        let l1: f64 = coefficients.iter().map(|c| c.abs()).sum();
        self.feature_names
            .iter()
            .zip(coefficients)
            .map(|(name, &c)| {
                let weight = if l1 == 0.0 { 0.0 } else { c / l1 };
                (name.clone(), weight)
            })
            .collect()
    }
}

/// Check a named feature vector against the training order and extract the
/// values.
///
/// # Errors
///
/// Returns [`ModelError::FeatureMismatch`] if the names differ from
/// `expected` in any position.
pub(crate) fn align_named_features(
    expected: &[String],
    features: &[(String, f64)],
) -> Result<Vec<f64>> {
    let matches = features.len() == expected.len()
        && features
            .iter()
            .zip(expected)
            .all(|((name, _), expected_name)| name == expected_name);

    if !matches {
        return Err(ModelError::FeatureMismatch {
            expected: expected.to_vec(),
            found: features.iter().map(|(name, _)| name.clone()).collect(),
        });
    }

    Ok(features.iter().map(|(_, value)| *value).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn fitted_pipeline() -> ScreeningPipeline {
        let x = array![
            [20.0, 0.0],
            [22.0, 0.0],
            [24.0, 1.0],
            [30.0, 1.0],
            [33.0, 2.0],
            [36.0, 2.0],
            [40.0, 2.0],
            [42.0, 1.0],
        ];
        let y = vec![0, 0, 0, 0, 1, 1, 1, 1];
        ScreeningPipeline::fit(
            vec!["bmi".to_string(), "alcohol".to_string()],
            x.view(),
            &y,
            &LogisticConfig::default(),
        )
        .unwrap()
    }

    fn named(pairs: &[(&str, f64)]) -> Vec<(String, f64)> {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect()
    }

    #[test]
    fn test_named_prediction_in_training_order() {
        let pipeline = fitted_pipeline();
        let low = pipeline
            .predict_proba_named(&named(&[("bmi", 20.0), ("alcohol", 0.0)]))
            .unwrap();
        let high = pipeline
            .predict_proba_named(&named(&[("bmi", 41.0), ("alcohol", 2.0)]))
            .unwrap();
        assert!(low < 0.5, "low-risk record scored {low}");
        assert!(high > 0.5, "high-risk record scored {high}");
    }

    #[test]
    fn test_reordered_features_rejected() {
        let pipeline = fitted_pipeline();
        let result =
            pipeline.predict_proba_named(&named(&[("alcohol", 0.0), ("bmi", 20.0)]));
        assert!(matches!(result, Err(ModelError::FeatureMismatch { .. })));
    }

    #[test]
    fn test_renamed_feature_rejected() {
        let pipeline = fitted_pipeline();
        let result =
            pipeline.predict_proba_named(&named(&[("bmi", 20.0), ("alkohol", 0.0)]));
        assert!(matches!(result, Err(ModelError::FeatureMismatch { .. })));
    }

    #[test]
    fn test_missing_feature_rejected() {
        let pipeline = fitted_pipeline();
        let result = pipeline.predict_proba_named(&named(&[("bmi", 20.0)]));
        assert!(matches!(result, Err(ModelError::FeatureMismatch { .. })));
    }

    #[test]
    fn test_normalized_coefficients_sum_to_one() {
        let pipeline = fitted_pipeline();
        let normalized = pipeline.normalized_coefficients();
        let l1: f64 = normalized.iter().map(|(_, w)| w.abs()).sum();
        assert!((l1 - 1.0).abs() < 1e-12, "L1 norm was {l1}");
        assert_eq!(normalized[0].0, "bmi");
    }

    #[test]
    fn test_name_count_checked_at_fit() {
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        let result = ScreeningPipeline::fit(
            vec!["only_one".to_string()],
            x.view(),
            &[0, 1],
            &LogisticConfig::default(),
        );
        assert!(matches!(result, Err(ModelError::DimensionMismatch { .. })));
    }
}
