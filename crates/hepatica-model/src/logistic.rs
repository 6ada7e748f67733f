//! Binary logistic regression.
//!
//! Fitted with full-batch gradient descent on standardized features:
//! - Loss: `-y*log(σ(z)) - (1-y)*log(1-σ(z))` with `z = w.x + b`
//! - Gradient: `σ(z) - y`
//!
//! The defaults (learning rate 0.1, 1000 iterations) are tuned for the small
//! standardized screening tables this crate trains on; there is no learning
//! rate schedule.

use ndarray::{Array1, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Logistic regression hyperparameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LogisticConfig {
    /// Gradient descent step size (default: 0.1).
    pub learning_rate: f64,

    /// Maximum number of full-batch iterations (default: 1000).
    pub max_iter: usize,

    /// Convergence tolerance on the gradient's infinity norm
    /// (default: 1e-6).
    pub tol: f64,

    /// L2 penalty strength (default: 0, no regularization).
    pub l2: f64,
}

impl Default for LogisticConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            max_iter: 1000,
            tol: 1e-6,
            l2: 0.0,
        }
    }
}

impl LogisticConfig {
    fn validate(&self) -> Result<()> {
        if self.learning_rate <= 0.0 {
            return Err(ModelError::InvalidConfig(format!(
                "learning_rate must be positive, got {}",
                self.learning_rate
            )));
        }
        if self.max_iter == 0 {
            return Err(ModelError::InvalidConfig(
                "max_iter must be positive".to_string(),
            ));
        }
        if self.l2 < 0.0 {
            return Err(ModelError::InvalidConfig(format!(
                "l2 must be non-negative, got {}",
                self.l2
            )));
        }
        Ok(())
    }
}

/// A fitted binary logistic regression model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    coefficients: Vec<f64>,
    intercept: f64,
    n_iter: usize,
    converged: bool,
}

impl LogisticRegression {
    /// Fit by full-batch gradient descent.
    ///
    /// `y` must contain both classes; features are expected to be
    /// standardized by the caller.
    ///
    /// # Errors
    ///
    /// Returns an error for empty data, mismatched label length,
    /// single-class labels, or an invalid configuration.
    pub fn fit(x: ArrayView2<'_, f64>, y: &[u8], config: &LogisticConfig) -> Result<Self> {
        config.validate()?;

        let n = x.nrows();
        let p = x.ncols();
        if n == 0 {
            return Err(ModelError::EmptyDataset);
        }
        if y.len() != n {
            return Err(ModelError::DimensionMismatch {
                expected: n,
                actual: y.len(),
            });
        }
        if y.iter().all(|&l| l == y[0]) {
            return Err(ModelError::SingleClass);
        }

        let targets = Array1::from_iter(y.iter().map(|&l| f64::from(l)));
        let mut weights = Array1::<f64>::zeros(p);
        let mut intercept = 0.0;
        let mut n_iter = 0;
        let mut converged = false;

        for _ in 0..config.max_iter {
            n_iter += 1;

            let logits = x.dot(&weights) + intercept;
            let residuals = logits.mapv(sigmoid) - &targets;

            let mut grad_w = x.t().dot(&residuals) / n as f64;
            if config.l2 > 0.0 {
                grad_w.zip_mut_with(&weights, |g, &w| *g += config.l2 * w);
            }
            let grad_b = residuals.sum() / n as f64;

            let grad_norm = grad_w
                .iter()
                .map(|g| g.abs())
                .fold(grad_b.abs(), f64::max);

            weights.zip_mut_with(&grad_w, |w, &g| *w -= config.learning_rate * g);
            intercept -= config.learning_rate * grad_b;

            if grad_norm < config.tol {
                converged = true;
                break;
            }
        }

        Ok(Self {
            coefficients: weights.to_vec(),
            intercept,
            n_iter,
            converged,
        })
    }

    /// Fitted coefficient vector, one entry per feature column.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Fitted intercept.
    pub const fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Iterations actually run.
    pub const fn n_iter(&self) -> usize {
        self.n_iter
    }

    /// Whether the gradient dropped below tolerance before `max_iter`.
    pub const fn converged(&self) -> bool {
        self.converged
    }

    /// Predicted positive-class probability for one (standardized) row.
    ///
    /// # Errors
    ///
    /// Returns an error if the value count differs from the fitted data.
    pub fn predict_proba_row(&self, row: &[f64]) -> Result<f64> {
        if row.len() != self.coefficients.len() {
            return Err(ModelError::DimensionMismatch {
                expected: self.coefficients.len(),
                actual: row.len(),
            });
        }
        let z = self
            .coefficients
            .iter()
            .zip(row.iter())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept;
        Ok(sigmoid(z))
    }

    /// Predicted positive-class probabilities for a (standardized) matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if the column count differs from the fitted data.
    pub fn predict_proba(&self, x: ArrayView2<'_, f64>) -> Result<Array1<f64>> {
        if x.ncols() != self.coefficients.len() {
            return Err(ModelError::DimensionMismatch {
                expected: self.coefficients.len(),
                actual: x.ncols(),
            });
        }
        let weights = ArrayView1::from(&self.coefficients[..]);
        let logits = x.dot(&weights) + self.intercept;
        Ok(logits.mapv(sigmoid))
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn separable_data() -> (ndarray::Array2<f64>, Vec<u8>) {
        // One informative standardized-ish feature, one noise column.
        let x = array![
            [-2.0, 0.3],
            [-1.5, -0.1],
            [-1.0, 0.2],
            [-0.5, -0.3],
            [0.5, 0.1],
            [1.0, -0.2],
            [1.5, 0.3],
            [2.0, 0.0],
        ];
        let y = vec![0, 0, 0, 0, 1, 1, 1, 1];
        (x, y)
    }

    #[test]
    fn test_learns_separable_signal() {
        let (x, y) = separable_data();
        let model = LogisticRegression::fit(x.view(), &y, &LogisticConfig::default()).unwrap();

        // The informative feature dominates and points the right way.
        assert!(model.coefficients()[0] > 0.5);
        assert!(model.coefficients()[0].abs() > model.coefficients()[1].abs());

        let probs = model.predict_proba(x.view()).unwrap();
        for (prob, &label) in probs.iter().zip(&y) {
            if label == 1 {
                assert!(*prob > 0.5, "positive row scored {prob}");
            } else {
                assert!(*prob < 0.5, "negative row scored {prob}");
            }
        }
    }

    #[test]
    fn test_fit_is_deterministic() {
        let (x, y) = separable_data();
        let a = LogisticRegression::fit(x.view(), &y, &LogisticConfig::default()).unwrap();
        let b = LogisticRegression::fit(x.view(), &y, &LogisticConfig::default()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_class_rejected() {
        let x = array![[0.0], [1.0]];
        let result = LogisticRegression::fit(x.view(), &[1, 1], &LogisticConfig::default());
        assert!(matches!(result, Err(ModelError::SingleClass)));
    }

    #[test]
    fn test_label_length_checked() {
        let x = array![[0.0], [1.0]];
        let result = LogisticRegression::fit(x.view(), &[0], &LogisticConfig::default());
        assert!(matches!(result, Err(ModelError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let x = array![[0.0], [1.0]];
        let config = LogisticConfig {
            learning_rate: 0.0,
            ..Default::default()
        };
        assert!(LogisticRegression::fit(x.view(), &[0, 1], &config).is_err());
    }

    #[test]
    fn test_row_and_batch_agree() {
        let (x, y) = separable_data();
        let model = LogisticRegression::fit(x.view(), &y, &LogisticConfig::default()).unwrap();
        let batch = model.predict_proba(x.view()).unwrap();
        let single = model.predict_proba_row(&[-2.0, 0.3]).unwrap();
        assert!((batch[0] - single).abs() < 1e-12);
    }

    #[test]
    fn test_l2_shrinks_coefficients() {
        let (x, y) = separable_data();
        let plain = LogisticRegression::fit(x.view(), &y, &LogisticConfig::default()).unwrap();
        let ridge = LogisticRegression::fit(
            x.view(),
            &y,
            &LogisticConfig {
                l2: 1.0,
                ..Default::default()
            },
        )
        .unwrap();
        assert!(ridge.coefficients()[0].abs() < plain.coefficients()[0].abs());
    }
}
