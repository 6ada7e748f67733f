//! Per-column feature standardization.

use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Standardizes each feature column to zero mean and unit variance.
///
/// Uses the population standard deviation. Zero-variance columns transform
/// to 0 rather than dividing by zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    means: Vec<f64>,
    stds: Vec<f64>,
}

impl StandardScaler {
    /// Fit column means and standard deviations.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EmptyDataset`] for a matrix with no rows.
    pub fn fit(x: ArrayView2<'_, f64>) -> Result<Self> {
        let n = x.nrows();
        if n == 0 {
            return Err(ModelError::EmptyDataset);
        }

        let mut means = Vec::with_capacity(x.ncols());
        let mut stds = Vec::with_capacity(x.ncols());
        for column in x.columns() {
            let mean = column.sum() / n as f64;
            let var = column.iter().map(|&v| (v - mean) * (v - mean)).sum::<f64>() / n as f64;
            means.push(mean);
            stds.push(var.sqrt());
        }

        Ok(Self { means, stds })
    }

    /// Number of columns the scaler was fitted on.
    pub fn n_features(&self) -> usize {
        self.means.len()
    }

    /// Standardize a feature matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if the column count differs from the fitted data.
    pub fn transform(&self, x: ArrayView2<'_, f64>) -> Result<Array2<f64>> {
        if x.ncols() != self.n_features() {
            return Err(ModelError::DimensionMismatch {
                expected: self.n_features(),
                actual: x.ncols(),
            });
        }

        let mut out = x.to_owned();
        for (j, mut column) in out.columns_mut().into_iter().enumerate() {
            let mean = self.means[j];
            let std = self.stds[j];
            for value in column.iter_mut() {
                *value = if std == 0.0 { 0.0 } else { (*value - mean) / std };
            }
        }
        Ok(out)
    }

    /// Standardize a single row of feature values.
    ///
    /// # Errors
    ///
    /// Returns an error if the value count differs from the fitted data.
    pub fn transform_row(&self, row: &[f64]) -> Result<Vec<f64>> {
        if row.len() != self.n_features() {
            return Err(ModelError::DimensionMismatch {
                expected: self.n_features(),
                actual: row.len(),
            });
        }

        Ok(row
            .iter()
            .enumerate()
            .map(|(j, &v)| {
                let std = self.stds[j];
                if std == 0.0 { 0.0 } else { (v - self.means[j]) / std }
            })
            .collect())
    }

    /// Fitted column means.
    pub fn means(&self) -> &[f64] {
        &self.means
    }

    /// Fitted column standard deviations.
    pub fn stds(&self) -> &[f64] {
        &self.stds
    }
}
