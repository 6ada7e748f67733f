//! Random forest classifier.
//!
//! Bootstrapped CART trees with per-node feature subsampling. The class
//! probability of a record is the mean of the per-tree leaf probabilities,
//! and feature importances are the accumulated impurity decreases,
//! normalized to sum to 1.

use ndarray::{Array1, ArrayView2};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::pipeline::align_named_features;
use crate::tree::{DecisionTree, TreeParams};

/// Per-node feature subsampling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaxFeatures {
    /// Consider the square root of the feature count at each split.
    Sqrt,

    /// Consider every feature at each split.
    All,

    /// Consider a fixed number of features at each split.
    Count(usize),
}

impl MaxFeatures {
    fn resolve(&self, n_features: usize) -> usize {
        match *self {
            Self::Sqrt => ((n_features as f64).sqrt().round() as usize).clamp(1, n_features),
            Self::All => n_features,
            Self::Count(count) => count.clamp(1, n_features),
        }
    }
}

/// Random forest hyperparameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ForestConfig {
    /// Number of trees (default: 100).
    pub trees: usize,

    /// Maximum tree depth; `None` grows until pure (default: `None`).
    pub max_depth: Option<usize>,

    /// Minimum rows required to attempt a split (default: 2).
    pub min_samples_split: usize,

    /// Per-node feature subsampling (default: square root).
    pub max_features: MaxFeatures,

    /// Random seed for bootstrapping and feature draws (default: 42).
    pub seed: u64,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            trees: 100,
            max_depth: None,
            min_samples_split: 2,
            max_features: MaxFeatures::Sqrt,
            seed: 42,
        }
    }
}

impl ForestConfig {
    fn validate(&self) -> Result<()> {
        if self.trees == 0 {
            return Err(ModelError::InvalidConfig(
                "trees must be positive".to_string(),
            ));
        }
        if self.min_samples_split < 2 {
            return Err(ModelError::InvalidConfig(format!(
                "min_samples_split must be at least 2, got {}",
                self.min_samples_split
            )));
        }
        Ok(())
    }
}

/// A fitted random forest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    feature_names: Vec<String>,
    trees: Vec<DecisionTree>,
    importances: Vec<f64>,
}

impl RandomForest {
    /// Fit the forest on raw feature values.
    ///
    /// # Errors
    ///
    /// Returns an error for empty data, mismatched name or label counts, or
    /// an invalid configuration.
    pub fn fit(
        feature_names: Vec<String>,
        x: ArrayView2<'_, f64>,
        y: &[u8],
        config: &ForestConfig,
    ) -> Result<Self> {
        config.validate()?;

        let n = x.nrows();
        if n == 0 {
            return Err(ModelError::EmptyDataset);
        }
        if feature_names.len() != x.ncols() {
            return Err(ModelError::DimensionMismatch {
                expected: x.ncols(),
                actual: feature_names.len(),
            });
        }
        if y.len() != n {
            return Err(ModelError::DimensionMismatch {
                expected: n,
                actual: y.len(),
            });
        }

        let params = TreeParams {
            max_depth: config.max_depth,
            min_samples_split: config.min_samples_split,
            candidate_features: config.max_features.resolve(x.ncols()),
        };

        let mut trees = Vec::with_capacity(config.trees);
        let mut importances = vec![0.0; x.ncols()];

        for tree_index in 0..config.trees {
            // One RNG per tree, derived from the forest seed, so a fit is
            // reproducible regardless of how trees are later inspected.
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(tree_index as u64));

            let bootstrap: Vec<usize> = (0..n).map(|_| rng.gen_range(0..n)).collect();
            trees.push(DecisionTree::fit(
                x,
                y,
                bootstrap,
                &params,
                &mut rng,
                &mut importances,
                n,
            ));
        }

        let l1: f64 = importances.iter().sum();
        if l1 > 0.0 {
            for value in &mut importances {
                *value /= l1;
            }
        }

        Ok(Self {
            feature_names,
            trees,
            importances,
        })
    }

    /// Feature names recorded at fit time, in training column order.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Number of trees in the forest.
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    /// Impurity-decrease feature importances, normalized to sum to 1.
    pub fn feature_importances(&self) -> Vec<(String, f64)> {
        self.feature_names
            .iter()
            .cloned()
            .zip(self.importances.iter().copied())
            .collect()
    }

    /// Predicted positive-class probability for one row of raw values.
    ///
    /// # Errors
    ///
    /// Returns an error if the value count differs from the fitted data.
    pub fn predict_proba_row(&self, features: &[f64]) -> Result<f64> {
        if features.len() != self.feature_names.len() {
            return Err(ModelError::DimensionMismatch {
                expected: self.feature_names.len(),
                actual: features.len(),
            });
        }
        let total: f64 = self
            .trees
            .iter()
            .map(|tree| tree.predict_row(features))
            .sum();
        Ok(total / self.trees.len() as f64)
    }

    /// Predicted probabilities for a raw feature matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if the column count differs from the fitted data.
    pub fn predict_proba(&self, x: ArrayView2<'_, f64>) -> Result<Array1<f64>> {
        let mut out = Array1::zeros(x.nrows());
        for (i, row) in x.outer_iter().enumerate() {
            let values: Vec<f64> = row.iter().copied().collect();
            out[i] = self.predict_proba_row(&values)?;
        }
        Ok(out)
    }

    /// Predicted class labels at the 0.5 threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if the column count differs from the fitted data.
    pub fn predict(&self, x: ArrayView2<'_, f64>) -> Result<Vec<u8>> {
        Ok(self
            .predict_proba(x)?
            .iter()
            .map(|&p| u8::from(p >= 0.5))
            .collect())
    }

    /// Predicted probability for one named record.
    ///
    /// The names must match the training column order exactly.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::FeatureMismatch`] on any name or order
    /// difference.
    pub fn predict_proba_named(&self, features: &[(String, f64)]) -> Result<f64> {
        let values = align_named_features(&self.feature_names, features)?;
        self.predict_proba_row(&values)
    }
}
