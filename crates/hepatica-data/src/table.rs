//! In-memory feature tables.
//!
//! A [`FeatureTable`] holds an ordered feature schema, a row-major feature
//! matrix, and one binary label per row. Column order is part of the model
//! input contract: fitting records it and inference is validated against it.

use ndarray::{Array2, ArrayView1, ArrayView2, Axis};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::error::{DataError, Result};

/// A fixed-schema tabular dataset with binary labels.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureTable {
    feature_names: Vec<String>,
    features: Array2<f64>,
    labels: Vec<u8>,
    label_name: String,
}

impl FeatureTable {
    /// Create a table from its parts.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is empty or the name, matrix, and label
    /// dimensions disagree.
    pub fn new(
        feature_names: Vec<String>,
        features: Array2<f64>,
        labels: Vec<u8>,
    ) -> Result<Self> {
        if features.nrows() == 0 {
            return Err(DataError::EmptyTable);
        }
        if feature_names.len() != features.ncols() {
            return Err(DataError::DimensionMismatch {
                expected: features.ncols(),
                actual: feature_names.len(),
            });
        }
        if labels.len() != features.nrows() {
            return Err(DataError::DimensionMismatch {
                expected: features.nrows(),
                actual: labels.len(),
            });
        }

        Ok(Self {
            feature_names,
            features,
            labels,
            label_name: "risk".to_string(),
        })
    }

    /// Rename the label column used in CSV snapshots.
    #[must_use]
    pub fn with_label_name(mut self, label_name: impl Into<String>) -> Self {
        self.label_name = label_name.into();
        self
    }

    /// Number of rows.
    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    /// Number of feature columns.
    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    /// Feature column names in schema order.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Label column name.
    pub fn label_name(&self) -> &str {
        &self.label_name
    }

    /// Feature matrix view (rows are samples).
    pub fn features(&self) -> ArrayView2<'_, f64> {
        self.features.view()
    }

    /// Binary labels, one per row.
    pub fn labels(&self) -> &[u8] {
        &self.labels
    }

    /// View of one feature column by name.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::UnknownColumn`] if the name is not in the schema.
    pub fn column(&self, name: &str) -> Result<ArrayView1<'_, f64>> {
        let index = self
            .feature_names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| DataError::UnknownColumn(name.to_string()))?;
        Ok(self.features.column(index))
    }

    /// Fraction of rows with a positive label.
    pub fn positive_rate(&self) -> f64 {
        let positives = self.labels.iter().filter(|&&l| l == 1).count();
        positives as f64 / self.labels.len() as f64
    }

    /// Split into train and test partitions with a seeded shuffle.
    ///
    /// `test_fraction` of the rows (at least one, at most all but one) go to
    /// the test partition.
    ///
    /// # Errors
    ///
    /// Returns an error if `test_fraction` is outside (0, 1) or the table is
    /// too small to split.
    pub fn split(&self, test_fraction: f64, seed: u64) -> Result<(Self, Self)> {
        if !(test_fraction > 0.0 && test_fraction < 1.0) {
            return Err(DataError::InvalidConfig(format!(
                "test_fraction must be in (0, 1), got {test_fraction}"
            )));
        }
        let n = self.n_samples();
        if n < 2 {
            return Err(DataError::InvalidConfig(
                "at least 2 rows are required to split".to_string(),
            ));
        }

        let n_test = ((n as f64 * test_fraction).round() as usize).clamp(1, n - 1);

        let mut indices: Vec<usize> = (0..n).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        indices.shuffle(&mut rng);

        let (test_idx, train_idx) = indices.split_at(n_test);
        Ok((self.take_rows(train_idx)?, self.take_rows(test_idx)?))
    }

    fn take_rows(&self, indices: &[usize]) -> Result<Self> {
        let features = self.features.select(Axis(0), indices);
        let labels = indices.iter().map(|&i| self.labels[i]).collect();
        Ok(Self::new(self.feature_names.clone(), features, labels)?
            .with_label_name(self.label_name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn sample_table() -> FeatureTable {
        let features = array![
            [1.0, 10.0],
            [2.0, 20.0],
            [3.0, 30.0],
            [4.0, 40.0],
            [5.0, 50.0],
        ];
        FeatureTable::new(
            vec!["a".to_string(), "b".to_string()],
            features,
            vec![0, 0, 1, 1, 1],
        )
        .unwrap()
    }

    #[test]
    fn test_dimensions() {
        let table = sample_table();
        assert_eq!(table.n_samples(), 5);
        assert_eq!(table.n_features(), 2);
    }

    #[test]
    fn test_rejects_mismatched_labels() {
        let features = array![[1.0], [2.0]];
        let result = FeatureTable::new(vec!["a".to_string()], features, vec![0]);
        assert!(matches!(
            result,
            Err(DataError::DimensionMismatch { expected: 2, actual: 1 })
        ));
    }

    #[test]
    fn test_rejects_empty() {
        let features = Array2::<f64>::zeros((0, 2));
        let result =
            FeatureTable::new(vec!["a".to_string(), "b".to_string()], features, vec![]);
        assert!(matches!(result, Err(DataError::EmptyTable)));
    }

    #[test]
    fn test_column_lookup() {
        let table = sample_table();
        let b = table.column("b").unwrap();
        assert_eq!(b[4], 50.0);
        assert!(table.column("missing").is_err());
    }

    #[test]
    fn test_positive_rate() {
        assert!((sample_table().positive_rate() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_split_sizes() {
        let table = sample_table();
        let (train, test) = table.split(0.2, 7).unwrap();
        assert_eq!(test.n_samples(), 1);
        assert_eq!(train.n_samples(), 4);
        assert_eq!(train.feature_names(), table.feature_names());
    }

    #[test]
    fn test_split_is_deterministic() {
        let table = sample_table();
        let (train_a, test_a) = table.split(0.4, 11).unwrap();
        let (train_b, test_b) = table.split(0.4, 11).unwrap();
        assert_eq!(train_a, train_b);
        assert_eq!(test_a, test_b);
    }

    #[test]
    fn test_split_partitions_all_rows() {
        let table = sample_table();
        let (train, test) = table.split(0.4, 3).unwrap();
        assert_eq!(train.n_samples() + test.n_samples(), table.n_samples());
        let mut values: Vec<f64> = train
            .column("a")
            .unwrap()
            .iter()
            .chain(test.column("a").unwrap().iter())
            .copied()
            .collect();
        values.sort_by(|x, y| x.partial_cmp(y).unwrap());
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_split_rejects_bad_fraction() {
        let table = sample_table();
        assert!(table.split(0.0, 1).is_err());
        assert!(table.split(1.0, 1).is_err());
    }
}
