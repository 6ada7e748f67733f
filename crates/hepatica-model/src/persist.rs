//! Model persistence.
//!
//! Fitted models are wrapped in a [`ModelArtifact`] carrying training
//! metadata and serialized to pretty JSON, so a saved model can be inspected
//! and reloaded without retraining.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

use crate::error::Result as ModelResult;
use crate::forest::RandomForest;
use crate::pipeline::ScreeningPipeline;

/// Errors that can occur while saving or loading model artifacts.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Metadata recorded alongside a serialized model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    /// Human-readable model name.
    pub name: String,

    /// Crate version that produced the artifact.
    pub version: String,

    /// Training timestamp.
    pub trained_at: DateTime<Utc>,

    /// Number of training rows.
    pub samples: usize,

    /// Feature names in training column order.
    pub feature_names: Vec<String>,
}

/// A serializable fitted model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SavedModel {
    /// Scaler + logistic regression pipeline.
    Logistic(ScreeningPipeline),

    /// Random forest.
    Forest(RandomForest),
}

impl SavedModel {
    /// Feature names recorded at fit time, in training column order.
    pub fn feature_names(&self) -> &[String] {
        match self {
            Self::Logistic(pipeline) => pipeline.feature_names(),
            Self::Forest(forest) => forest.feature_names(),
        }
    }

    /// Predicted probability for one named record.
    ///
    /// # Errors
    ///
    /// Returns an error on any feature name or order difference.
    pub fn predict_proba_named(&self, features: &[(String, f64)]) -> ModelResult<f64> {
        match self {
            Self::Logistic(pipeline) => pipeline.predict_proba_named(features),
            Self::Forest(forest) => forest.predict_proba_named(features),
        }
    }

    /// Named influence weights for the explanation chart.
    ///
    /// L1-normalized coefficients for the logistic pipeline, impurity
    /// importances for the forest.
    pub fn influences(&self) -> Vec<(String, f64)> {
        match self {
            Self::Logistic(pipeline) => pipeline.normalized_coefficients(),
            Self::Forest(forest) => forest.feature_importances(),
        }
    }
}

/// A fitted model plus its training metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Training metadata.
    pub metadata: ArtifactMetadata,

    /// The fitted model.
    pub model: SavedModel,
}

impl ModelArtifact {
    /// Wrap a fitted model with metadata stamped at the current time.
    pub fn new(name: impl Into<String>, samples: usize, model: SavedModel) -> Self {
        let metadata = ArtifactMetadata {
            name: name.into(),
            version: crate::VERSION.to_string(),
            trained_at: Utc::now(),
            samples,
            feature_names: model.feature_names().to_vec(),
        };
        Self { metadata, model }
    }

    /// Serialize to pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, PersistError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the artifact to a file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    pub fn save(&self, path: &Path) -> Result<(), PersistError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let mut file = File::create(path)?;
        file.write_all(self.to_json()?.as_bytes())?;
        Ok(())
    }

    /// Load an artifact from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, PersistError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
