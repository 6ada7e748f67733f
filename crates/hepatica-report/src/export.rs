//! Export functionality for assessments and evaluation results.
//!
//! Provides CSV and JSON export for risk assessments, influence weights,
//! and model evaluation summaries.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

use crate::assessment::{FeatureInfluence, RiskAssessment};

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }
}

/// Evaluation results of one offline training run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EvaluationExport {
    /// Model name.
    pub model_name: String,

    /// Number of training rows.
    pub train_rows: usize,

    /// Number of held-out test rows.
    pub test_rows: usize,

    /// Test accuracy.
    pub accuracy: f64,

    /// Test ROC-AUC.
    pub roc_auc: f64,
}

/// Flattened assessment field for CSV export.
#[derive(Debug, Serialize, Deserialize)]
struct AssessmentFlat {
    field: String,
    value: String,
}

impl RiskAssessment {
    fn to_flat_records(&self) -> Vec<AssessmentFlat> {
        let mut records = vec![
            AssessmentFlat {
                field: "generated_at".to_string(),
                value: self.generated_at.to_rfc3339(),
            },
            AssessmentFlat {
                field: "probability".to_string(),
                value: self.probability.to_string(),
            },
            AssessmentFlat {
                field: "risk_percent".to_string(),
                value: self.risk_percent.to_string(),
            },
            AssessmentFlat {
                field: "band".to_string(),
                value: self.band.to_string(),
            },
        ];

        if let Some(bmi) = self.bmi {
            records.push(AssessmentFlat {
                field: "bmi".to_string(),
                value: bmi.to_string(),
            });
        }

        for influence in &self.influences {
            records.push(AssessmentFlat {
                field: format!("influence_{}", influence.feature),
                value: influence.weight.to_string(),
            });
        }

        records
    }
}

/// Trait for exporting data in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        let content = self.export_to_string(format)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

fn csv_from_records<S: Serialize>(records: &[S]) -> Result<String, ExportError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for record in records {
        wtr.serialize(record)?;
    }
    let data = String::from_utf8(wtr.into_inner().map_err(|e| e.into_error())?)
        .expect("CSV output is valid UTF-8");
    Ok(data)
}

impl Exporter for RiskAssessment {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => csv_from_records(&self.to_flat_records()),
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl Exporter for Vec<FeatureInfluence> {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => csv_from_records(self),
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl Exporter for EvaluationExport {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => csv_from_records(std::slice::from_ref(self)),
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}
