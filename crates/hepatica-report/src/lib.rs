#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/hepatica-dev/hepatica/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod assessment;
pub mod band;
pub mod chart;
pub mod export;
pub mod summary;

pub use assessment::{FeatureInfluence, ReportError, RiskAssessment};
pub use band::RiskBand;
pub use chart::{influence_chart_ascii, influence_chart_svg};
pub use export::{EvaluationExport, ExportError, ExportFormat, Exporter};
pub use summary::{DISCLAIMER, band_banner, preventive_guidance};
