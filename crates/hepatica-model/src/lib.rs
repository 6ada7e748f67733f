#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/hepatica-dev/hepatica/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod forest;
pub mod logistic;
pub mod metrics;
pub mod persist;
pub mod pipeline;
pub mod scaler;
pub mod tree;

pub use error::{ModelError, Result};
pub use forest::{ForestConfig, MaxFeatures, RandomForest};
pub use logistic::{LogisticConfig, LogisticRegression};
pub use persist::{ArtifactMetadata, ModelArtifact, PersistError, SavedModel};
pub use pipeline::ScreeningPipeline;
pub use scaler::StandardScaler;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
