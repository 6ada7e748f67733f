#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/hepatica-dev/hepatica/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod snapshot;
pub mod synthetic;
pub mod table;

pub use error::{DataError, Result};
pub use synthetic::{
    CohortConfig, ExtendedScreeningConfig, LabelRule, ScreeningConfig, generate_cohort,
    generate_extended, generate_standard,
};
pub use table::FeatureTable;

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
