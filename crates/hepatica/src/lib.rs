#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/hepatica-dev/hepatica/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod screening;
pub mod vitals;

// Re-export main types from sub-crates
pub use hepatica_data as data;
pub use hepatica_model as model;
pub use hepatica_report as report;

// Re-export common screening types
pub use screening::{
    PatientRecord, ScreeningProfile,
    inputs::{ActivityLevel, AlcoholIntake, ExerciseHabit},
};

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
