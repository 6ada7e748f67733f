//! Screening profiles, feature registry, and patient records.
//!
//! A screening profile names a fixed, ordered feature schema. The standard
//! profile carries the six columns of the quick screening form; the extended
//! profile carries the ten columns shared with the offline cohort dataset.
//! Feature order is load-bearing: model fitting records it and single-record
//! inference is validated against it.

pub mod features;
pub mod inputs;
pub mod patient;

use thiserror::Error;

pub use features::{FeatureInfo, FeatureKind};
pub use patient::PatientRecord;

/// Errors raised while preparing screening inputs.
#[derive(Debug, Error)]
pub enum ScreeningError {
    /// A field required by the selected profile was not provided.
    #[error("missing field `{field}` required by the {profile} profile")]
    MissingField {
        /// Profile that required the field.
        profile: ScreeningProfile,
        /// Name of the missing field.
        field: &'static str,
    },
}

/// Named feature schemas for the screening front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ScreeningProfile {
    /// Quick six-feature screen (BMI plus lifestyle flags).
    Standard,

    /// Ten-feature screen aligned with the offline cohort dataset.
    Extended,
}

impl ScreeningProfile {
    /// Returns all screening profiles.
    pub fn all() -> Vec<Self> {
        vec![Self::Standard, Self::Extended]
    }

    /// Returns the profile name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Extended => "extended",
        }
    }

    /// Feature metadata for this profile, in schema order.
    pub fn features(&self) -> Vec<FeatureInfo> {
        match self {
            Self::Standard => features::standard_features(),
            Self::Extended => features::extended_features(),
        }
    }

    /// Feature column names for this profile, in schema order.
    pub fn feature_names(&self) -> Vec<&'static str> {
        self.features().into_iter().map(|f| f.name).collect()
    }
}

impl std::fmt::Display for ScreeningProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_names() {
        assert_eq!(ScreeningProfile::Standard.name(), "standard");
        assert_eq!(ScreeningProfile::Extended.name(), "extended");
    }

    #[test]
    fn test_profile_feature_counts() {
        assert_eq!(ScreeningProfile::Standard.feature_names().len(), 6);
        assert_eq!(ScreeningProfile::Extended.feature_names().len(), 10);
    }

    #[test]
    fn test_profiles_match_generator_schemas() {
        use hepatica_data::{
            ExtendedScreeningConfig, ScreeningConfig, generate_extended, generate_standard,
        };

        let standard = generate_standard(&ScreeningConfig {
            samples: 20,
            ..Default::default()
        })
        .unwrap();
        let names: Vec<&str> = standard.feature_names().iter().map(String::as_str).collect();
        assert_eq!(names, ScreeningProfile::Standard.feature_names());

        let extended = generate_extended(&ExtendedScreeningConfig {
            samples: 20,
            ..Default::default()
        })
        .unwrap();
        let names: Vec<&str> = extended.feature_names().iter().map(String::as_str).collect();
        assert_eq!(names, ScreeningProfile::Extended.feature_names());
    }

    #[test]
    fn test_feature_order_is_stable() {
        // Inference input is aligned by this order; it must not drift.
        assert_eq!(
            ScreeningProfile::Standard.feature_names(),
            vec!["bmi", "alcohol", "diabetes", "cholesterol", "exercise", "fatigue"]
        );
        assert_eq!(
            ScreeningProfile::Extended.feature_names(),
            vec![
                "age",
                "bmi",
                "waist_cm",
                "diabetes",
                "high_cholesterol",
                "alcohol_use",
                "activity_level",
                "fatigue",
                "right_side_pain",
                "alt_ast_ratio"
            ]
        );
    }
}
