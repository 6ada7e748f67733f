//! Feature Registry
//!
//! Central registry for the feature columns of each screening profile.
//! Allows metadata lookup by name and drives the `features` subcommand of
//! the CLI.

use super::ScreeningProfile;

/// Value domain of a feature column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureKind {
    /// Continuous value within an inclusive range.
    Continuous {
        /// Lower bound accepted by the input form.
        min: f64,
        /// Upper bound accepted by the input form.
        max: f64,
    },
    /// Binary indicator coded 0/1.
    Binary,
    /// Ordered category coded 0..levels.
    Ordinal {
        /// Number of category levels.
        levels: u8,
    },
}

/// Feature metadata.
#[derive(Debug, Clone)]
pub struct FeatureInfo {
    /// Column name (unique within a profile).
    pub name: &'static str,
    /// Brief description of what the feature measures.
    pub description: &'static str,
    /// Value domain.
    pub kind: FeatureKind,
}

/// Features of the standard six-column screening profile, in schema order.
pub fn standard_features() -> Vec<FeatureInfo> {
    vec![
        FeatureInfo {
            name: "bmi",
            description: "Body Mass Index, computed from height and weight",
            kind: FeatureKind::Continuous { min: 18.0, max: 45.0 },
        },
        FeatureInfo {
            name: "alcohol",
            description: "Alcohol intake: none, occasional, frequent",
            kind: FeatureKind::Ordinal { levels: 3 },
        },
        FeatureInfo {
            name: "diabetes",
            description: "Diagnosed diabetes",
            kind: FeatureKind::Binary,
        },
        FeatureInfo {
            name: "cholesterol",
            description: "High cholesterol",
            kind: FeatureKind::Binary,
        },
        FeatureInfo {
            name: "exercise",
            description: "Physical activity: regular, occasional, none",
            kind: FeatureKind::Ordinal { levels: 3 },
        },
        FeatureInfo {
            name: "fatigue",
            description: "Chronic fatigue",
            kind: FeatureKind::Binary,
        },
    ]
}

/// Features of the extended ten-column profile, in schema order.
///
/// This is the schema shared with the offline cohort dataset used to train
/// the random forest.
pub fn extended_features() -> Vec<FeatureInfo> {
    vec![
        FeatureInfo {
            name: "age",
            description: "Age in years",
            kind: FeatureKind::Continuous { min: 18.0, max: 80.0 },
        },
        FeatureInfo {
            name: "bmi",
            description: "Body Mass Index, computed from height and weight",
            kind: FeatureKind::Continuous { min: 18.0, max: 45.0 },
        },
        FeatureInfo {
            name: "waist_cm",
            description: "Waist circumference in centimeters",
            kind: FeatureKind::Continuous { min: 60.0, max: 150.0 },
        },
        FeatureInfo {
            name: "diabetes",
            description: "Diagnosed diabetes",
            kind: FeatureKind::Binary,
        },
        FeatureInfo {
            name: "high_cholesterol",
            description: "High cholesterol",
            kind: FeatureKind::Binary,
        },
        FeatureInfo {
            name: "alcohol_use",
            description: "Alcohol use: none, moderate, heavy",
            kind: FeatureKind::Ordinal { levels: 3 },
        },
        FeatureInfo {
            name: "activity_level",
            description: "Physical activity level: low, moderate, high",
            kind: FeatureKind::Ordinal { levels: 3 },
        },
        FeatureInfo {
            name: "fatigue",
            description: "Chronic fatigue",
            kind: FeatureKind::Binary,
        },
        FeatureInfo {
            name: "right_side_pain",
            description: "Pain in the upper right abdomen",
            kind: FeatureKind::Binary,
        },
        FeatureInfo {
            name: "alt_ast_ratio",
            description: "Simulated ALT/AST liver enzyme ratio",
            kind: FeatureKind::Continuous { min: 0.5, max: 3.0 },
        },
    ]
}

/// Get feature info by name within a profile.
pub fn feature_info(profile: ScreeningProfile, name: &str) -> Option<FeatureInfo> {
    profile.features().into_iter().find(|f| f.name == name)
}

/// List all feature names of a profile.
pub fn list_feature_names(profile: ScreeningProfile) -> Vec<&'static str> {
    profile.features().into_iter().map(|f| f.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_feature_count() {
        assert_eq!(standard_features().len(), 6);
    }

    #[test]
    fn test_extended_feature_count() {
        assert_eq!(extended_features().len(), 10);
    }

    #[test]
    fn test_feature_info_lookup() {
        let info = feature_info(ScreeningProfile::Standard, "bmi");
        assert!(info.is_some());
        let bmi = info.unwrap();
        assert_eq!(bmi.name, "bmi");
        assert!(matches!(bmi.kind, FeatureKind::Continuous { .. }));

        let nonexistent = feature_info(ScreeningProfile::Standard, "waist_cm");
        assert!(nonexistent.is_none());
    }

    #[test]
    fn test_ordinal_levels() {
        let alcohol = feature_info(ScreeningProfile::Standard, "alcohol").unwrap();
        assert_eq!(alcohol.kind, FeatureKind::Ordinal { levels: 3 });
    }

    #[test]
    fn test_all_features_have_descriptions() {
        for profile in ScreeningProfile::all() {
            for feature in profile.features() {
                assert!(
                    !feature.description.is_empty(),
                    "Feature {} has no description",
                    feature.name
                );
            }
        }
    }

    #[test]
    fn test_names_unique_within_profile() {
        for profile in ScreeningProfile::all() {
            let mut names = list_feature_names(profile);
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), profile.features().len());
        }
    }
}
