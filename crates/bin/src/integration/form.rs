//! The patient screening form as CLI arguments.
//!
//! Numeric fields are range-validated with the same bounds the original
//! input widgets enforced; enumerated choices are value enums mapped onto
//! the fixed codings of the core crate.

use clap::{Args, ValueEnum};
use std::path::PathBuf;

use hepatica::{ActivityLevel, AlcoholIntake, ExerciseHabit, PatientRecord, ScreeningProfile};

/// Alcohol intake choices offered by the form.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum AlcoholArg {
    /// No alcohol consumption.
    None,
    /// Occasional consumption.
    Occasional,
    /// Frequent or heavy consumption.
    Frequent,
}

impl From<AlcoholArg> for AlcoholIntake {
    fn from(arg: AlcoholArg) -> Self {
        match arg {
            AlcoholArg::None => Self::None,
            AlcoholArg::Occasional => Self::Occasional,
            AlcoholArg::Frequent => Self::Frequent,
        }
    }
}

/// Exercise habit choices offered by the standard form.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum ExerciseArg {
    /// Regular physical activity.
    Regular,
    /// Occasional physical activity.
    Occasional,
    /// No physical activity.
    None,
}

impl From<ExerciseArg> for ExerciseHabit {
    fn from(arg: ExerciseArg) -> Self {
        match arg {
            ExerciseArg::Regular => Self::Regular,
            ExerciseArg::Occasional => Self::Occasional,
            ExerciseArg::None => Self::None,
        }
    }
}

/// Activity level choices offered by the extended form.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum ActivityArg {
    /// Low activity.
    Low,
    /// Moderate activity.
    Moderate,
    /// High activity.
    High,
}

impl From<ActivityArg> for ActivityLevel {
    fn from(arg: ActivityArg) -> Self {
        match arg {
            ActivityArg::Low => Self::Low,
            ActivityArg::Moderate => Self::Moderate,
            ActivityArg::High => Self::High,
        }
    }
}

/// Screening profile selection.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum ProfileArg {
    /// Quick six-feature screen.
    Standard,
    /// Ten-feature screen aligned with the cohort dataset.
    Extended,
}

impl From<ProfileArg> for ScreeningProfile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Standard => Self::Standard,
            ProfileArg::Extended => Self::Extended,
        }
    }
}

/// Synthetic dataset selection for `generate`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum DatasetArg {
    /// Standard six-column screening dataset.
    Standard,
    /// Extended ten-column screening dataset.
    Extended,
    /// Offline training cohort.
    Cohort,
}

fn parse_bounded(value: &str, name: &str, min: f64, max: f64) -> Result<f64, String> {
    let parsed: f64 = value
        .parse()
        .map_err(|_| format!("{name} must be a number"))?;
    if !(min..=max).contains(&parsed) {
        return Err(format!("{name} must be between {min} and {max}"));
    }
    Ok(parsed)
}

fn parse_height(value: &str) -> Result<f64, String> {
    parse_bounded(value, "height", 100.0, 220.0)
}

fn parse_weight(value: &str) -> Result<f64, String> {
    parse_bounded(value, "weight", 30.0, 200.0)
}

fn parse_waist(value: &str) -> Result<f64, String> {
    parse_bounded(value, "waist", 60.0, 150.0)
}

fn parse_alt_ast(value: &str) -> Result<f64, String> {
    parse_bounded(value, "alt-ast-ratio", 0.5, 3.0)
}

fn parse_age(value: &str) -> Result<u32, String> {
    let parsed: u32 = value
        .parse()
        .map_err(|_| "age must be a whole number".to_string())?;
    if !(18..=80).contains(&parsed) {
        return Err("age must be between 18 and 80".to_string());
    }
    Ok(parsed)
}

/// Patient form inputs for the `assess` subcommand.
#[derive(Debug, Args)]
pub(crate) struct AssessArgs {
    /// Height in centimeters (100-220)
    #[arg(long, value_parser = parse_height)]
    pub(crate) height_cm: f64,

    /// Weight in kilograms (30-200)
    #[arg(long, value_parser = parse_weight)]
    pub(crate) weight_kg: f64,

    /// Alcohol intake
    #[arg(long, value_enum, default_value = "none")]
    pub(crate) alcohol: AlcoholArg,

    /// Diagnosed diabetes
    #[arg(long)]
    pub(crate) diabetes: bool,

    /// High cholesterol
    #[arg(long)]
    pub(crate) cholesterol: bool,

    /// Physical activity habit
    #[arg(long, value_enum, default_value = "regular")]
    pub(crate) exercise: ExerciseArg,

    /// Chronic fatigue
    #[arg(long)]
    pub(crate) fatigue: bool,

    /// Use the extended ten-feature screen
    #[arg(long)]
    pub(crate) extended: bool,

    /// Age in years (18-80, extended screen only)
    #[arg(long, value_parser = parse_age, required_if_eq("extended", "true"))]
    pub(crate) age: Option<u32>,

    /// Waist circumference in centimeters (60-150, extended screen only)
    #[arg(long, value_parser = parse_waist, required_if_eq("extended", "true"))]
    pub(crate) waist_cm: Option<f64>,

    /// Activity level in the cohort coding (extended screen only)
    #[arg(long, value_enum, required_if_eq("extended", "true"))]
    pub(crate) activity: Option<ActivityArg>,

    /// Pain in the upper right abdomen (extended screen only)
    #[arg(long)]
    pub(crate) right_side_pain: bool,

    /// Simulated ALT/AST ratio (0.5-3.0, extended screen only)
    #[arg(long, value_parser = parse_alt_ast, required_if_eq("extended", "true"))]
    pub(crate) alt_ast_ratio: Option<f64>,

    /// Write the influence chart as SVG to this path
    #[arg(long)]
    pub(crate) chart_out: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    pub(crate) format: String,
}

impl AssessArgs {
    /// The screening profile selected by the flags.
    pub(crate) fn profile(&self) -> ScreeningProfile {
        if self.extended {
            ScreeningProfile::Extended
        } else {
            ScreeningProfile::Standard
        }
    }

    /// Assemble the patient record from the form answers.
    pub(crate) fn to_record(&self) -> Result<PatientRecord, Box<dyn std::error::Error>> {
        let record = PatientRecord::new(
            self.height_cm,
            self.weight_kg,
            self.alcohol.into(),
            self.diabetes,
            self.cholesterol,
            self.exercise.into(),
            self.fatigue,
        );

        if !self.extended {
            return Ok(record);
        }

        let age = self.age.ok_or("--age is required with --extended")?;
        let waist_cm = self.waist_cm.ok_or("--waist-cm is required with --extended")?;
        let activity = self
            .activity
            .ok_or("--activity is required with --extended")?;
        let alt_ast_ratio = self
            .alt_ast_ratio
            .ok_or("--alt-ast-ratio is required with --extended")?;

        Ok(record.with_extended(
            age,
            waist_cm,
            activity.into(),
            self.right_side_pain,
            alt_ast_ratio,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_enforced() {
        assert!(parse_height("170").is_ok());
        assert!(parse_height("99").is_err());
        assert!(parse_height("221").is_err());
        assert!(parse_weight("abc").is_err());
        assert!(parse_age("17").is_err());
        assert!(parse_age("52").is_ok());
        assert!(parse_alt_ast("3.5").is_err());
    }

    #[test]
    fn test_arg_enums_map_to_core_codings() {
        assert_eq!(AlcoholIntake::from(AlcoholArg::Frequent).code(), 2);
        assert_eq!(ExerciseHabit::from(ExerciseArg::None).code(), 2);
        assert_eq!(ActivityLevel::from(ActivityArg::High).code(), 2);
    }
}
