//! Patient records collected by the screening form.

use serde::{Deserialize, Serialize};

use super::inputs::{ActivityLevel, AlcoholIntake, ExerciseHabit};
use super::{ScreeningError, ScreeningProfile};
use crate::vitals;

/// One patient's answers to the screening form.
///
/// The first block of fields is collected by both profiles; the `Option`
/// fields are only asked by the extended form. [`PatientRecord::to_features`]
/// converts the record into a named feature vector in the exact column order
/// of the requested profile, which is the order the models were trained with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRecord {
    /// Height in centimeters.
    pub height_cm: f64,

    /// Weight in kilograms.
    pub weight_kg: f64,

    /// Alcohol intake level.
    pub alcohol: AlcoholIntake,

    /// Diagnosed diabetes.
    pub diabetes: bool,

    /// High cholesterol.
    pub high_cholesterol: bool,

    /// Physical activity habit (standard form wording).
    pub exercise: ExerciseHabit,

    /// Chronic fatigue.
    pub fatigue: bool,

    /// Age in years (extended form only).
    pub age: Option<u32>,

    /// Waist circumference in centimeters (extended form only).
    pub waist_cm: Option<f64>,

    /// Activity level in the cohort coding (extended form only).
    pub activity: Option<ActivityLevel>,

    /// Pain in the upper right abdomen (extended form only).
    pub right_side_pain: Option<bool>,

    /// Simulated ALT/AST ratio (extended form only).
    pub alt_ast_ratio: Option<f64>,
}

impl PatientRecord {
    /// Create a record with the fields shared by both profiles.
    pub const fn new(
        height_cm: f64,
        weight_kg: f64,
        alcohol: AlcoholIntake,
        diabetes: bool,
        high_cholesterol: bool,
        exercise: ExerciseHabit,
        fatigue: bool,
    ) -> Self {
        Self {
            height_cm,
            weight_kg,
            alcohol,
            diabetes,
            high_cholesterol,
            exercise,
            fatigue,
            age: None,
            waist_cm: None,
            activity: None,
            right_side_pain: None,
            alt_ast_ratio: None,
        }
    }

    /// Set the extended-form fields.
    pub const fn with_extended(
        mut self,
        age: u32,
        waist_cm: f64,
        activity: ActivityLevel,
        right_side_pain: bool,
        alt_ast_ratio: f64,
    ) -> Self {
        self.age = Some(age);
        self.waist_cm = Some(waist_cm);
        self.activity = Some(activity);
        self.right_side_pain = Some(right_side_pain);
        self.alt_ast_ratio = Some(alt_ast_ratio);
        self
    }

    /// Body Mass Index derived from the recorded height and weight.
    pub fn bmi(&self) -> f64 {
        vitals::bmi(self.height_cm, self.weight_kg)
    }

    /// Convert the record into `(column, value)` pairs in the profile's
    /// schema order.
    ///
    /// # Errors
    ///
    /// Returns [`ScreeningError::MissingField`] if the extended profile is
    /// requested and one of the extended-form answers is absent.
    pub fn to_features(
        &self,
        profile: ScreeningProfile,
    ) -> Result<Vec<(String, f64)>, ScreeningError> {
        let features = match profile {
            ScreeningProfile::Standard => vec![
                ("bmi", self.bmi()),
                ("alcohol", f64::from(self.alcohol.code())),
                ("diabetes", f64::from(u8::from(self.diabetes))),
                ("cholesterol", f64::from(u8::from(self.high_cholesterol))),
                ("exercise", f64::from(self.exercise.code())),
                ("fatigue", f64::from(u8::from(self.fatigue))),
            ],
            ScreeningProfile::Extended => {
                let age = self.require(profile, self.age, "age")?;
                let waist_cm = self.require(profile, self.waist_cm, "waist_cm")?;
                let activity = self.require(profile, self.activity, "activity")?;
                let right_side_pain =
                    self.require(profile, self.right_side_pain, "right_side_pain")?;
                let alt_ast_ratio = self.require(profile, self.alt_ast_ratio, "alt_ast_ratio")?;
                vec![
                    ("age", f64::from(age)),
                    ("bmi", self.bmi()),
                    ("waist_cm", waist_cm),
                    ("diabetes", f64::from(u8::from(self.diabetes))),
                    (
                        "high_cholesterol",
                        f64::from(u8::from(self.high_cholesterol)),
                    ),
                    ("alcohol_use", f64::from(self.alcohol.code())),
                    ("activity_level", f64::from(activity.code())),
                    ("fatigue", f64::from(u8::from(self.fatigue))),
                    ("right_side_pain", f64::from(u8::from(right_side_pain))),
                    ("alt_ast_ratio", alt_ast_ratio),
                ]
            }
        };

        Ok(features
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect())
    }

    fn require<T>(
        &self,
        profile: ScreeningProfile,
        value: Option<T>,
        field: &'static str,
    ) -> Result<T, ScreeningError> {
        value.ok_or(ScreeningError::MissingField { profile, field })
    }
}
