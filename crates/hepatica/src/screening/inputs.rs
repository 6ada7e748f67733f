//! Fixed codings for the enumerated form inputs.
//!
//! The screening form collects categorical answers; each maps to a numeric
//! code through the lookup tables below. The codes are part of the trained
//! models' input contract and must not be renumbered.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Alcohol intake level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlcoholIntake {
    /// No alcohol consumption.
    None,

    /// Occasional consumption.
    Occasional,

    /// Frequent or heavy consumption.
    Frequent,
}

impl AlcoholIntake {
    /// Returns all intake levels.
    pub fn all() -> Vec<Self> {
        vec![Self::None, Self::Occasional, Self::Frequent]
    }

    /// Returns the numeric code used as a model feature.
    pub const fn code(&self) -> u8 {
        match self {
            Self::None => 0,
            Self::Occasional => 1,
            Self::Frequent => 2,
        }
    }

    /// Returns the display name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Occasional => "Occasional",
            Self::Frequent => "Frequent",
        }
    }

    /// Parse an intake level from its code.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::None),
            1 => Some(Self::Occasional),
            2 => Some(Self::Frequent),
            _ => None,
        }
    }
}

impl fmt::Display for AlcoholIntake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Physical activity habit as asked by the standard screening form.
///
/// Coded in increasing risk order: a sedentary answer gets the highest code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExerciseHabit {
    /// Regular physical activity.
    Regular,

    /// Occasional physical activity.
    Occasional,

    /// No physical activity.
    None,
}

impl ExerciseHabit {
    /// Returns all exercise habits.
    pub fn all() -> Vec<Self> {
        vec![Self::Regular, Self::Occasional, Self::None]
    }

    /// Returns the numeric code used as a model feature.
    pub const fn code(&self) -> u8 {
        match self {
            Self::Regular => 0,
            Self::Occasional => 1,
            Self::None => 2,
        }
    }

    /// Returns the display name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Occasional => "Occasional",
            Self::None => "None",
        }
    }

    /// Parse an exercise habit from its code.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Regular),
            1 => Some(Self::Occasional),
            2 => Some(Self::None),
            _ => None,
        }
    }
}

impl fmt::Display for ExerciseHabit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Physical activity level as coded in the extended/cohort schema.
///
/// Coded in increasing activity order, opposite to [`ExerciseHabit`]: here
/// the highest code is the most active (and least risky) answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityLevel {
    /// Low activity.
    Low,

    /// Moderate activity.
    Moderate,

    /// High activity.
    High,
}

impl ActivityLevel {
    /// Returns all activity levels.
    pub fn all() -> Vec<Self> {
        vec![Self::Low, Self::Moderate, Self::High]
    }

    /// Returns the numeric code used as a model feature.
    pub const fn code(&self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Moderate => 1,
            Self::High => 2,
        }
    }

    /// Returns the display name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }

    /// Parse an activity level from its code.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Low),
            1 => Some(Self::Moderate),
            2 => Some(Self::High),
            _ => None,
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
