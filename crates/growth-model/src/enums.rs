//! Type-safe enumerations for growth assessment concepts.
//!
//! Sex, measurement method, and reference population are closed sets; keeping
//! them as enums makes an invalid combination a construction-time concern
//! rather than a runtime string-matching concern.
//!
//! Parsing is case-sensitive: the CLI contract fixes the exact literals
//! (`male`, `height`, `uk-who`, ...) and these are the only accepted forms.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GrowthError;

/// Sex of the child, as modelled by the reference populations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Returns the canonical literal used on the wire and the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Sex {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            _ => Err(GrowthError::UnknownSex {
                value: s.to_string(),
            }),
        }
    }
}

/// What was measured.
///
/// The method alone determines the unit of the raw measurement value; the
/// reference population never changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeasurementMethod {
    /// Standing height or supine length, in cm.
    Height,
    /// Body weight, in kg.
    Weight,
    /// Body mass index, in kg/m².
    Bmi,
    /// Occipitofrontal (head) circumference, in cm.
    Ofc,
}

impl MeasurementMethod {
    /// Returns the canonical literal used on the wire and the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasurementMethod::Height => "height",
            MeasurementMethod::Weight => "weight",
            MeasurementMethod::Bmi => "bmi",
            MeasurementMethod::Ofc => "ofc",
        }
    }

    /// Unit of the raw measurement value for output purposes.
    pub fn unit(&self) -> &'static str {
        match self {
            MeasurementMethod::Height | MeasurementMethod::Ofc => "cm",
            MeasurementMethod::Weight => "kg",
            MeasurementMethod::Bmi => "kg/m²",
        }
    }
}

impl fmt::Display for MeasurementMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MeasurementMethod {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "height" => Ok(MeasurementMethod::Height),
            "weight" => Ok(MeasurementMethod::Weight),
            "bmi" => Ok(MeasurementMethod::Bmi),
            "ofc" => Ok(MeasurementMethod::Ofc),
            _ => Err(GrowthError::UnknownMeasurementMethod {
                value: s.to_string(),
            }),
        }
    }
}

/// Reference population against which measurements are interpreted.
///
/// Not every (reference, method, sex, age) combination has published data;
/// that is a property of the reference itself and surfaces as
/// [`GrowthError::ReferenceDataUnavailable`] at lookup time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reference {
    UkWho,
    Trisomy21,
    TurnersSyndrome,
}

impl Reference {
    /// Returns the canonical literal used on the wire and the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Reference::UkWho => "uk-who",
            Reference::Trisomy21 => "trisomy-21",
            Reference::TurnersSyndrome => "turners-syndrome",
        }
    }

    /// Human-readable name for report output.
    pub fn display_name(&self) -> &'static str {
        match self {
            Reference::UkWho => "UK-WHO",
            Reference::Trisomy21 => "Trisomy 21/Down's Syndrome",
            Reference::TurnersSyndrome => "Turner's Syndrome",
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Reference {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uk-who" => Ok(Reference::UkWho),
            "trisomy-21" => Ok(Reference::Trisomy21),
            "turners-syndrome" => Ok(Reference::TurnersSyndrome),
            _ => Err(GrowthError::UnknownReference {
                value: s.to_string(),
            }),
        }
    }
}
