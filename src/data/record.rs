// src/data/record.rs
use serde::{Serialize, Deserialize};

// Column names match the upstream launch data export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "Launch Site")]
    pub site: String,
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    #[serde(rename = "class")]
    pub outcome: Outcome,
    #[serde(rename = "Booster Version Category")]
    pub booster_category: String,
}

impl LaunchRecord {
    pub fn new(site: &str, payload_mass_kg: f64, outcome: Outcome, booster_category: &str) -> Self {
        Self {
            site: site.to_string(),
            payload_mass_kg,
            outcome,
            booster_category: booster_category.to_string(),
        }
    }
}

// The data file encodes outcome as a 0/1 "class" column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Success => "Success",
            Outcome::Failure => "Failure",
        }
    }

    // Vertical coordinate for the scatter chart.
    pub fn as_y(&self) -> f64 {
        match self {
            Outcome::Success => 1.0,
            Outcome::Failure => 0.0,
        }
    }

    pub fn is_success(&self) -> bool {
        *self == Outcome::Success
    }
}

impl TryFrom<u8> for Outcome {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Outcome::Failure),
            1 => Ok(Outcome::Success),
            other => Err(format!("invalid outcome class {} (expected 0 or 1)", other)),
        }
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> u8 {
        match outcome {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }
}
