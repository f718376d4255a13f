//! Raw records submitted by vessels: water-treatment measurements and
//! chemical additions, plus the parameter catalogue.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Parameters
// ============================================================================

/// One of the four monitored water-chemistry parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Parameter {
    #[serde(rename = "nitrite")]
    Nitrite,
    #[serde(rename = "chloride")]
    Chloride,
    #[serde(rename = "pH")]
    Ph,
    #[serde(rename = "totalHardness")]
    TotalHardness,
}

impl Parameter {
    /// All parameters in presentation order.
    pub const ALL: [Parameter; 4] = [
        Parameter::Nitrite,
        Parameter::Chloride,
        Parameter::Ph,
        Parameter::TotalHardness,
    ];

    /// Wire name used by the presentation layer.
    pub fn key(self) -> &'static str {
        match self {
            Parameter::Nitrite => "nitrite",
            Parameter::Chloride => "chloride",
            Parameter::Ph => "pH",
            Parameter::TotalHardness => "totalHardness",
        }
    }

    /// Human-readable label for alert and advisory text.
    pub fn label(self) -> &'static str {
        match self {
            Parameter::Nitrite => "Nitrite",
            Parameter::Chloride => "Chloride",
            Parameter::Ph => "pH",
            Parameter::TotalHardness => "Total hardness",
        }
    }

    /// Measurement unit. pH is unitless.
    pub fn unit(self) -> &'static str {
        match self {
            Parameter::Ph => "",
            _ => "ppm",
        }
    }

    /// Parse a parameter name leniently (case-insensitive, `_`/`-` ignored).
    ///
    /// Returns `None` for names outside the catalogue.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized: String = name
            .chars()
            .filter(|c| *c != '_' && *c != '-' && !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "nitrite" => Some(Parameter::Nitrite),
            "chloride" => Some(Parameter::Chloride),
            "ph" => Some(Parameter::Ph),
            "totalhardness" | "hardness" => Some(Parameter::TotalHardness),
            _ => None,
        }
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

// ============================================================================
// Measurement
// ============================================================================

/// One water-treatment analysis recorded aboard a ship.
///
/// Immutable once recorded; every derived status is recomputed from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    pub date: NaiveDate,
    pub ship_id: String,
    /// Nitrite inhibitor concentration (ppm)
    pub nitrite: f64,
    /// Chloride concentration (ppm)
    pub chloride: f64,
    #[serde(rename = "pH")]
    pub ph: f64,
    /// Total hardness as CaCO3 (ppm)
    pub total_hardness: f64,
}

impl Measurement {
    /// Value recorded for a single parameter.
    pub fn value(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Nitrite => self.nitrite,
            Parameter::Chloride => self.chloride,
            Parameter::Ph => self.ph,
            Parameter::TotalHardness => self.total_hardness,
        }
    }
}

// ============================================================================
// Chemical Addition
// ============================================================================

/// A treatment chemical dosed into the system on a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChemicalAddition {
    pub date: NaiveDate,
    pub ship_id: String,
    pub chemical: String,
    pub amount: f64,
    pub unit: String,
}
