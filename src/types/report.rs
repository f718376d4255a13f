//! Derived records exposed to the presentation layer.
//!
//! Every struct here is a pure function of the underlying measurement,
//! chemical-addition, ship and fleet records. Field names follow the
//! camelCase wire format the dashboard consumes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{OverallStatus, Parameter, ParameterStatus, ShipStatus};

// ============================================================================
// Ship Analysis
// ============================================================================

/// One parameter of a ship's current analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterAnalysis {
    pub value: f64,
    /// Target band rendered from the threshold table, e.g. "1000-2400"
    pub target: String,
    pub status: ParameterStatus,
    pub unit: String,
}

/// The four parameter analyses of a ship, keyed like the wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterAnalyses {
    pub nitrite: ParameterAnalysis,
    pub chloride: ParameterAnalysis,
    #[serde(rename = "pH")]
    pub ph: ParameterAnalysis,
    pub total_hardness: ParameterAnalysis,
}

/// Most recent chemical dosing of a ship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChemicalAdditionSummary {
    pub date: NaiveDate,
    pub chemical: String,
    pub amount: f64,
    pub unit: String,
}

/// Current water-chemistry picture of one ship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipAnalysis {
    pub ship_id: String,
    pub ship_name: String,
    pub fleet_id: String,
    pub last_analysis_date: NaiveDate,
    pub current_status: ShipStatus,
    pub analyses: ParameterAnalyses,
    pub alerts: Vec<String>,
    pub last_chemical_addition: Option<ChemicalAdditionSummary>,
    pub next_analysis_date: NaiveDate,
}

// ============================================================================
// Fleet Summary
// ============================================================================

/// Fleet-wide parameter means.
///
/// A field is `None` when no ship in the fleet has a current measurement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageAnalyses {
    pub nitrite: Option<f64>,
    pub chloride: Option<f64>,
    #[serde(rename = "pH")]
    pub ph: Option<f64>,
    pub total_hardness: Option<f64>,
}

/// Aggregate health of a fleet, recomputed on demand.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetSummary {
    pub total_ships: usize,
    pub good_condition: usize,
    pub needs_attention: usize,
    pub critical: usize,
    pub average_analyses: AverageAnalyses,
    pub total_alerts: usize,
    pub overall_status: OverallStatus,
}

// ============================================================================
// Monthly Report Grid
// ============================================================================

/// One day column of a monthly report.
///
/// Fields are absent (not zero) when no record exists for the day.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayEntry {
    pub day: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nitrite: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chloride: Option<f64>,
    #[serde(default, rename = "pH", skip_serializing_if = "Option::is_none")]
    pub ph: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_hardness: Option<f64>,
    /// Total chemical amount dosed that day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chemical_addition: Option<f64>,
}

impl DayEntry {
    pub fn empty(day: u32) -> Self {
        Self {
            day,
            ..Self::default()
        }
    }

    pub fn value(&self, parameter: Parameter) -> Option<f64> {
        match parameter {
            Parameter::Nitrite => self.nitrite,
            Parameter::Chloride => self.chloride,
            Parameter::Ph => self.ph,
            Parameter::TotalHardness => self.total_hardness,
        }
    }

    /// True when at least one parameter was measured on this day.
    pub fn has_parameter_data(&self) -> bool {
        Parameter::ALL.iter().any(|p| self.value(*p).is_some())
    }
}

// ============================================================================
// Trend Series
// ============================================================================

/// Fleet-level averages for one date of the historical series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub nitrite: f64,
    pub chloride: f64,
    #[serde(rename = "pH")]
    pub ph: f64,
    pub total_hardness: f64,
    pub overall_status: OverallStatus,
    /// Ships that recorded a measurement on this date
    pub ship_count: usize,
}
