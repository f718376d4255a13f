//! Ship-level status: the single worst of the four parameter severities.

use chrono::NaiveDate;

use crate::advisory::alerts_for;
use crate::classifier::{classify_measurement, Reading};
use crate::config::ThresholdConfig;
use crate::types::{Measurement, ParameterStatus, ShipStatus};

/// Reduce parameter statuses to one ship status.
///
/// Severities are never combined or averaged: `Critical > Attention > Good`,
/// and the worst present wins. An empty slice is `Good`.
pub fn ship_status(statuses: &[ParameterStatus]) -> ShipStatus {
    ShipStatus::worst(statuses.iter().map(|s| s.ship_status())).unwrap_or_default()
}

/// The current measurement of a ship: latest date, last recorded on ties.
pub fn latest_measurement(measurements: &[Measurement]) -> Option<&Measurement> {
    measurements.iter().max_by_key(|m| m.date)
}

/// Classified view of one ship measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct ShipEvaluation {
    pub ship_id: String,
    pub date: NaiveDate,
    pub readings: [Reading; 4],
    pub status: ShipStatus,
    pub alerts: Vec<String>,
}

/// Classify a measurement, derive its ship status and alert list.
pub fn evaluate_ship(measurement: &Measurement, thresholds: &ThresholdConfig) -> ShipEvaluation {
    let readings = classify_measurement(measurement, thresholds);
    let statuses = readings.map(|r| r.status);
    ShipEvaluation {
        ship_id: measurement.ship_id.clone(),
        date: measurement.date,
        status: ship_status(&statuses),
        alerts: alerts_for(&readings),
        readings,
    }
}
