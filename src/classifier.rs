//! Parameter classification against the canonical threshold table
//!
//! | Parameter      | Bands                                             |
//! |----------------|---------------------------------------------------|
//! | nitrite        | `< low` low, `low..=high` optimal, `> high` high  |
//! | chloride       | `<= elevated` normal, `<= critical` elevated, else critical |
//! | pH             | `< low` low, `low..=high` good, `> high` high     |
//! | total hardness | `<= high` acceptable, `<= critical` high, else critical |
//!
//! Every other component classifies through this module; no threshold is
//! repeated elsewhere.

use crate::config::ThresholdConfig;
use crate::types::{Measurement, Parameter, ParameterStatus, ShipStatus};

/// Classify one parameter value.
///
/// A NaN reading cannot be placed in any band and yields `Unknown`.
pub fn classify(parameter: Parameter, value: f64, thresholds: &ThresholdConfig) -> ParameterStatus {
    if value.is_nan() {
        return ParameterStatus::Unknown;
    }

    match parameter {
        Parameter::Nitrite => {
            let t = &thresholds.nitrite;
            if value < t.low_below_ppm {
                ParameterStatus::Low
            } else if value <= t.high_above_ppm {
                ParameterStatus::Optimal
            } else {
                ParameterStatus::High
            }
        }
        Parameter::Chloride => {
            let t = &thresholds.chloride;
            if value <= t.elevated_above_ppm {
                ParameterStatus::Normal
            } else if value <= t.critical_above_ppm {
                ParameterStatus::Elevated
            } else {
                ParameterStatus::Critical
            }
        }
        Parameter::Ph => {
            let t = &thresholds.ph;
            if value < t.low_below {
                ParameterStatus::Low
            } else if value <= t.high_above {
                ParameterStatus::Good
            } else {
                ParameterStatus::High
            }
        }
        Parameter::TotalHardness => {
            let t = &thresholds.total_hardness;
            if value <= t.high_above_ppm {
                ParameterStatus::Acceptable
            } else if value <= t.critical_above_ppm {
                ParameterStatus::High
            } else {
                ParameterStatus::Critical
            }
        }
    }
}

/// Classify by parameter name. Names outside the catalogue yield `Unknown`.
pub fn classify_named(name: &str, value: f64, thresholds: &ThresholdConfig) -> ParameterStatus {
    match Parameter::from_name(name) {
        Some(parameter) => classify(parameter, value, thresholds),
        None => {
            tracing::debug!(parameter = %name, "Unknown parameter name, classifying as unknown");
            ParameterStatus::Unknown
        }
    }
}

/// Target band of a parameter rendered for display, e.g. `"1000-2400"` or `"≤50"`.
pub fn target(parameter: Parameter, thresholds: &ThresholdConfig) -> String {
    match parameter {
        Parameter::Nitrite => format!(
            "{}-{}",
            thresholds.nitrite.low_below_ppm, thresholds.nitrite.high_above_ppm
        ),
        Parameter::Chloride => format!("≤{}", thresholds.chloride.elevated_above_ppm),
        Parameter::Ph => format!("{}-{}", thresholds.ph.low_below, thresholds.ph.high_above),
        Parameter::TotalHardness => format!("≤{}", thresholds.total_hardness.high_above_ppm),
    }
}

/// A classified parameter value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub parameter: Parameter,
    pub value: f64,
    pub status: ParameterStatus,
}

impl Reading {
    pub fn severity(&self) -> ShipStatus {
        self.status.ship_status()
    }
}

/// Classify all four parameters of a measurement, in presentation order.
pub fn classify_measurement(
    measurement: &Measurement,
    thresholds: &ThresholdConfig,
) -> [Reading; 4] {
    Parameter::ALL.map(|parameter| {
        let value = measurement.value(parameter);
        Reading {
            parameter,
            value,
            status: classify(parameter, value, thresholds),
        }
    })
}
