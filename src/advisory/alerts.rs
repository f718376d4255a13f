//! Alert lines for out-of-range parameters
//!
//! One alert per parameter whose status is outside its target band, in
//! parameter order. In-range and unknown statuses never raise an alert.

use super::display_value;
use crate::classifier::Reading;
use crate::types::{Parameter, ParameterStatus};

/// Alert text for a single parameter, or `None` when the status is in range.
pub fn alert_message(parameter: Parameter, status: ParameterStatus, value: f64) -> Option<String> {
    if status.is_in_range() {
        return None;
    }

    let shown = display_value(parameter, value);
    let message = match (parameter, status) {
        (Parameter::Nitrite, ParameterStatus::Low) => {
            format!("Low nitrite level ({shown}) - corrosion risk, increase inhibitor dosing")
        }
        (Parameter::Nitrite, ParameterStatus::High) => {
            format!("High nitrite level ({shown}) - reduce inhibitor dosing")
        }
        (Parameter::Chloride, ParameterStatus::Elevated) => {
            format!("Elevated chloride level ({shown}) - check for seawater ingress")
        }
        (Parameter::Chloride, ParameterStatus::Critical) => {
            format!("Critical chloride level ({shown}) - seawater contamination suspected")
        }
        (Parameter::Ph, ParameterStatus::Low) => {
            format!("Low pH ({shown}) - acidic corrosion risk")
        }
        (Parameter::Ph, ParameterStatus::High) => {
            format!("High pH ({shown}) - risk to non-ferrous components")
        }
        (Parameter::TotalHardness, ParameterStatus::High) => {
            format!("High total hardness ({shown}) - scaling risk")
        }
        (Parameter::TotalHardness, ParameterStatus::Critical) => {
            format!("Critical total hardness ({shown}) - severe scaling risk")
        }
        // Out-of-range status outside this parameter's bands
        (parameter, status) => format!("{} {status} ({shown})", parameter.label()),
    };
    Some(message)
}

/// Ordered alert list for a set of classified readings.
///
/// The list length equals the number of out-of-range readings.
pub fn alerts_for(readings: &[Reading]) -> Vec<String> {
    readings
        .iter()
        .filter_map(|r| alert_message(r.parameter, r.status, r.value))
        .collect()
}
