//! Template-based advisory generation
//!
//! Every (parameter, status) pair the classifier can produce has a dedicated
//! template with the measured value substituted in. The dashboard labels this
//! text "AI comment"; it is a plain lookup with no model behind it.

use serde::{Deserialize, Serialize};

use super::display_value;
use crate::classifier::Reading;
use crate::types::{Parameter, ParameterStatus};

/// Comment and recommendation for a single parameter reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    pub comment: String,
    pub recommendation: String,
}

/// Generate the advisory for one classified reading.
pub fn advise(reading: &Reading) -> Advisory {
    generate(reading.parameter, reading.value, reading.status)
}

/// Generate the advisory for a parameter value and its status.
pub fn generate(parameter: Parameter, value: f64, status: ParameterStatus) -> Advisory {
    let shown = display_value(parameter, value);
    let (comment, recommendation) = match (parameter, status) {
        (Parameter::Nitrite, ParameterStatus::Low) => nitrite_low(&shown),
        (Parameter::Nitrite, ParameterStatus::Optimal) => nitrite_optimal(&shown),
        (Parameter::Nitrite, ParameterStatus::High) => nitrite_high(&shown),
        (Parameter::Chloride, ParameterStatus::Normal) => chloride_normal(&shown),
        (Parameter::Chloride, ParameterStatus::Elevated) => chloride_elevated(&shown),
        (Parameter::Chloride, ParameterStatus::Critical) => chloride_critical(&shown),
        (Parameter::Ph, ParameterStatus::Low) => ph_low(&shown),
        (Parameter::Ph, ParameterStatus::Good) => ph_good(&shown),
        (Parameter::Ph, ParameterStatus::High) => ph_high(&shown),
        (Parameter::TotalHardness, ParameterStatus::Acceptable) => hardness_acceptable(&shown),
        (Parameter::TotalHardness, ParameterStatus::High) => hardness_high(&shown),
        (Parameter::TotalHardness, ParameterStatus::Critical) => hardness_critical(&shown),
        // Unknown, or a status outside this parameter's bands
        (parameter, _) => unclassified(parameter, &shown),
    };

    Advisory {
        comment,
        recommendation,
    }
}

// ----------------------------------------------------------------------------
// Nitrite
// ----------------------------------------------------------------------------

fn nitrite_low(shown: &str) -> (String, String) {
    (
        format!(
            "Nitrite at {shown} is below the inhibitor target. The protective film on \
             steel surfaces is incomplete and the cooling system is exposed to corrosion."
        ),
        "Increase nitrite inhibitor dosing and re-test within 24 hours. \
         Check for dilution from make-up water."
            .to_string(),
    )
}

fn nitrite_optimal(shown: &str) -> (String, String) {
    (
        format!("Nitrite at {shown} is within the target band. Corrosion protection is adequate."),
        "Maintain the current dosing regime and continue routine analysis.".to_string(),
    )
}

fn nitrite_high(shown: &str) -> (String, String) {
    (
        format!(
            "Nitrite at {shown} is above the target band. Over-treatment wastes chemical \
             and can promote deposits."
        ),
        "Suspend inhibitor dosing until the level falls back into range. \
         Partial drain and refill with distilled water if it stays high."
            .to_string(),
    )
}

// ----------------------------------------------------------------------------
// Chloride
// ----------------------------------------------------------------------------

fn chloride_normal(shown: &str) -> (String, String) {
    (
        format!("Chloride at {shown} is normal. No sign of seawater ingress."),
        "No action required. Continue routine analysis.".to_string(),
    )
}

fn chloride_elevated(shown: &str) -> (String, String) {
    (
        format!(
            "Chloride at {shown} is elevated, an early indication of seawater ingress \
             or contaminated make-up water."
        ),
        "Inspect coolers and make-up water quality. Increase analysis frequency \
         until chloride returns to normal."
            .to_string(),
    )
}

fn chloride_critical(shown: &str) -> (String, String) {
    (
        format!(
            "Chloride at {shown} is critical. Seawater contamination is likely and \
             pitting corrosion risk is severe."
        ),
        "Locate and isolate the leak immediately, pressure-test heat exchangers, \
         then drain and refill the system with treated fresh water."
            .to_string(),
    )
}

// ----------------------------------------------------------------------------
// pH
// ----------------------------------------------------------------------------

fn ph_low(shown: &str) -> (String, String) {
    (
        format!("pH at {shown} is too low. Acidic water accelerates general corrosion."),
        "Raise pH with alkaline treatment and confirm nitrite level, which usually \
         falls together with pH."
            .to_string(),
    )
}

fn ph_good(shown: &str) -> (String, String) {
    (
        format!("pH at {shown} is within the target band."),
        "No action required. Continue routine analysis.".to_string(),
    )
}

fn ph_high(shown: &str) -> (String, String) {
    (
        format!(
            "pH at {shown} is too high. Strongly alkaline water attacks aluminium and \
             other non-ferrous components."
        ),
        "Stop alkaline dosing and dilute with fresh distilled water until pH \
         returns to range."
            .to_string(),
    )
}

// ----------------------------------------------------------------------------
// Total hardness
// ----------------------------------------------------------------------------

fn hardness_acceptable(shown: &str) -> (String, String) {
    (
        format!("Total hardness at {shown} is acceptable. Scaling risk is low."),
        "No action required. Continue routine analysis.".to_string(),
    )
}

fn hardness_high(shown: &str) -> (String, String) {
    (
        format!(
            "Total hardness at {shown} is high. Scale may start to form on heat-transfer \
             surfaces."
        ),
        "Check make-up water source and switch to distilled or softened water. \
         Monitor jacket temperatures for loss of heat transfer."
            .to_string(),
    )
}

fn hardness_critical(shown: &str) -> (String, String) {
    (
        format!(
            "Total hardness at {shown} is critical. Heavy scaling is likely and will \
             impair cooling."
        ),
        "Partially drain and refill with distilled water and plan a descaling \
         inspection of coolers at the next opportunity."
            .to_string(),
    )
}

// ----------------------------------------------------------------------------
// Fallback
// ----------------------------------------------------------------------------

fn unclassified(parameter: Parameter, shown: &str) -> (String, String) {
    (
        format!("{} at {shown} could not be classified.", parameter.label()),
        "Verify the sample and repeat the analysis.".to_string(),
    )
}
