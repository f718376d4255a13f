//! Human-readable text derived from classified readings
//!
//! - `templates`: comment + recommendation for one (parameter, status, value)
//! - `alerts`: short alert lines for out-of-range parameters
//!
//! Both are deterministic lookups: identical inputs always produce
//! identical text.

pub mod alerts;
pub mod templates;

pub use alerts::{alert_message, alerts_for};
pub use templates::{advise, Advisory};

use crate::types::Parameter;

/// Render a value with its unit, e.g. `"800 ppm"` or `"7.8"`.
pub(crate) fn display_value(parameter: Parameter, value: f64) -> String {
    let unit = parameter.unit();
    if unit.is_empty() {
        format!("{value}")
    } else {
        format!("{value} {unit}")
    }
}
