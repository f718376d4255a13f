//! Roll-ups from individual readings to ship, fleet and trend level
//!
//! All functions are stateless folds over borrowed snapshots. Per-ship and
//! per-date work runs on rayon and is reduced afterwards, so results do not
//! depend on scheduling order.

pub mod fleet;
pub mod ship;
pub mod trend;

pub use fleet::{summarize_fleet, FleetMember};
pub use ship::{evaluate_ship, latest_measurement, ship_status, ShipEvaluation};
pub use trend::{fleet_trend, ShipHistory};

use crate::types::Parameter;

/// Arithmetic mean, `None` for an empty input.
pub(crate) fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Round an averaged value for display: nitrite and total hardness to whole
/// ppm, chloride and pH to one decimal place.
pub(crate) fn round_average(parameter: Parameter, value: f64) -> f64 {
    match parameter {
        Parameter::Nitrite | Parameter::TotalHardness => value.round(),
        Parameter::Chloride | Parameter::Ph => (value * 10.0).round() / 10.0,
    }
}
