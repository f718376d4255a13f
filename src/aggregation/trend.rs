//! Fleet trend series: one point per date on which any ship reported.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rayon::prelude::*;
use tracing::debug;

use super::ship::evaluate_ship;
use super::{mean, round_average};
use crate::config::ThresholdConfig;
use crate::types::{Measurement, OverallStatus, Parameter, TrendPoint};

/// The full measurement history of one ship.
#[derive(Debug, Clone, Copy)]
pub struct ShipHistory<'a> {
    pub ship_id: &'a str,
    pub measurements: &'a [Measurement],
}

/// Merge ship histories into a chronological fleet series.
///
/// Dates are the union over all ships. Each point averages only the ships
/// that reported on that exact date, and its status is the worst of those
/// ships' statuses on that date. When a ship has several measurements on
/// one date, the last one in its history is used.
pub fn fleet_trend(histories: &[ShipHistory<'_>], thresholds: &ThresholdConfig) -> Vec<TrendPoint> {
    let mut by_date: BTreeMap<NaiveDate, BTreeMap<&str, &Measurement>> = BTreeMap::new();
    for history in histories {
        for measurement in history.measurements {
            by_date
                .entry(measurement.date)
                .or_default()
                .insert(history.ship_id, measurement);
        }
    }

    let days: Vec<(NaiveDate, Vec<&Measurement>)> = by_date
        .into_iter()
        .map(|(date, ships)| (date, ships.into_values().collect()))
        .collect();

    let points: Vec<TrendPoint> = days
        .into_par_iter()
        .map(|(date, reported)| trend_point(date, &reported, thresholds))
        .collect();

    debug!(
        ships = histories.len(),
        points = points.len(),
        "Fleet trend computed"
    );

    points
}

fn trend_point(
    date: NaiveDate,
    reported: &[&Measurement],
    thresholds: &ThresholdConfig,
) -> TrendPoint {
    let average = |parameter: Parameter| {
        mean(reported.iter().map(|m| m.value(parameter)))
            .map_or(0.0, |v| round_average(parameter, v))
    };

    TrendPoint {
        date,
        nitrite: average(Parameter::Nitrite),
        chloride: average(Parameter::Chloride),
        ph: average(Parameter::Ph),
        total_hardness: average(Parameter::TotalHardness),
        overall_status: OverallStatus::from_ships(
            reported.iter().map(|m| evaluate_ship(m, thresholds).status),
        ),
        ship_count: reported.len(),
    }
}
