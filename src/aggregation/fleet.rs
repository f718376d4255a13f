//! Fleet summary: status counts, parameter means and overall status.

use rayon::prelude::*;
use tracing::debug;

use super::ship::{evaluate_ship, ShipEvaluation};
use super::{mean, round_average};
use crate::config::ThresholdConfig;
use crate::types::{
    AverageAnalyses, FleetSummary, Measurement, OverallStatus, Parameter, ShipStatus,
};

/// A ship belonging to the fleet and its current measurement, if any.
#[derive(Debug, Clone, Copy)]
pub struct FleetMember<'a> {
    pub ship_id: &'a str,
    pub current: Option<&'a Measurement>,
}

/// Summarize the current state of a fleet.
///
/// - `total_ships` counts every member, measured or not
/// - status counts and alerts come from members with a current measurement
/// - means skip members without a measurement (never zero-filled)
/// - an empty fleet, or one where nobody has reported, is `No Data`
pub fn summarize_fleet(members: &[FleetMember<'_>], thresholds: &ThresholdConfig) -> FleetSummary {
    let evaluations: Vec<ShipEvaluation> = members
        .par_iter()
        .filter_map(|member| member.current.map(|m| evaluate_ship(m, thresholds)))
        .collect();

    let count = |status: ShipStatus| evaluations.iter().filter(|e| e.status == status).count();

    let average = |parameter: Parameter| {
        mean(
            members
                .iter()
                .filter_map(|member| member.current)
                .map(|m| m.value(parameter)),
        )
        .map(|v| round_average(parameter, v))
    };

    let summary = FleetSummary {
        total_ships: members.len(),
        good_condition: count(ShipStatus::Good),
        needs_attention: count(ShipStatus::Attention),
        critical: count(ShipStatus::Critical),
        average_analyses: AverageAnalyses {
            nitrite: average(Parameter::Nitrite),
            chloride: average(Parameter::Chloride),
            ph: average(Parameter::Ph),
            total_hardness: average(Parameter::TotalHardness),
        },
        total_alerts: evaluations.iter().map(|e| e.alerts.len()).sum(),
        overall_status: OverallStatus::from_ships(evaluations.iter().map(|e| e.status)),
    };

    debug!(
        ships = summary.total_ships,
        reporting = evaluations.len(),
        overall = %summary.overall_status,
        "Fleet summary computed"
    );

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn m(ship: &str, nitrite: f64, chloride: f64, ph: f64, total_hardness: f64) -> Measurement {
        Measurement {
            date: NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
            ship_id: ship.to_string(),
            nitrite,
            chloride,
            ph,
            total_hardness,
        }
    }

    #[test]
    fn test_empty_fleet_is_no_data() {
        let summary = summarize_fleet(&[], &ThresholdConfig::default());
        assert_eq!(summary.total_ships, 0);
        assert_eq!(summary.good_condition, 0);
        assert_eq!(summary.needs_attention, 0);
        assert_eq!(summary.critical, 0);
        assert_eq!(summary.total_alerts, 0);
        assert_eq!(summary.average_analyses, AverageAnalyses::default());
        assert_eq!(summary.overall_status, OverallStatus::NoData);
    }

    #[test]
    fn test_two_ship_nitrite_average() {
        let a = m("A", 1200.0, 30.0, 9.0, 150.0);
        let b = m("B", 1800.0, 40.0, 9.2, 160.0);
        let members = [
            FleetMember { ship_id: "A", current: Some(&a) },
            FleetMember { ship_id: "B", current: Some(&b) },
        ];
        let summary = summarize_fleet(&members, &ThresholdConfig::default());
        assert_eq!(summary.average_analyses.nitrite, Some(1500.0));
        assert_eq!(summary.average_analyses.chloride, Some(35.0));
        assert_eq!(summary.average_analyses.ph, Some(9.1));
        assert_eq!(summary.average_analyses.total_hardness, Some(155.0));
        assert_eq!(summary.good_condition, 2);
        assert_eq!(summary.overall_status, OverallStatus::Good);
    }

    #[test]
    fn test_unmeasured_ship_excluded_from_mean() {
        let a = m("A", 1201.0, 33.33, 8.87, 171.0);
        let members = [
            FleetMember { ship_id: "A", current: Some(&a) },
            FleetMember { ship_id: "B", current: None },
        ];
        let summary = summarize_fleet(&members, &ThresholdConfig::default());
        assert_eq!(summary.total_ships, 2);
        assert_eq!(summary.average_analyses.nitrite, Some(1201.0));
        assert_eq!(summary.average_analyses.chloride, Some(33.3));
        assert_eq!(summary.average_analyses.ph, Some(8.9));
        assert_eq!(summary.good_condition + summary.needs_attention + summary.critical, 1);
    }

    #[test]
    fn test_overall_is_worst_ship_and_alerts_summed() {
        let good = m("A", 1500.0, 30.0, 9.0, 150.0);
        let attention = m("B", 2600.0, 30.0, 9.0, 150.0);
        let critical = m("C", 800.0, 120.0, 7.8, 220.0);
        let members = [
            FleetMember { ship_id: "A", current: Some(&good) },
            FleetMember { ship_id: "B", current: Some(&attention) },
            FleetMember { ship_id: "C", current: Some(&critical) },
        ];
        let summary = summarize_fleet(&members, &ThresholdConfig::default());
        assert_eq!(summary.good_condition, 1);
        assert_eq!(summary.needs_attention, 1);
        assert_eq!(summary.critical, 1);
        assert_eq!(summary.total_alerts, 5);
        assert_eq!(summary.overall_status, OverallStatus::Critical);
    }

    #[test]
    fn test_fleet_without_reports_is_no_data() {
        let members = [FleetMember { ship_id: "A", current: None }];
        let summary = summarize_fleet(&members, &ThresholdConfig::default());
        assert_eq!(summary.total_ships, 1);
        assert_eq!(summary.overall_status, OverallStatus::NoData);
        assert_eq!(summary.average_analyses.nitrite, None);
    }
}
