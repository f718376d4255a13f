//! Current analysis card for one ship

use chrono::Days;

use crate::aggregation::{evaluate_ship, latest_measurement};
use crate::classifier::{target, Reading};
use crate::config::DashboardConfig;
use crate::types::{
    ChemicalAddition, ChemicalAdditionSummary, Measurement, ParameterAnalyses, ParameterAnalysis,
    Ship, ShipAnalysis,
};

/// Build the analysis card from a ship's records.
///
/// Returns `None` when the ship has never reported a measurement.
pub fn build_ship_analysis(
    ship: &Ship,
    measurements: &[Measurement],
    additions: &[ChemicalAddition],
    config: &DashboardConfig,
) -> Option<ShipAnalysis> {
    let current = latest_measurement(measurements)?;
    let thresholds = &config.thresholds;
    let evaluation = evaluate_ship(current, thresholds);

    let analysis = |reading: &Reading| ParameterAnalysis {
        value: reading.value,
        target: target(reading.parameter, thresholds),
        status: reading.status,
        unit: reading.parameter.unit().to_string(),
    };
    let [nitrite, chloride, ph, total_hardness] = &evaluation.readings;

    let last_chemical_addition = additions
        .iter()
        .max_by_key(|a| a.date)
        .map(|a| ChemicalAdditionSummary {
            date: a.date,
            chemical: a.chemical.clone(),
            amount: a.amount,
            unit: a.unit.clone(),
        });

    let next_analysis_date = current
        .date
        .checked_add_days(Days::new(u64::from(config.schedule.analysis_interval_days)))
        .unwrap_or(current.date);

    Some(ShipAnalysis {
        ship_id: ship.id.clone(),
        ship_name: ship.name.clone(),
        fleet_id: ship.fleet_id.clone(),
        last_analysis_date: current.date,
        current_status: evaluation.status,
        analyses: ParameterAnalyses {
            nitrite: analysis(nitrite),
            chloride: analysis(chloride),
            ph: analysis(ph),
            total_hardness: analysis(total_hardness),
        },
        alerts: evaluation.alerts,
        last_chemical_addition,
        next_analysis_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ParameterStatus, ShipStatus};
    use chrono::NaiveDate;

    fn ship() -> Ship {
        Ship {
            id: "S1".to_string(),
            name: "Baltic Explorer".to_string(),
            fleet_id: "F1".to_string(),
            imo_number: Some("9321483".to_string()),
            vessel_type: None,
            flag: None,
        }
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn measurement(d: u32, nitrite: f64, chloride: f64, ph: f64, hardness: f64) -> Measurement {
        Measurement {
            date: date(d),
            ship_id: "S1".to_string(),
            nitrite,
            chloride,
            ph,
            total_hardness: hardness,
        }
    }

    #[test]
    fn test_analysis_uses_latest_measurement() {
        let measurements = vec![
            measurement(10, 800.0, 120.0, 7.8, 220.0),
            measurement(3, 1500.0, 30.0, 9.0, 150.0),
        ];
        let additions = vec![
            ChemicalAddition {
                date: date(2),
                ship_id: "S1".to_string(),
                chemical: "Nitrite inhibitor".to_string(),
                amount: 5.0,
                unit: "L".to_string(),
            },
            ChemicalAddition {
                date: date(11),
                ship_id: "S1".to_string(),
                chemical: "pH booster".to_string(),
                amount: 2.0,
                unit: "kg".to_string(),
            },
        ];
        let card =
            build_ship_analysis(&ship(), &measurements, &additions, &DashboardConfig::default())
                .unwrap();

        assert_eq!(card.ship_name, "Baltic Explorer");
        assert_eq!(card.last_analysis_date, date(10));
        assert_eq!(card.next_analysis_date, date(17));
        assert_eq!(card.current_status, ShipStatus::Critical);
        assert_eq!(card.alerts.len(), 4);
        assert_eq!(card.analyses.nitrite.status, ParameterStatus::Low);
        assert_eq!(card.analyses.nitrite.target, "1000-2400");
        assert_eq!(card.analyses.ph.unit, "");
        assert_eq!(card.analyses.total_hardness.unit, "ppm");
        assert_eq!(
            card.last_chemical_addition.map(|a| a.chemical),
            Some("pH booster".to_string())
        );
    }

    #[test]
    fn test_no_measurement_no_analysis() {
        assert!(build_ship_analysis(&ship(), &[], &[], &DashboardConfig::default()).is_none());
    }

    #[test]
    fn test_wire_field_names() {
        let measurements = vec![measurement(10, 1500.0, 30.0, 9.0, 150.0)];
        let card =
            build_ship_analysis(&ship(), &measurements, &[], &DashboardConfig::default()).unwrap();
        let json = serde_json::to_value(&card).unwrap();
        for key in [
            "shipId",
            "shipName",
            "fleetId",
            "lastAnalysisDate",
            "currentStatus",
            "analyses",
            "alerts",
            "lastChemicalAddition",
            "nextAnalysisDate",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["analyses"]["pH"]["status"], "good");
        assert_eq!(json["analyses"]["totalHardness"]["target"], "≤180");
        assert_eq!(json["currentStatus"], "Good");
    }
}
