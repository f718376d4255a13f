//! Monthly report grid for one ship
//!
//! One `DayEntry` per day of the period, populated from the measurements and
//! chemical additions dated inside it. The grid length is the calendar length
//! of the month unless `report.days_in_period` pins it (the legacy dashboard
//! always drew 31 columns).
//!
//! Advisory text is only produced for the selected day, on request.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::advisory::{advise, Advisory};
use crate::classifier::{classify, Reading};
use crate::config::{ReportConfig, ThresholdConfig};
use crate::types::{ChemicalAddition, DayEntry, Measurement, Parameter, ParameterStatus};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("invalid month {month} for year {year}")]
    InvalidMonth { month: u32, year: i32 },

    #[error("day {day} is outside the report period (1-{days})")]
    DayOutOfRange { day: u32, days: u32 },
}

/// Number of calendar days in a month, `None` for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

/// Advisory for one parameter of the selected day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAdvisory {
    pub parameter: Parameter,
    pub value: f64,
    pub status: ParameterStatus,
    #[serde(flatten)]
    pub advisory: Advisory,
}

/// A ship's measurements laid out by day of month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    pub ship_id: String,
    pub month: u32,
    pub year: i32,
    pub data: Vec<DayEntry>,
    selected_day: Option<u32>,
}

impl MonthlyReport {
    /// Day the cursor points at, if any day holds parameter data.
    pub fn selected_day(&self) -> Option<u32> {
        self.selected_day
    }

    /// Move the cursor to another day of the period.
    pub fn select_day(&mut self, day: u32) -> Result<(), ReportError> {
        let days = self.days();
        if day == 0 || day > days {
            return Err(ReportError::DayOutOfRange { day, days });
        }
        self.selected_day = Some(day);
        Ok(())
    }

    /// Number of day columns in the grid.
    pub fn days(&self) -> u32 {
        u32::try_from(self.data.len()).unwrap_or(u32::MAX)
    }

    pub fn entry(&self, day: u32) -> Option<&DayEntry> {
        let index = usize::try_from(day.checked_sub(1)?).ok()?;
        self.data.get(index)
    }

    pub fn selected_entry(&self) -> Option<&DayEntry> {
        self.selected_day.and_then(|day| self.entry(day))
    }

    /// Severity class of a single grid cell, classified on the cell's own value.
    pub fn cell_status(
        &self,
        day: u32,
        parameter: Parameter,
        thresholds: &ThresholdConfig,
    ) -> Option<ParameterStatus> {
        let value = self.entry(day)?.value(parameter)?;
        Some(classify(parameter, value, thresholds))
    }

    /// Advisories for the parameters recorded on the selected day.
    ///
    /// Computed on each call; nothing is cached on the report.
    pub fn selected_advisories(&self, thresholds: &ThresholdConfig) -> Vec<DayAdvisory> {
        let Some(entry) = self.selected_entry() else {
            return Vec::new();
        };

        Parameter::ALL
            .iter()
            .filter_map(|&parameter| {
                let value = entry.value(parameter)?;
                let reading = Reading {
                    parameter,
                    value,
                    status: classify(parameter, value, thresholds),
                };
                Some(DayAdvisory {
                    parameter,
                    value,
                    status: reading.status,
                    advisory: advise(&reading),
                })
            })
            .collect()
    }
}

/// Build the monthly grid for one ship.
///
/// Records of other ships or outside the period are ignored. Several
/// measurements on one day: the last one wins. Several chemical additions on
/// one day: amounts are summed.
pub fn build_monthly_report(
    ship_id: &str,
    month: u32,
    year: i32,
    measurements: &[Measurement],
    additions: &[ChemicalAddition],
    report: &ReportConfig,
) -> Result<MonthlyReport, ReportError> {
    let calendar_days =
        days_in_month(year, month).ok_or(ReportError::InvalidMonth { month, year })?;
    let days = report.days_in_period.unwrap_or(calendar_days);

    let in_period =
        |date: NaiveDate| date.year() == year && date.month() == month && date.day() <= days;

    let mut data: Vec<DayEntry> = (1..=days).map(DayEntry::empty).collect();

    let mut by_day: BTreeMap<u32, &Measurement> = BTreeMap::new();
    for m in measurements
        .iter()
        .filter(|m| m.ship_id == ship_id && in_period(m.date))
    {
        by_day.insert(m.date.day(), m);
    }
    for (day, m) in by_day {
        if let Some(entry) = data.get_mut(day as usize - 1) {
            entry.nitrite = Some(m.nitrite);
            entry.chloride = Some(m.chloride);
            entry.ph = Some(m.ph);
            entry.total_hardness = Some(m.total_hardness);
        }
    }

    for a in additions
        .iter()
        .filter(|a| a.ship_id == ship_id && in_period(a.date))
    {
        if let Some(entry) = data.get_mut(a.date.day() as usize - 1) {
            *entry.chemical_addition.get_or_insert(0.0) += a.amount;
        }
    }

    let selected_day = data
        .iter()
        .rev()
        .find(|entry| entry.has_parameter_data())
        .map(|entry| entry.day);

    tracing::debug!(
        ship_id,
        month,
        year,
        days,
        selected_day = ?selected_day,
        "Monthly report built"
    );

    Ok(MonthlyReport {
        ship_id: ship_id.to_string(),
        month,
        year,
        data,
        selected_day,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory::templates;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn report_for(
        ship: &str,
        month: u32,
        year: i32,
        measurements: &[Measurement],
    ) -> Result<MonthlyReport, ReportError> {
        build_monthly_report(ship, month, year, measurements, &[], &ReportConfig::default())
    }

    fn measurement(ship: &str, date: NaiveDate, nitrite: f64) -> Measurement {
        Measurement {
            date,
            ship_id: ship.to_string(),
            nitrite,
            chloride: 65.0,
            ph: 9.0,
            total_hardness: 150.0,
        }
    }

    fn addition(ship: &str, date: NaiveDate, amount: f64) -> ChemicalAddition {
        ChemicalAddition {
            date,
            ship_id: ship.to_string(),
            chemical: "Nitrite inhibitor".to_string(),
            amount,
            unit: "L".to_string(),
        }
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2023, 2), Some(28));
        assert_eq!(days_in_month(2024, 4), Some(30));
        assert_eq!(days_in_month(2024, 12), Some(31));
        assert_eq!(days_in_month(2024, 13), None);
    }

    #[test]
    fn test_grid_follows_calendar() {
        let report = report_for("S1", 2, 2023, &[]).unwrap();
        assert_eq!(report.data.len(), 28);
        assert_eq!(report.data.first().map(|d| d.day), Some(1));
        assert_eq!(report.data.last().map(|d| d.day), Some(28));
        assert!(report.data.iter().all(|d| *d == DayEntry::empty(d.day)));
        assert_eq!(report.selected_day(), None);
        assert!(report.selected_advisories(&ThresholdConfig::default()).is_empty());
    }

    #[test]
    fn test_fixed_period_length() {
        let config = ReportConfig { days_in_period: Some(31) };
        let report = build_monthly_report("S1", 2, 2024, &[], &[], &config).unwrap();
        assert_eq!(report.data.len(), 31);
    }

    #[test]
    fn test_only_days_with_records_populated() {
        let measurements = vec![
            measurement("S1", date(2024, 3, 4), 1500.0),
            measurement("S1", date(2024, 3, 18), 900.0),
            measurement("S2", date(2024, 3, 10), 1500.0),
            measurement("S1", date(2024, 4, 1), 1500.0),
        ];
        let additions = vec![
            addition("S1", date(2024, 3, 4), 2.0),
            addition("S1", date(2024, 3, 4), 1.5),
            addition("S1", date(2024, 3, 20), 5.0),
        ];
        let report =
            build_monthly_report("S1", 3, 2024, &measurements, &additions, &ReportConfig::default())
                .unwrap();

        assert_eq!(report.data.len(), 31);
        let populated: Vec<u32> = report
            .data
            .iter()
            .filter(|d| d.has_parameter_data())
            .map(|d| d.day)
            .collect();
        assert_eq!(populated, vec![4, 18]);
        assert_eq!(report.entry(4).and_then(|d| d.chemical_addition), Some(3.5));
        assert_eq!(report.entry(20).and_then(|d| d.chemical_addition), Some(5.0));
        assert_eq!(report.entry(20).and_then(|d| d.nitrite), None);
        assert_eq!(report.entry(10).and_then(|d| d.nitrite), None);
        assert_eq!(report.selected_day(), Some(18));
    }

    #[test]
    fn test_cell_status_and_advisories_for_selected_day() {
        let measurements = vec![
            measurement("S1", date(2024, 3, 4), 1500.0),
            measurement("S1", date(2024, 3, 18), 900.0),
        ];
        let t = ThresholdConfig::default();
        let mut report = report_for("S1", 3, 2024, &measurements).unwrap();

        assert_eq!(report.cell_status(18, Parameter::Nitrite, &t), Some(ParameterStatus::Low));
        assert_eq!(report.cell_status(4, Parameter::Nitrite, &t), Some(ParameterStatus::Optimal));
        assert_eq!(report.cell_status(5, Parameter::Nitrite, &t), None);

        let first = report.selected_advisories(&t);
        assert_eq!(first.len(), 4);
        assert_eq!(first[0].status, ParameterStatus::Low);
        assert_eq!(
            first[0].advisory,
            templates::generate(Parameter::Nitrite, 900.0, ParameterStatus::Low)
        );
        assert_eq!(first, report.selected_advisories(&t));

        report.select_day(4).unwrap();
        let moved = report.selected_advisories(&t);
        assert_eq!(moved[0].status, ParameterStatus::Optimal);
        assert_eq!(moved[1].status, ParameterStatus::Elevated);

        report.select_day(5).unwrap();
        assert!(report.selected_advisories(&t).is_empty());
    }

    #[test]
    fn test_select_day_out_of_range() {
        let mut report = report_for("S1", 4, 2024, &[]).unwrap();
        assert_eq!(
            report.select_day(31),
            Err(ReportError::DayOutOfRange { day: 31, days: 30 })
        );
        assert!(report.select_day(0).is_err());
        assert!(report.select_day(30).is_ok());
    }

    #[test]
    fn test_invalid_month() {
        let err = report_for("S1", 0, 2024, &[]).unwrap_err();
        assert_eq!(err, ReportError::InvalidMonth { month: 0, year: 2024 });
    }

    #[test]
    fn test_wire_format_omits_absent_fields() {
        let measurements = vec![measurement("S1", date(2024, 3, 2), 1500.0)];
        let report = report_for("S1", 3, 2024, &measurements).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        let data = json["data"].as_array().unwrap();
        assert_eq!(data[0], serde_json::json!({ "day": 1 }));
        assert_eq!(data[1]["nitrite"], 1500.0);
        assert_eq!(data[1]["pH"], 9.0);
        assert!(data[1].get("chemicalAddition").is_none());
    }
}
