//! Reports built from a single ship's records
//!
//! - `analysis`: the current ship analysis card
//! - `monthly`: the day-indexed monthly grid with a selected-day cursor

pub mod analysis;
pub mod monthly;

pub use analysis::build_ship_analysis;
pub use monthly::{build_monthly_report, days_in_month, DayAdvisory, MonthlyReport, ReportError};
