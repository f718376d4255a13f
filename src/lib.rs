//! Fleet Water: water-chemistry classification and aggregation engine
//!
//! Turns raw vessel water-treatment measurements into statuses, alerts,
//! advisories, fleet summaries, monthly reports and trend series.
//!
//! ## Architecture
//!
//! - **Classifier**: canonical threshold table, one status per parameter
//! - **Advisory**: templated comments, recommendations and alert lines
//! - **Aggregation**: ship status, fleet summary, fleet trend
//! - **Report**: ship analysis card, monthly day grid
//! - **Storage**: repository trait feeding the engine immutable snapshots

pub mod advisory;
pub mod aggregation;
pub mod classifier;
pub mod config;
pub mod dashboard;
pub mod report;
pub mod storage;
pub mod types;

// Re-export configuration
pub use config::{DashboardConfig, ThresholdConfig};

// Re-export commonly used types
pub use types::{
    ChemicalAddition, DayEntry, Fleet, FleetSummary, Measurement, OverallStatus, Parameter,
    ParameterStatus, Ship, ShipAnalysis, ShipStatus, TrendPoint,
};

// Re-export engine entry points
pub use advisory::{alerts_for, Advisory};
pub use aggregation::{fleet_trend, ship_status, summarize_fleet};
pub use classifier::{classify, classify_named};
pub use dashboard::Dashboard;
pub use report::{MonthlyReport, ReportError};
pub use storage::{FleetRepository, InMemoryRepository, Snapshot, StorageError};
