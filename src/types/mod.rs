//! Shared data structures for fleet water-chemistry monitoring
//!
//! This module defines the records flowing through the engine:
//! - Input: Measurement, ChemicalAddition, Ship, Fleet
//! - Classification: Parameter, ParameterStatus, ShipStatus, OverallStatus
//! - Output: ShipAnalysis, FleetSummary, MonthlyReport, TrendPoint

mod measurement;
mod status;
mod fleet;
mod report;

pub use measurement::*;
pub use status::*;
pub use fleet::*;
pub use report::*;
