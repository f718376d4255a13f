//! Dashboard Configuration Module
//!
//! Provides the canonical water-chemistry threshold table and report
//! settings, loaded from TOML with built-in defaults.
//!
//! ## Loading Order
//!
//! 1. `FLEET_WATER_CONFIG` environment variable (path to TOML file)
//! 2. `fleet_water.toml` in the current working directory
//! 3. Built-in defaults (the maritime corrosion/scaling table)
//!
//! ## Usage
//!
//! The engine never reads configuration from ambient state. Load once and
//! pass the thresholds down:
//!
//! ```ignore
//! let config = DashboardConfig::load();
//! let status = classifier::classify(Parameter::Nitrite, 1500.0, &config.thresholds);
//! ```

mod dashboard_config;
pub mod validation;

pub use dashboard_config::*;
