//! Dashboard Configuration - water-chemistry thresholds as TOML values
//!
//! Each struct implements `Default` with the standard maritime corrosion and
//! scaling limits, so behavior is unchanged when no config file is present.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "FLEET_WATER_CONFIG";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "fleet_water.toml";

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for a dashboard deployment.
///
/// Load with `DashboardConfig::load()` which searches:
/// 1. `$FLEET_WATER_CONFIG` env var
/// 2. `./fleet_water.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Display metadata
    #[serde(default)]
    pub fleet: FleetInfo,

    /// Canonical parameter threshold table
    #[serde(default)]
    pub thresholds: ThresholdConfig,

    /// Monthly report grid
    #[serde(default)]
    pub report: ReportConfig,

    /// Analysis scheduling
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

impl DashboardConfig {
    /// Load configuration using the standard search order.
    pub fn load() -> Self {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), fleet = %config.fleet.name, "Loaded dashboard config from {}", CONFIG_ENV_VAR);
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from {}, falling back", CONFIG_ENV_VAR);
                    }
                }
            } else {
                warn!(path = %path, "{} points to non-existent file, falling back", CONFIG_ENV_VAR);
            }
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!(fleet = %config.fleet.name, "Loaded dashboard config from ./{}", LOCAL_CONFIG_FILE);
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./{}, using defaults", LOCAL_CONFIG_FILE);
                }
            }
        }

        info!("No {} found, using built-in defaults", LOCAL_CONFIG_FILE);
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::InvalidToml(e) => ConfigError::Parse(path.to_path_buf(), e),
            other => other,
        })
    }

    /// Parse and validate a TOML document.
    ///
    /// Unknown keys only produce warnings; range and escalation problems
    /// are errors.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        for w in super::validation::validate_unknown_keys(contents) {
            warn!("{}", w);
        }

        let config: Self = toml::from_str(contents).map_err(ConfigError::InvalidToml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize current config to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Validate all thresholds for internal consistency.
    ///
    /// Rules:
    /// - every value is finite
    /// - lower band edge <= upper band edge for each parameter
    /// - ppm limits are non-negative
    /// - report and schedule settings are in range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.thresholds;
        let mut errors: Vec<String> = Vec::new();

        Self::check_band(
            t.nitrite.low_below_ppm,
            t.nitrite.high_above_ppm,
            "nitrite.low_below_ppm",
            "nitrite.high_above_ppm",
            &mut errors,
        );
        Self::check_band(
            t.chloride.elevated_above_ppm,
            t.chloride.critical_above_ppm,
            "chloride.elevated_above_ppm",
            "chloride.critical_above_ppm",
            &mut errors,
        );
        Self::check_band(
            t.ph.low_below,
            t.ph.high_above,
            "ph.low_below",
            "ph.high_above",
            &mut errors,
        );
        Self::check_band(
            t.total_hardness.high_above_ppm,
            t.total_hardness.critical_above_ppm,
            "total_hardness.high_above_ppm",
            "total_hardness.critical_above_ppm",
            &mut errors,
        );

        if self.schedule.analysis_interval_days == 0 {
            errors.push("schedule.analysis_interval_days must be > 0".to_string());
        }

        let (range_errors, range_warnings) = super::validation::validate_physical_ranges(self);
        errors.extend(range_errors);
        for w in &range_warnings {
            warn!("{}", w);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    fn check_band(
        lower: f64,
        upper: f64,
        lower_name: &str,
        upper_name: &str,
        errors: &mut Vec<String>,
    ) {
        // NaN/Inf comparisons silently pass, catch them explicitly
        if !lower.is_finite() || !upper.is_finite() {
            errors.push(format!(
                "{lower_name}/{upper_name}: values must be finite (got {lower}, {upper})"
            ));
            return;
        }
        if upper < lower {
            errors.push(format!(
                "{upper_name} ({upper:.2}) must be >= {lower_name} ({lower:.2})"
            ));
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O error ({}): {}", .0.display(), .1)]
    Io(PathBuf, std::io::Error),

    #[error("Config parse error ({}): {}", .0.display(), .1)]
    Parse(PathBuf, toml::de::Error),

    #[error("Config parse error: {0}")]
    InvalidToml(toml::de::Error),

    #[error("Config serialization error: {0}")]
    Serialize(toml::ser::Error),

    #[error("Config validation failed:\n  - {}", .0.join("\n  - "))]
    Validation(Vec<String>),
}

// ============================================================================
// Fleet Info
// ============================================================================

/// Identification metadata, not used for logic but shown in logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetInfo {
    #[serde(default = "default_fleet_name")]
    pub name: String,
}

fn default_fleet_name() -> String {
    "DEFAULT".to_string()
}

impl Default for FleetInfo {
    fn default() -> Self {
        Self {
            name: default_fleet_name(),
        }
    }
}

// ============================================================================
// Thresholds
// ============================================================================

/// The canonical parameter threshold table.
///
/// Every classification, alert, advisory and report cell consults this one
/// table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThresholdConfig {
    #[serde(default)]
    pub nitrite: NitriteThresholds,
    #[serde(default)]
    pub chloride: ChlorideThresholds,
    #[serde(default)]
    pub ph: PhThresholds,
    #[serde(default)]
    pub total_hardness: HardnessThresholds,
}

/// Nitrite inhibitor band (ppm). Both edges belong to the optimal band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NitriteThresholds {
    /// Below this the system is under-inhibited (corrosion risk)
    #[serde(default = "default_nitrite_low")]
    pub low_below_ppm: f64,
    /// Above this the system is over-dosed
    #[serde(default = "default_nitrite_high")]
    pub high_above_ppm: f64,
}

fn default_nitrite_low() -> f64 { 1000.0 }
fn default_nitrite_high() -> f64 { 2400.0 }

impl Default for NitriteThresholds {
    fn default() -> Self {
        Self {
            low_below_ppm: default_nitrite_low(),
            high_above_ppm: default_nitrite_high(),
        }
    }
}

/// Chloride ingress limits (ppm). Values equal to a limit stay in the lower band.
///
/// Some dashboard views historically colored chloride critical from 100 ppm;
/// 80 ppm is the single canonical cutoff here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChlorideThresholds {
    #[serde(default = "default_chloride_elevated")]
    pub elevated_above_ppm: f64,
    #[serde(default = "default_chloride_critical")]
    pub critical_above_ppm: f64,
}

fn default_chloride_elevated() -> f64 { 50.0 }
fn default_chloride_critical() -> f64 { 80.0 }

impl Default for ChlorideThresholds {
    fn default() -> Self {
        Self {
            elevated_above_ppm: default_chloride_elevated(),
            critical_above_ppm: default_chloride_critical(),
        }
    }
}

/// pH band. Both edges belong to the good band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhThresholds {
    #[serde(default = "default_ph_low")]
    pub low_below: f64,
    #[serde(default = "default_ph_high")]
    pub high_above: f64,
}

fn default_ph_low() -> f64 { 8.3 }
fn default_ph_high() -> f64 { 10.0 }

impl Default for PhThresholds {
    fn default() -> Self {
        Self {
            low_below: default_ph_low(),
            high_above: default_ph_high(),
        }
    }
}

/// Total hardness limits (ppm as CaCO3). Values equal to a limit stay in the lower band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HardnessThresholds {
    #[serde(default = "default_hardness_high")]
    pub high_above_ppm: f64,
    #[serde(default = "default_hardness_critical")]
    pub critical_above_ppm: f64,
}

fn default_hardness_high() -> f64 { 180.0 }
fn default_hardness_critical() -> f64 { 200.0 }

impl Default for HardnessThresholds {
    fn default() -> Self {
        Self {
            high_above_ppm: default_hardness_high(),
            critical_above_ppm: default_hardness_critical(),
        }
    }
}

// ============================================================================
// Report & Schedule
// ============================================================================

/// Monthly report grid settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Fixed number of day columns (28-31). When unset the grid follows the
    /// real calendar length of the month.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_in_period: Option<u32>,
}

/// Analysis cadence used to project the next analysis date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default = "default_analysis_interval")]
    pub analysis_interval_days: u32,
}

fn default_analysis_interval() -> u32 { 7 }

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            analysis_interval_days: default_analysis_interval(),
        }
    }
}
