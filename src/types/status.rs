//! Status categories: per-parameter classification, ship-level severity,
//! and the fleet/trend overall status which adds "No Data".

use serde::{Deserialize, Serialize};

// ============================================================================
// Parameter Status
// ============================================================================

/// Classification of a single parameter value.
///
/// Each parameter uses a subset of these categories:
/// - nitrite: low / optimal / high
/// - chloride: normal / elevated / critical
/// - pH: low / good / high
/// - total hardness: acceptable / high / critical
///
/// `Unknown` is the neutral result for parameter names outside the catalogue.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ParameterStatus {
    Low,
    Optimal,
    High,
    Normal,
    Elevated,
    Critical,
    Good,
    Acceptable,
    Unknown,
}

impl ParameterStatus {
    /// True when the value sits inside its target band (or is unclassified).
    pub fn is_in_range(self) -> bool {
        matches!(
            self,
            ParameterStatus::Optimal
                | ParameterStatus::Normal
                | ParameterStatus::Good
                | ParameterStatus::Acceptable
                | ParameterStatus::Unknown
        )
    }

    /// Ship-level severity this status contributes.
    ///
    /// Critical bands map to `Critical`, any other out-of-range band to
    /// `Attention`, in-range and unknown to `Good`.
    pub fn ship_status(self) -> ShipStatus {
        match self {
            ParameterStatus::Critical => ShipStatus::Critical,
            // The threshold table has no extreme-low band, so every low
            // reading is Attention rather than Critical
            ParameterStatus::Low | ParameterStatus::High | ParameterStatus::Elevated => {
                ShipStatus::Attention
            }
            ParameterStatus::Optimal
            | ParameterStatus::Normal
            | ParameterStatus::Good
            | ParameterStatus::Acceptable
            | ParameterStatus::Unknown => ShipStatus::Good,
        }
    }
}

impl std::fmt::Display for ParameterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParameterStatus::Low => write!(f, "low"),
            ParameterStatus::Optimal => write!(f, "optimal"),
            ParameterStatus::High => write!(f, "high"),
            ParameterStatus::Normal => write!(f, "normal"),
            ParameterStatus::Elevated => write!(f, "elevated"),
            ParameterStatus::Critical => write!(f, "critical"),
            ParameterStatus::Good => write!(f, "good"),
            ParameterStatus::Acceptable => write!(f, "acceptable"),
            ParameterStatus::Unknown => write!(f, "unknown"),
        }
    }
}

// ============================================================================
// Ship Status
// ============================================================================

/// Worst-case severity summarizing a ship's four parameters.
///
/// Ordering is the severity ranking: `Good < Attention < Critical`.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
pub enum ShipStatus {
    #[default]
    Good = 0,
    Attention = 1,
    Critical = 2,
}

impl ShipStatus {
    /// Worst status in the sequence, or `None` when it is empty.
    pub fn worst<I>(statuses: I) -> Option<Self>
    where
        I: IntoIterator<Item = ShipStatus>,
    {
        statuses.into_iter().max()
    }
}

impl std::fmt::Display for ShipStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShipStatus::Good => write!(f, "Good"),
            ShipStatus::Attention => write!(f, "Attention"),
            ShipStatus::Critical => write!(f, "Critical"),
        }
    }
}

// ============================================================================
// Overall Status
// ============================================================================

/// Status of an aggregate (fleet summary or trend point).
///
/// `NoData` is reported when no ship contributed a measurement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum OverallStatus {
    Good,
    Attention,
    Critical,
    #[default]
    #[serde(rename = "No Data")]
    NoData,
}

impl OverallStatus {
    /// Worst ship status present, or `NoData` for an empty sequence.
    pub fn from_ships<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = ShipStatus>,
    {
        ShipStatus::worst(statuses).map_or(OverallStatus::NoData, OverallStatus::from)
    }
}

impl From<ShipStatus> for OverallStatus {
    fn from(status: ShipStatus) -> Self {
        match status {
            ShipStatus::Good => OverallStatus::Good,
            ShipStatus::Attention => OverallStatus::Attention,
            ShipStatus::Critical => OverallStatus::Critical,
        }
    }
}

impl std::fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverallStatus::Good => write!(f, "Good"),
            OverallStatus::Attention => write!(f, "Attention"),
            OverallStatus::Critical => write!(f, "Critical"),
            OverallStatus::NoData => write!(f, "No Data"),
        }
    }
}
