//! Ships and the fleets that own them

use serde::{Deserialize, Serialize};

/// A vessel reporting water-chemistry measurements.
///
/// Descriptive fields (IMO number, type, flag) are carried for display and
/// never take part in classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ship {
    pub id: String,
    pub name: String,
    pub fleet_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imo_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vessel_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
}

/// An organizational grouping of ships sharing reporting and aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fleet {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub ship_ids: Vec<String>,
}
