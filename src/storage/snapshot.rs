//! JSON snapshot of all records handed over by the data-entry layer.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::types::{ChemicalAddition, Fleet, Measurement, Ship};

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error reading {}: {}", .0.display(), .1)]
    Io(PathBuf, std::io::Error),

    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Point-in-time copy of every fleet, ship and record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub fleets: Vec<Fleet>,
    #[serde(default)]
    pub ships: Vec<Ship>,
    #[serde(default)]
    pub measurements: Vec<Measurement>,
    #[serde(default)]
    pub chemical_additions: Vec<ChemicalAddition>,
}

impl Snapshot {
    pub fn from_json_str(json: &str) -> Result<Self, StorageError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a snapshot file.
    pub fn load_from_file(path: &Path) -> Result<Self, StorageError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| StorageError::Io(path.to_path_buf(), e))?;
        let snapshot = Self::from_json_str(&contents)?;
        info!(
            path = %path.display(),
            fleets = snapshot.fleets.len(),
            ships = snapshot.ships.len(),
            measurements = snapshot.measurements.len(),
            additions = snapshot.chemical_additions.len(),
            "Loaded snapshot"
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_camel_case_snapshot() {
        let json = r#"{
            "fleets": [{ "id": "F1", "name": "Baltic", "shipIds": ["S1"] }],
            "ships": [{ "id": "S1", "name": "Baltic Explorer", "fleetId": "F1", "imoNumber": "9321483" }],
            "measurements": [
                { "date": "2024-03-01", "shipId": "S1", "nitrite": 800, "chloride": 120, "pH": 7.8, "totalHardness": 220 }
            ],
            "chemicalAdditions": [
                { "date": "2024-03-02", "shipId": "S1", "chemical": "Nitrite inhibitor", "amount": 4, "unit": "L" }
            ]
        }"#;
        let snapshot = Snapshot::from_json_str(json).unwrap();
        assert_eq!(snapshot.fleets[0].ship_ids, vec!["S1"]);
        assert_eq!(snapshot.ships[0].imo_number.as_deref(), Some("9321483"));
        assert_eq!(snapshot.measurements[0].total_hardness, 220.0);
        assert_eq!(snapshot.chemical_additions[0].amount, 4.0);
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let snapshot = Snapshot::from_json_str("{}").unwrap();
        assert_eq!(snapshot, Snapshot::default());
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(matches!(
            Snapshot::from_json_str("{ not json"),
            Err(StorageError::Json(_))
        ));
    }
}
