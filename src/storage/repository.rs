//! FleetRepository trait: pluggable read-only record source
//!
//! - `InMemoryRepository`: indexed snapshot, used by the CLI and tests
//! - a database-backed store can implement the same trait

use std::collections::HashMap;

use tracing::debug;

use super::Snapshot;
use crate::types::{ChemicalAddition, Fleet, Measurement, Ship};

/// Read access to fleet, ship and measurement records.
///
/// Implementations return owned snapshots; callers never mutate records
/// through this trait. Unknown ids yield `None` or empty collections.
pub trait FleetRepository: Send + Sync {
    fn fleet(&self, fleet_id: &str) -> Option<Fleet>;

    fn ship(&self, ship_id: &str) -> Option<Ship>;

    /// Ships belonging to a fleet: listed `ship_ids` first, then any ship
    /// whose `fleet_id` names the fleet, without duplicates. A listed ship
    /// whose own `fleet_id` names another fleet is not a member.
    fn ships_in_fleet(&self, fleet_id: &str) -> Vec<Ship>;

    /// Measurement history of a ship in chronological order.
    fn measurements(&self, ship_id: &str) -> Vec<Measurement>;

    /// Chemical additions of a ship in chronological order.
    fn chemical_additions(&self, ship_id: &str) -> Vec<ChemicalAddition>;

    /// Backend name for logging
    fn backend_name(&self) -> &'static str;
}

/// Snapshot indexed by id, immutable after construction.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    fleets: HashMap<String, Fleet>,
    ships: Vec<Ship>,
    measurements: HashMap<String, Vec<Measurement>>,
    additions: HashMap<String, Vec<ChemicalAddition>>,
}

impl InMemoryRepository {
    pub fn new(snapshot: Snapshot) -> Self {
        let Snapshot {
            fleets,
            ships,
            measurements,
            chemical_additions,
        } = snapshot;

        let mut by_ship: HashMap<String, Vec<Measurement>> = HashMap::new();
        for m in measurements {
            by_ship.entry(m.ship_id.clone()).or_default().push(m);
        }
        // Stable sort keeps recording order for same-day entries
        for history in by_ship.values_mut() {
            history.sort_by_key(|m| m.date);
        }

        let mut additions: HashMap<String, Vec<ChemicalAddition>> = HashMap::new();
        for a in chemical_additions {
            additions.entry(a.ship_id.clone()).or_default().push(a);
        }
        for history in additions.values_mut() {
            history.sort_by_key(|a| a.date);
        }

        debug!(
            fleets = fleets.len(),
            ships = ships.len(),
            "In-memory repository built"
        );

        Self {
            fleets: fleets.into_iter().map(|f| (f.id.clone(), f)).collect(),
            ships,
            measurements: by_ship,
            additions,
        }
    }
}

impl FleetRepository for InMemoryRepository {
    fn fleet(&self, fleet_id: &str) -> Option<Fleet> {
        self.fleets.get(fleet_id).cloned()
    }

    fn ship(&self, ship_id: &str) -> Option<Ship> {
        self.ships.iter().find(|s| s.id == ship_id).cloned()
    }

    fn ships_in_fleet(&self, fleet_id: &str) -> Vec<Ship> {
        let mut members: Vec<Ship> = Vec::new();
        let listed = self
            .fleets
            .get(fleet_id)
            .map(|f| f.ship_ids.as_slice())
            .unwrap_or_default();

        for id in listed {
            match self.ship(id) {
                Some(ship) if ship.fleet_id != fleet_id => debug!(
                    fleet_id,
                    ship_id = %id,
                    owner = %ship.fleet_id,
                    "Fleet lists ship owned by another fleet, skipping"
                ),
                Some(ship) => {
                    if !members.iter().any(|m| m.id == ship.id) {
                        members.push(ship);
                    }
                }
                None => debug!(fleet_id, ship_id = %id, "Fleet lists unknown ship"),
            }
        }
        for ship in self.ships.iter().filter(|s| s.fleet_id == fleet_id) {
            if !members.iter().any(|m| m.id == ship.id) {
                members.push(ship.clone());
            }
        }
        members
    }

    fn measurements(&self, ship_id: &str) -> Vec<Measurement> {
        self.measurements.get(ship_id).cloned().unwrap_or_default()
    }

    fn chemical_additions(&self, ship_id: &str) -> Vec<ChemicalAddition> {
        self.additions.get(ship_id).cloned().unwrap_or_default()
    }

    fn backend_name(&self) -> &'static str {
        "in-memory"
    }
}
