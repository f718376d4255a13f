//! Dashboard facade
//!
//! Binds a `FleetRepository` and a `DashboardConfig` to the pure engine
//! functions. Each call reads fresh records from the repository and
//! recomputes; nothing derived is stored on the facade.

use tracing::warn;

use crate::aggregation::{
    fleet_trend, latest_measurement, summarize_fleet, FleetMember, ShipHistory,
};
use crate::config::{DashboardConfig, ThresholdConfig};
use crate::report::{build_monthly_report, build_ship_analysis, MonthlyReport, ReportError};
use crate::storage::FleetRepository;
use crate::types::{FleetSummary, Measurement, Ship, ShipAnalysis, TrendPoint};

pub struct Dashboard<R> {
    repository: R,
    config: DashboardConfig,
}

impl<R: FleetRepository> Dashboard<R> {
    pub fn new(repository: R, config: DashboardConfig) -> Self {
        tracing::info!(
            backend = repository.backend_name(),
            fleet = %config.fleet.name,
            "Dashboard ready"
        );
        Self { repository, config }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn thresholds(&self) -> &ThresholdConfig {
        &self.config.thresholds
    }

    /// Current analysis card of a ship; `None` for unknown or unreported ships.
    pub fn ship_analysis(&self, ship_id: &str) -> Option<ShipAnalysis> {
        let Some(ship) = self.repository.ship(ship_id) else {
            warn!(ship_id, "Unknown ship");
            return None;
        };
        self.analysis_for(&ship)
    }

    /// Analysis cards of every reporting ship in a fleet, in membership order.
    pub fn fleet_ship_analyses(&self, fleet_id: &str) -> Vec<ShipAnalysis> {
        self.members(fleet_id)
            .iter()
            .filter_map(|ship| self.analysis_for(ship))
            .collect()
    }

    /// Fleet summary; an unknown fleet yields an empty `No Data` summary.
    pub fn fleet_summary(&self, fleet_id: &str) -> FleetSummary {
        let ships = self.members(fleet_id);
        let histories: Vec<Vec<Measurement>> = ships
            .iter()
            .map(|s| self.repository.measurements(&s.id))
            .collect();

        let members: Vec<FleetMember<'_>> = ships
            .iter()
            .zip(&histories)
            .map(|(ship, history)| FleetMember {
                ship_id: &ship.id,
                current: latest_measurement(history),
            })
            .collect();

        summarize_fleet(&members, self.thresholds())
    }

    /// Fleet trend series over the full history of every member ship.
    pub fn fleet_trend(&self, fleet_id: &str) -> Vec<TrendPoint> {
        let ships = self.members(fleet_id);
        let histories: Vec<Vec<Measurement>> = ships
            .iter()
            .map(|s| self.repository.measurements(&s.id))
            .collect();

        let series: Vec<ShipHistory<'_>> = ships
            .iter()
            .zip(&histories)
            .map(|(ship, measurements)| ShipHistory {
                ship_id: &ship.id,
                measurements,
            })
            .collect();

        fleet_trend(&series, self.thresholds())
    }

    /// Monthly grid for a ship. Unknown ships yield an all-empty grid.
    pub fn monthly_report(
        &self,
        ship_id: &str,
        month: u32,
        year: i32,
    ) -> Result<MonthlyReport, ReportError> {
        if self.repository.ship(ship_id).is_none() {
            warn!(ship_id, "Monthly report requested for unknown ship");
        }
        build_monthly_report(
            ship_id,
            month,
            year,
            &self.repository.measurements(ship_id),
            &self.repository.chemical_additions(ship_id),
            &self.config.report,
        )
    }

    fn members(&self, fleet_id: &str) -> Vec<Ship> {
        if self.repository.fleet(fleet_id).is_none() {
            warn!(fleet_id, "Unknown fleet");
        }
        self.repository.ships_in_fleet(fleet_id)
    }

    fn analysis_for(&self, ship: &Ship) -> Option<ShipAnalysis> {
        build_ship_analysis(
            ship,
            &self.repository.measurements(&ship.id),
            &self.repository.chemical_additions(&ship.id),
            &self.config,
        )
    }
}
