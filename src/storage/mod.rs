//! Record access for the engine
//!
//! The engine reads ships, fleets and their records only through the
//! `FleetRepository` trait, so aggregation depends on passed-in snapshots
//! rather than ambient state.

pub mod repository;
pub mod snapshot;

pub use repository::{FleetRepository, InMemoryRepository};
pub use snapshot::{Snapshot, StorageError};
