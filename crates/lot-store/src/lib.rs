//! Spot inventory storage abstractions plus in-memory and filesystem backends.

mod fs_store;
mod mem_store;

pub use fs_store::FsStore;
pub use mem_store::MemStore;

use lot_types::{Spot, SpotId, SpotType, Vehicle, VehicleCategory, VehicleId};
use std::{io, path::PathBuf};

pub type StoreResult<T> = Result<T, StoreError>;

/// Trait implemented by all spot inventory stores.
///
/// Stores do no locking of their own: callers serialize access, so a
/// sequence of reads followed by mutations observes a consistent view.
pub trait Inventory: Send {
    /// Bulk-inserts `count` free spots of one type, returning their ids.
    fn insert_spots(&mut self, spot_type: SpotType, count: u32) -> StoreResult<Vec<SpotId>>;
    fn total_spots(&self, spot_type: SpotType) -> StoreResult<u64>;

    /// Free spots of a type in ascending id order.
    fn free_spots_of_type(&self, spot_type: SpotType) -> StoreResult<Vec<Spot>>;
    fn count_free(&self, spot_type: SpotType) -> StoreResult<u64>;
    fn spots_held_by(&self, vehicle: VehicleId) -> StoreResult<Vec<Spot>>;

    /// Sets the occupant of every named spot. Nothing changes unless all
    /// spots exist and are free.
    fn assign(&mut self, spots: &[SpotId], vehicle: VehicleId) -> StoreResult<()>;
    /// Clears the occupant of every named spot; already free spots are left alone.
    fn release(&mut self, spots: &[SpotId]) -> StoreResult<()>;

    fn create_vehicle(&mut self, category: VehicleCategory) -> StoreResult<Vehicle>;
    fn vehicle(&self, id: VehicleId) -> StoreResult<Option<Vehicle>>;
    /// Removes a vehicle record; returns whether it existed.
    fn delete_vehicle(&mut self, id: VehicleId) -> StoreResult<bool>;
    /// All recorded vehicles in ascending id order.
    fn vehicles(&self) -> StoreResult<Vec<Vehicle>>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("parking spot {0} not found")]
    SpotNotFound(SpotId),
    #[error("parking spot {spot} already occupied by vehicle {occupant}")]
    SpotAlreadyOccupied { spot: SpotId, occupant: VehicleId },
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("corrupt inventory: {0}")]
    Corrupt(String),
}

pub(crate) fn io_error(path: impl Into<PathBuf>, err: io::Error) -> StoreError {
    StoreError::Io {
        path: path.into(),
        source: err,
    }
}
