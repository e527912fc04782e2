use std::sync::{Mutex, MutexGuard};

use lot_store::Inventory;
use lot_types::{ParkedVehicle, ReleasedVehicle, SpotType, VehicleCategory, VehicleId};

use crate::config::{LotConfig, seed_inventory};
use crate::error::KernelError;
use crate::{allocator, query, release};

/// Owns the inventory and serializes every operation on it.
///
/// One lock covers the whole inventory. Each call holds it from the first
/// read to the last write, so feasibility checks and assignments of
/// concurrent callers never interleave.
#[derive(Debug)]
pub struct ParkingLot<S> {
    store: Mutex<S>,
}

impl<S: Inventory> ParkingLot<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// Wraps `store` after seeding it with `config`.
    pub fn seeded(mut store: S, config: &LotConfig) -> Result<Self, KernelError> {
        seed_inventory(&mut store, config)?;
        Ok(Self::new(store))
    }

    fn lock(&self) -> Result<MutexGuard<'_, S>, KernelError> {
        self.store.lock().map_err(|_| KernelError::LockPoisoned)
    }

    pub fn seed(&self, config: &LotConfig) -> Result<u64, KernelError> {
        seed_inventory(&mut *self.lock()?, config)
    }

    pub fn try_park(&self, category: VehicleCategory) -> Result<ParkedVehicle, KernelError> {
        allocator::try_park(&mut *self.lock()?, category)
    }

    pub fn release_vehicle(&self, id: VehicleId) -> Result<ReleasedVehicle, KernelError> {
        release::release_vehicle(&mut *self.lock()?, id)
    }

    pub fn count_available(&self, spot_type: SpotType) -> Result<u64, KernelError> {
        query::count_available(&*self.lock()?, spot_type)
    }

    pub fn all_spots_taken(&self, category: VehicleCategory) -> Result<bool, KernelError> {
        query::all_spots_taken(&*self.lock()?, category)
    }

    pub fn list_parked_vehicles(&self) -> Result<Vec<ParkedVehicle>, KernelError> {
        query::list_parked_vehicles(&*self.lock()?)
    }

    pub fn into_inner(self) -> Result<S, KernelError> {
        self.store.into_inner().map_err(|_| KernelError::LockPoisoned)
    }
}
