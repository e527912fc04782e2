//! Shared fixtures for kernel integration tests.
//!
//! Each integration test compiles this module separately, so some items may
//! look unused in one test file and be used by another.

#![allow(dead_code)]

use lot_kernel::{LotConfig, ParkingLot};
use lot_store::{Inventory, MemStore, StoreError, StoreResult};
use lot_types::{Spot, SpotId, SpotType, Vehicle, VehicleCategory, VehicleId};

pub fn layout(motorcycle: u32, compact: u32, regular: u32) -> LotConfig {
    LotConfig {
        motorcycle_spots: motorcycle,
        compact_spots: compact,
        regular_spots: regular,
    }
}

pub fn lot(motorcycle: u32, compact: u32, regular: u32) -> ParkingLot<MemStore> {
    ParkingLot::seeded(MemStore::new(), &layout(motorcycle, compact, regular)).expect("seed")
}

pub fn free_counts<S: Inventory>(lot: &ParkingLot<S>) -> [u64; 3] {
    SpotType::ALL.map(|t| lot.count_available(t).expect("count"))
}

/// Spot types held by a vehicle according to the parked listing, sorted.
pub fn held_types<S: Inventory>(lot: &ParkingLot<S>, id: VehicleId) -> Vec<SpotType> {
    let mut types: Vec<SpotType> = lot
        .list_parked_vehicles()
        .expect("list")
        .into_iter()
        .find(|p| p.vehicle.id == id)
        .expect("vehicle is parked")
        .spots
        .into_iter()
        .map(|s| s.spot_type)
        .collect();
    types.sort();
    types
}

/// Wraps a [`MemStore`] and fails the `n`-th call to `assign` (1-based).
#[derive(Debug, Default)]
pub struct FlakyStore {
    pub inner: MemStore,
    pub fail_assign_at: Option<usize>,
    pub fail_delete: bool,
    assign_calls: usize,
}

impl FlakyStore {
    pub fn new(inner: MemStore) -> Self {
        Self {
            inner,
            ..Self::default()
        }
    }
}

impl Inventory for FlakyStore {
    fn insert_spots(&mut self, spot_type: SpotType, count: u32) -> StoreResult<Vec<SpotId>> {
        self.inner.insert_spots(spot_type, count)
    }

    fn total_spots(&self, spot_type: SpotType) -> StoreResult<u64> {
        self.inner.total_spots(spot_type)
    }

    fn free_spots_of_type(&self, spot_type: SpotType) -> StoreResult<Vec<Spot>> {
        self.inner.free_spots_of_type(spot_type)
    }

    fn count_free(&self, spot_type: SpotType) -> StoreResult<u64> {
        self.inner.count_free(spot_type)
    }

    fn spots_held_by(&self, vehicle: VehicleId) -> StoreResult<Vec<Spot>> {
        self.inner.spots_held_by(vehicle)
    }

    fn assign(&mut self, spots: &[SpotId], vehicle: VehicleId) -> StoreResult<()> {
        self.assign_calls += 1;
        if self.fail_assign_at == Some(self.assign_calls) {
            return Err(StoreError::SpotAlreadyOccupied {
                spot: spots[0],
                occupant: VehicleId(u64::MAX),
            });
        }
        self.inner.assign(spots, vehicle)
    }

    fn release(&mut self, spots: &[SpotId]) -> StoreResult<()> {
        self.inner.release(spots)
    }

    fn create_vehicle(&mut self, category: VehicleCategory) -> StoreResult<Vehicle> {
        self.inner.create_vehicle(category)
    }

    fn vehicle(&self, id: VehicleId) -> StoreResult<Option<Vehicle>> {
        self.inner.vehicle(id)
    }

    fn delete_vehicle(&mut self, id: VehicleId) -> StoreResult<bool> {
        if self.fail_delete {
            return Err(StoreError::Corrupt("delete disabled".into()));
        }
        self.inner.delete_vehicle(id)
    }

    fn vehicles(&self) -> StoreResult<Vec<Vehicle>> {
        self.inner.vehicles()
    }
}
