use crate::{Inventory, StoreError, StoreResult};
use lot_types::{Spot, SpotId, SpotType, Vehicle, VehicleCategory, VehicleId};
use serde::{Deserialize, Serialize};

/// In-memory inventory. Spot ids are dense and start at 1, so a spot lives
/// at index `id - 1`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemStore {
    spots: Vec<Spot>,
    vehicles: Vec<Vehicle>,
    next_vehicle_id: u64,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks the structural invariants of a deserialized inventory.
    pub fn validate(&self) -> StoreResult<()> {
        for (idx, spot) in self.spots.iter().enumerate() {
            if spot.id.0 != idx as u64 + 1 {
                return Err(StoreError::Corrupt(format!(
                    "spot at position {idx} has id {}",
                    spot.id
                )));
            }
            if let Some(occupant) = spot.occupant {
                if self.position(occupant).is_err() {
                    return Err(StoreError::Corrupt(format!(
                        "spot {} held by unknown vehicle {occupant}",
                        spot.id
                    )));
                }
            }
        }
        if !self.vehicles.windows(2).all(|w| w[0].id < w[1].id) {
            return Err(StoreError::Corrupt("vehicle records out of order".into()));
        }
        if let Some(last) = self.vehicles.last() {
            if last.id.0 > self.next_vehicle_id {
                return Err(StoreError::Corrupt(format!(
                    "vehicle {} is ahead of the id counter",
                    last.id
                )));
            }
        }
        Ok(())
    }

    fn spot(&self, id: SpotId) -> StoreResult<&Spot> {
        id.0.checked_sub(1)
            .and_then(|idx| self.spots.get(idx as usize))
            .ok_or(StoreError::SpotNotFound(id))
    }

    fn spot_mut(&mut self, id: SpotId) -> StoreResult<&mut Spot> {
        id.0.checked_sub(1)
            .and_then(|idx| self.spots.get_mut(idx as usize))
            .ok_or(StoreError::SpotNotFound(id))
    }

    fn position(&self, id: VehicleId) -> Result<usize, usize> {
        self.vehicles.binary_search_by_key(&id, |v| v.id)
    }

    fn free_of_type(&self, spot_type: SpotType) -> impl Iterator<Item = &Spot> {
        self.spots
            .iter()
            .filter(move |s| s.spot_type == spot_type && s.is_free())
    }
}

impl Inventory for MemStore {
    fn insert_spots(&mut self, spot_type: SpotType, count: u32) -> StoreResult<Vec<SpotId>> {
        let first = self.spots.len() as u64 + 1;
        let ids: Vec<SpotId> = (first..first + u64::from(count)).map(SpotId).collect();
        self.spots
            .extend(ids.iter().map(|id| Spot::new(*id, spot_type)));
        Ok(ids)
    }

    fn total_spots(&self, spot_type: SpotType) -> StoreResult<u64> {
        Ok(self
            .spots
            .iter()
            .filter(|s| s.spot_type == spot_type)
            .count() as u64)
    }

    fn free_spots_of_type(&self, spot_type: SpotType) -> StoreResult<Vec<Spot>> {
        Ok(self.free_of_type(spot_type).cloned().collect())
    }

    fn count_free(&self, spot_type: SpotType) -> StoreResult<u64> {
        Ok(self.free_of_type(spot_type).count() as u64)
    }

    fn spots_held_by(&self, vehicle: VehicleId) -> StoreResult<Vec<Spot>> {
        Ok(self
            .spots
            .iter()
            .filter(|s| s.occupant == Some(vehicle))
            .cloned()
            .collect())
    }

    fn assign(&mut self, spots: &[SpotId], vehicle: VehicleId) -> StoreResult<()> {
        for (idx, id) in spots.iter().enumerate() {
            if let Some(occupant) = self.spot(*id)?.occupant {
                return Err(StoreError::SpotAlreadyOccupied {
                    spot: *id,
                    occupant,
                });
            }
            if spots[..idx].contains(id) {
                return Err(StoreError::SpotAlreadyOccupied {
                    spot: *id,
                    occupant: vehicle,
                });
            }
        }
        for id in spots {
            self.spot_mut(*id)?.occupant = Some(vehicle);
        }
        Ok(())
    }

    fn release(&mut self, spots: &[SpotId]) -> StoreResult<()> {
        for id in spots {
            self.spot(*id)?;
        }
        for id in spots {
            self.spot_mut(*id)?.occupant = None;
        }
        Ok(())
    }

    fn create_vehicle(&mut self, category: VehicleCategory) -> StoreResult<Vehicle> {
        self.next_vehicle_id += 1;
        let vehicle = Vehicle {
            id: VehicleId(self.next_vehicle_id),
            category,
        };
        self.vehicles.push(vehicle);
        Ok(vehicle)
    }

    fn vehicle(&self, id: VehicleId) -> StoreResult<Option<Vehicle>> {
        Ok(self.position(id).ok().map(|idx| self.vehicles[idx]))
    }

    fn delete_vehicle(&mut self, id: VehicleId) -> StoreResult<bool> {
        match self.position(id) {
            Ok(idx) => {
                self.vehicles.remove(idx);
                Ok(true)
            }
            Err(_) => Ok(false),
        }
    }

    fn vehicles(&self) -> StoreResult<Vec<Vehicle>> {
        Ok(self.vehicles.clone())
    }
}
