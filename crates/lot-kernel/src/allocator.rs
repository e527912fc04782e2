//! All-or-nothing allocation of a category's spot bundle.

use std::fmt;

use lot_store::{Inventory, StoreError, StoreResult};
use lot_types::{
    ParkedVehicle, RequirementBundle, Spot, SpotId, SpotType, VehicleCategory, VehicleId,
    requirements_for,
};
use serde::Serialize;

use crate::error::{CapacityError, KernelError};

/// A bundle entry the current free pool cannot satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shortfall {
    pub spot_type: SpotType,
    pub required: u32,
    pub free: u64,
}

impl fmt::Display for Shortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} needs {}, {} free",
            self.spot_type, self.required, self.free
        )
    }
}

/// Evaluates every entry of the bundle; never stops at the first satisfied
/// or unsatisfied type.
fn shortfalls<S: Inventory + ?Sized>(
    store: &S,
    bundle: RequirementBundle,
) -> StoreResult<Vec<Shortfall>> {
    let mut missing = Vec::new();
    for req in bundle.iter() {
        let free = store.count_free(req.spot_type)?;
        if free < u64::from(req.count) {
            missing.push(Shortfall {
                spot_type: req.spot_type,
                required: req.count,
                free,
            });
        }
    }
    Ok(missing)
}

/// Fails with [`KernelError::Capacity`] unless every bundle entry of the
/// category fits in the current free pool.
pub fn check_feasibility<S: Inventory + ?Sized>(
    store: &S,
    category: VehicleCategory,
) -> Result<RequirementBundle, KernelError> {
    let bundle = requirements_for(category);
    let shortfalls = shortfalls(store, bundle)?;
    if shortfalls.is_empty() {
        Ok(bundle)
    } else {
        Err(CapacityError {
            category,
            shortfalls,
        }
        .into())
    }
}

/// Parks a vehicle of `category`, assigning its whole bundle or nothing.
///
/// The caller must hold exclusive access to `store` for the duration of the
/// call. Any store failure after the vehicle record exists is rolled back
/// before the error is returned.
pub fn try_park<S: Inventory + ?Sized>(
    store: &mut S,
    category: VehicleCategory,
) -> Result<ParkedVehicle, KernelError> {
    let bundle = match check_feasibility(&*store, category) {
        Ok(bundle) => bundle,
        Err(err) => {
            log::debug!("rejecting {category}: {err}");
            return Err(err);
        }
    };

    let vehicle = store
        .create_vehicle(category)
        .map_err(|source| KernelError::ParkFailed { category, source })?;
    match assign_bundle(store, bundle, vehicle.id) {
        Ok(spots) => {
            log::debug!(
                "parked {category} as vehicle {} on spots {:?}",
                vehicle.id,
                spots.iter().map(|s| s.id.0).collect::<Vec<_>>()
            );
            Ok(ParkedVehicle { vehicle, spots })
        }
        Err(source) => {
            roll_back(store, vehicle.id);
            Err(KernelError::ParkFailed { category, source })
        }
    }
}

fn assign_bundle<S: Inventory + ?Sized>(
    store: &mut S,
    bundle: RequirementBundle,
    vehicle: VehicleId,
) -> StoreResult<Vec<Spot>> {
    let mut assigned = Vec::with_capacity(bundle.total() as usize);
    for req in bundle.iter() {
        let picked: Vec<Spot> = store
            .free_spots_of_type(req.spot_type)?
            .into_iter()
            .take(req.count as usize)
            .collect();
        if picked.len() < req.count as usize {
            return Err(StoreError::Corrupt(format!(
                "free {} spots shrank to {} during allocation",
                req.spot_type,
                picked.len()
            )));
        }
        let ids: Vec<SpotId> = picked.iter().map(|s| s.id).collect();
        store.assign(&ids, vehicle)?;
        assigned.extend(picked.into_iter().map(|mut spot| {
            spot.occupant = Some(vehicle);
            spot
        }));
    }
    Ok(assigned)
}

/// Frees whatever the half-parked vehicle holds and drops its record.
/// Failures here are logged; the caller reports the error that triggered it.
fn roll_back<S: Inventory + ?Sized>(store: &mut S, vehicle: VehicleId) {
    let held = match store.spots_held_by(vehicle) {
        Ok(spots) => spots.into_iter().map(|s| s.id).collect::<Vec<_>>(),
        Err(err) => {
            log::warn!("rollback of vehicle {vehicle}: cannot list held spots: {err}");
            Vec::new()
        }
    };
    if !held.is_empty() {
        if let Err(err) = store.release(&held) {
            log::warn!("rollback of vehicle {vehicle}: cannot release {held:?}: {err}");
        }
    }
    if let Err(err) = store.delete_vehicle(vehicle) {
        log::warn!("rollback of vehicle {vehicle}: cannot delete record: {err}");
    }
}
