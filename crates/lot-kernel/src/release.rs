use lot_store::Inventory;
use lot_types::{ReleasedVehicle, SpotId, VehicleId};

use crate::error::KernelError;

/// Frees every spot held by `id` and deletes the vehicle record.
///
/// A second call with the same id fails with [`KernelError::NotFound`].
pub fn release_vehicle<S: Inventory + ?Sized>(
    store: &mut S,
    id: VehicleId,
) -> Result<ReleasedVehicle, KernelError> {
    let vehicle = store.vehicle(id)?.ok_or(KernelError::NotFound(id))?;
    let held: Vec<SpotId> = store.spots_held_by(id)?.iter().map(|s| s.id).collect();

    store.release(&held)?;
    if let Err(err) = store.delete_vehicle(id) {
        // put the spots back so the vehicle is not left parked on nothing
        if let Err(restore) = store.assign(&held, id) {
            log::warn!("vehicle {id}: cannot restore spots {held:?}: {restore}");
        }
        return Err(err.into());
    }

    log::debug!("vehicle {id} left, freed spots {held:?}");
    Ok(ReleasedVehicle {
        vehicle_id: vehicle.id,
        category: vehicle.category,
        parked: false,
        freed_spots: held,
    })
}
