//! Read-only views over the inventory.

use lot_store::Inventory;
use lot_types::{ParkedVehicle, SpotType, VehicleCategory};

use crate::allocator::check_feasibility;
use crate::error::KernelError;

pub fn count_available<S: Inventory + ?Sized>(
    store: &S,
    spot_type: SpotType,
) -> Result<u64, KernelError> {
    Ok(store.count_free(spot_type)?)
}

/// True when a vehicle of `category` could not park right now.
pub fn all_spots_taken<S: Inventory + ?Sized>(
    store: &S,
    category: VehicleCategory,
) -> Result<bool, KernelError> {
    match check_feasibility(store, category) {
        Ok(_) => Ok(false),
        Err(KernelError::Capacity(_)) => Ok(true),
        Err(err) => Err(err),
    }
}

/// Every recorded vehicle joined with the spots it holds, in id order.
pub fn list_parked_vehicles<S: Inventory + ?Sized>(
    store: &S,
) -> Result<Vec<ParkedVehicle>, KernelError> {
    store
        .vehicles()?
        .into_iter()
        .map(|vehicle| -> Result<ParkedVehicle, KernelError> {
            Ok(ParkedVehicle {
                vehicle,
                spots: store.spots_held_by(vehicle.id)?,
            })
        })
        .collect()
}
