use anyhow::Result;
use lot_types::VehicleId;

use crate::opts::LotOpts;
use crate::output::print_success;

use super::open_lot;

pub fn cmd_leave(opts: &LotOpts, vehicle_id: u64) -> Result<()> {
    let (lot, warnings) = open_lot(opts)?;
    let released = lot.release_vehicle(VehicleId(vehicle_id))?;

    let spots = released
        .freed_spots
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let human = format!(
        "{} {} left, freed spots {spots}",
        released.category, released.vehicle_id
    );
    print_success(opts, serde_json::to_value(&released)?, human, warnings)
}
