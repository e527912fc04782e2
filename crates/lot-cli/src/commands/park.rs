use anyhow::Result;
use lot_types::VehicleCategory;

use crate::opts::LotOpts;
use crate::output::print_success;

use super::{describe_spots, open_lot};

pub fn cmd_park(opts: &LotOpts, category: &str) -> Result<()> {
    let category: VehicleCategory = category.parse()?;
    let (lot, warnings) = open_lot(opts)?;
    let parked = lot.try_park(category)?;

    let human = format!(
        "parked {} as vehicle {} on spots {}",
        parked.vehicle.category,
        parked.vehicle.id,
        describe_spots(&parked.spots)
    );
    print_success(opts, serde_json::to_value(&parked)?, human, warnings)
}
