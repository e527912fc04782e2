use anyhow::Result;
use lot_types::SpotType;
use serde_json::json;

use crate::opts::LotOpts;
use crate::output::print_success;

use super::{describe_spots, open_lot};

pub fn cmd_status(opts: &LotOpts) -> Result<()> {
    let (lot, warnings) = open_lot(opts)?;
    let parked = lot.list_parked_vehicles()?;
    let mut free = serde_json::Map::new();
    for spot_type in SpotType::ALL {
        free.insert(
            spot_type.to_string(),
            json!(lot.count_available(spot_type)?),
        );
    }

    let mut human = String::new();
    if parked.is_empty() {
        human.push_str("no vehicles parked");
    }
    for p in &parked {
        if !human.is_empty() {
            human.push('\n');
        }
        human.push_str(&format!(
            "{} {}: {}",
            p.vehicle.category,
            p.vehicle.id,
            describe_spots(&p.spots)
        ));
    }

    print_success(
        opts,
        json!({ "vehicles": parked, "free": free }),
        human,
        warnings,
    )
}
