use anyhow::Result;
use lot_types::{VehicleCategory, requirements_for};
use serde_json::json;

use crate::opts::LotOpts;
use crate::output::print_success;

use super::open_lot;

pub fn cmd_full(opts: &LotOpts, category: &str) -> Result<()> {
    let category: VehicleCategory = category.parse()?;
    let (lot, warnings) = open_lot(opts)?;
    let taken = lot.all_spots_taken(category)?;

    print_success(
        opts,
        json!({
            "category": category,
            "all_spots_taken": taken,
            "requires": requirements_for(category),
        }),
        taken.to_string(),
        warnings,
    )
}
