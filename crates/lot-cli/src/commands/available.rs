use anyhow::Result;
use lot_types::SpotType;
use serde_json::json;

use crate::opts::LotOpts;
use crate::output::print_success;

use super::open_lot;

pub fn cmd_available(opts: &LotOpts, spot_type: &str) -> Result<()> {
    let spot_type: SpotType = spot_type.parse()?;
    let (lot, warnings) = open_lot(opts)?;
    let free = lot.count_available(spot_type)?;

    print_success(
        opts,
        json!({ "type": spot_type, "free_spots": free }),
        free.to_string(),
        warnings,
    )
}
