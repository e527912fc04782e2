//! CLI command handlers.

pub mod available;
pub mod full;
pub mod init;
pub mod leave;
pub mod park;
pub mod status;

use anyhow::{Context, Result};
use lot_kernel::ParkingLot;
use lot_store::{FsStore, Inventory};
use lot_types::{Spot, SpotType};

use crate::opts::LotOpts;

/// Open the lot inventory under the resolved directory.
///
/// Returns a notice when the inventory has never been seeded.
pub fn open_lot(opts: &LotOpts) -> Result<(ParkingLot<FsStore>, Vec<String>)> {
    let root = opts.root()?;
    let store = FsStore::open(&root)
        .with_context(|| format!("open lot inventory in '{}'", root.display()))?;
    tracing::debug!(path = %store.path().display(), "opened inventory");

    let mut warnings = Vec::new();
    let mut total = 0;
    for spot_type in SpotType::ALL {
        total += store.total_spots(spot_type)?;
    }
    if total == 0 {
        warnings.push("lot has no spots; run `lot init` first".to_string());
    }
    Ok((ParkingLot::new(store), warnings))
}

pub fn describe_spots(spots: &[Spot]) -> String {
    spots
        .iter()
        .map(|s| format!("{} ({})", s.id, s.spot_type))
        .collect::<Vec<_>>()
        .join(", ")
}
