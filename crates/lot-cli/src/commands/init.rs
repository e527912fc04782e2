use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use lot_kernel::LotConfig;
use serde_json::json;

use crate::opts::LotOpts;
use crate::output::print_success;

use super::open_lot;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// JSON layout file with motorcycle_spots / compact_spots / regular_spots
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of motorcycle spots (env: LOT_MOTORCYCLE_SPOTS)
    #[arg(long)]
    pub motorcycle: Option<u32>,

    /// Number of compact spots (env: LOT_COMPACT_SPOTS)
    #[arg(long)]
    pub compact: Option<u32>,

    /// Number of regular spots (env: LOT_REGULAR_SPOTS)
    #[arg(long)]
    pub regular: Option<u32>,
}

impl InitArgs {
    /// Defaults, then the layout file, then environment, then flags.
    fn resolve(&self) -> Result<LotConfig> {
        let base = match &self.config {
            Some(path) => LotConfig::from_file(path)?,
            None => LotConfig::default(),
        };
        let mut config = base.with_env().context("read lot layout from environment")?;
        if let Some(n) = self.motorcycle {
            config.motorcycle_spots = n;
        }
        if let Some(n) = self.compact {
            config.compact_spots = n;
        }
        if let Some(n) = self.regular {
            config.regular_spots = n;
        }
        Ok(config)
    }
}

pub fn cmd_init(opts: &LotOpts, args: &InitArgs) -> Result<()> {
    let config = args.resolve()?;
    let (lot, _) = open_lot(opts)?;
    let created = lot.seed(&config)?;
    tracing::info!(created, "seeded lot inventory");

    print_success(
        opts,
        json!({ "created": created, "layout": config }),
        format!(
            "created {created} spots: {} motorcycle, {} compact, {} regular",
            config.motorcycle_spots, config.compact_spots, config.regular_spots
        ),
        vec![],
    )
}
