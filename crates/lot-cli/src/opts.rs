//! Global CLI options and lot directory resolution.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

/// Global options for CLI commands.
#[derive(Args, Debug, Clone)]
pub struct LotOpts {
    /// Lot directory holding `.lot/inventory.json` (env: LOT_DIR, default: current directory)
    #[arg(short = 'l', long, global = true, env = "LOT_DIR")]
    pub lot: Option<PathBuf>,

    /// JSON output envelope
    #[arg(long, global = true)]
    pub json: bool,

    /// Pretty-print JSON output (implies --json)
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Suppress notices
    #[arg(long, global = true)]
    pub quiet: bool,
}

impl LotOpts {
    pub fn root(&self) -> Result<PathBuf> {
        match &self.lot {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().context("get current directory"),
        }
    }
}
