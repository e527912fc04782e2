//! Lot layout: how many spots of each type exist, and the one-time seeding
//! of an empty inventory from it.

use std::path::{Path, PathBuf};

use lot_store::Inventory;
use lot_types::SpotType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::KernelError;

pub const ENV_MOTORCYCLE_SPOTS: &str = "LOT_MOTORCYCLE_SPOTS";
pub const ENV_COMPACT_SPOTS: &str = "LOT_COMPACT_SPOTS";
pub const ENV_REGULAR_SPOTS: &str = "LOT_REGULAR_SPOTS";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LotConfig {
    pub motorcycle_spots: u32,
    pub compact_spots: u32,
    pub regular_spots: u32,
}

impl Default for LotConfig {
    fn default() -> Self {
        Self {
            motorcycle_spots: 5,
            compact_spots: 11,
            regular_spots: 9,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid value '{value}' for {var}: expected a spot count")]
    InvalidEnv { var: &'static str, value: String },
}

impl LotConfig {
    /// Load a JSON layout file; missing fields keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Defaults overridden by `LOT_*_SPOTS` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env()
    }

    pub fn with_env(self) -> Result<Self, ConfigError> {
        self.with_lookup(|var| std::env::var(var).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn with_lookup(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        for (var, slot) in [
            (ENV_MOTORCYCLE_SPOTS, &mut self.motorcycle_spots),
            (ENV_COMPACT_SPOTS, &mut self.compact_spots),
            (ENV_REGULAR_SPOTS, &mut self.regular_spots),
        ] {
            if let Some(value) = lookup(var) {
                *slot = value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidEnv { var, value })?;
            }
        }
        Ok(self)
    }

    pub fn spots_of(&self, spot_type: SpotType) -> u32 {
        match spot_type {
            SpotType::Motorcycle => self.motorcycle_spots,
            SpotType::Compact => self.compact_spots,
            SpotType::Regular => self.regular_spots,
        }
    }

    pub fn total(&self) -> u64 {
        SpotType::ALL
            .iter()
            .map(|t| u64::from(self.spots_of(*t)))
            .sum()
    }
}

/// Bulk-inserts the configured spots into an empty inventory and returns how
/// many were created. Refuses to run twice against the same inventory.
pub fn seed_inventory<S: Inventory + ?Sized>(
    store: &mut S,
    config: &LotConfig,
) -> Result<u64, KernelError> {
    let mut existing = 0;
    for spot_type in SpotType::ALL {
        existing += store.total_spots(spot_type)?;
    }
    if existing > 0 {
        return Err(KernelError::AlreadySeeded(existing));
    }
    for spot_type in SpotType::ALL {
        store.insert_spots(spot_type, config.spots_of(spot_type))?;
    }
    log::debug!("seeded inventory with {config:?}");
    Ok(config.total())
}
