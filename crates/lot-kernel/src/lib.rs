//! Spot allocation and release engine: feasibility checks, atomic multi-spot
//! assignment, release and availability queries over an [`Inventory`].
//!
//! [`Inventory`]: lot_store::Inventory

pub mod allocator;
pub mod config;
pub mod error;
pub mod lot;
pub mod query;
pub mod release;

pub use allocator::{Shortfall, check_feasibility, try_park};
pub use config::{ConfigError, LotConfig, seed_inventory};
pub use error::{CapacityError, ErrorKind, KernelError};
pub use lot::ParkingLot;
pub use query::{all_spots_taken, count_available, list_parked_vehicles};
pub use release::release_vehicle;
