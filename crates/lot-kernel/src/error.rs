use std::fmt;

use lot_store::StoreError;
use lot_types::{VehicleCategory, VehicleId};
use thiserror::Error;

use crate::allocator::Shortfall;

/// No room for a vehicle of this category right now. Lists every bundle entry
/// that could not be satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityError {
    pub category: VehicleCategory,
    pub shortfalls: Vec<Shortfall>,
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no space to park {}", self.category)?;
        for (idx, s) in self.shortfalls.iter().enumerate() {
            let sep = if idx == 0 { ": " } else { ", " };
            write!(f, "{sep}{s}")?;
        }
        Ok(())
    }
}

impl std::error::Error for CapacityError {}

#[derive(Debug, Error)]
pub enum KernelError {
    #[error(transparent)]
    Capacity(#[from] CapacityError),
    #[error("vehicle {0} is not parked")]
    NotFound(VehicleId),
    /// The lot had room but assigning the spots failed; nothing was kept.
    #[error("unable to park {category}: {source}")]
    ParkFailed {
        category: VehicleCategory,
        #[source]
        source: StoreError,
    },
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("inventory already holds {0} spots")]
    AlreadySeeded(u64),
    #[error("inventory lock poisoned")]
    LockPoisoned,
}

/// Caller-facing classification of kernel errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NoSpace,
    NotFound,
    UnableToPark,
    Internal,
}

impl KernelError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            KernelError::Capacity(_) => ErrorKind::NoSpace,
            KernelError::NotFound(_) => ErrorKind::NotFound,
            KernelError::ParkFailed { .. } => ErrorKind::UnableToPark,
            KernelError::Store(_) | KernelError::AlreadySeeded(_) | KernelError::LockPoisoned => {
                ErrorKind::Internal
            }
        }
    }
}

impl ErrorKind {
    /// Stable numeric code reported to clients.
    pub fn code(&self) -> u32 {
        match self {
            ErrorKind::NotFound => 4001,
            ErrorKind::NoSpace => 5001,
            ErrorKind::UnableToPark => 5002,
            ErrorKind::Internal => 5000,
        }
    }
}
