use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of a single parking spot. Fixed at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpotType {
    Motorcycle,
    Compact,
    Regular,
}

impl SpotType {
    pub const ALL: [SpotType; 3] = [SpotType::Motorcycle, SpotType::Compact, SpotType::Regular];

    pub fn as_str(&self) -> &'static str {
        match self {
            SpotType::Motorcycle => "MOTORCYCLE",
            SpotType::Compact => "COMPACT",
            SpotType::Regular => "REGULAR",
        }
    }
}

/// Category of a vehicle asking to park.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleCategory {
    Motorcycle,
    Car,
    Van,
}

impl VehicleCategory {
    pub const ALL: [VehicleCategory; 3] = [
        VehicleCategory::Motorcycle,
        VehicleCategory::Car,
        VehicleCategory::Van,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleCategory::Motorcycle => "MOTORCYCLE",
            VehicleCategory::Car => "CAR",
            VehicleCategory::Van => "VAN",
        }
    }
}

impl fmt::Display for SpotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown parking spot type '{0}'")]
    UnknownSpotType(String),
    #[error("unknown vehicle type '{0}'")]
    UnknownVehicleCategory(String),
}

impl ParseError {
    /// Stable numeric code reported to clients.
    pub fn code(&self) -> u32 {
        match self {
            ParseError::UnknownSpotType(_) => 4002,
            ParseError::UnknownVehicleCategory(_) => 4003,
        }
    }
}

impl FromStr for SpotType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpotType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownSpotType(s.to_string()))
    }
}

impl FromStr for VehicleCategory {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VehicleCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownVehicleCategory(s.to_string()))
    }
}

/// Stable identifier of a spot, assigned at bulk insert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpotId(pub u64);

/// Identifier of a parked vehicle, generated on park and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(pub u64);

impl fmt::Display for SpotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single parkable unit. `occupant` is `None` while the spot is free.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spot {
    pub id: SpotId,
    pub spot_type: SpotType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupant: Option<VehicleId>,
}

impl Spot {
    pub fn new(id: SpotId, spot_type: SpotType) -> Self {
        Self {
            id,
            spot_type,
            occupant: None,
        }
    }

    pub fn is_free(&self) -> bool {
        self.occupant.is_none()
    }
}

/// Record of a vehicle currently holding spots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub category: VehicleCategory,
}

/// A vehicle joined with the spots it holds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkedVehicle {
    pub vehicle: Vehicle,
    pub spots: Vec<Spot>,
}

/// Snapshot of a vehicle after it left the lot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleasedVehicle {
    pub vehicle_id: VehicleId,
    pub category: VehicleCategory,
    pub parked: bool,
    pub freed_spots: Vec<SpotId>,
}
