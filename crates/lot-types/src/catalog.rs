//! Vehicle type catalog: the fixed spot bundle each vehicle category occupies.

use serde::Serialize;

use crate::{SpotType, VehicleCategory};

/// One entry of a bundle: `count` spots of `spot_type`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Requirement {
    pub spot_type: SpotType,
    pub count: u32,
}

/// All spot types and quantities a category must hold at the same time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RequirementBundle(&'static [Requirement]);

impl RequirementBundle {
    pub fn iter(&self) -> impl Iterator<Item = &Requirement> {
        self.0.iter()
    }

    pub fn entries(&self) -> &'static [Requirement] {
        self.0
    }

    /// Required count for a spot type, zero when the bundle does not mention it.
    pub fn count_of(&self, spot_type: SpotType) -> u32 {
        self.0
            .iter()
            .filter(|r| r.spot_type == spot_type)
            .map(|r| r.count)
            .sum()
    }

    pub fn total(&self) -> u32 {
        self.0.iter().map(|r| r.count).sum()
    }
}

const MOTORCYCLE: &[Requirement] = &[Requirement {
    spot_type: SpotType::Motorcycle,
    count: 1,
}];

const CAR: &[Requirement] = &[
    Requirement {
        spot_type: SpotType::Compact,
        count: 1,
    },
    Requirement {
        spot_type: SpotType::Regular,
        count: 1,
    },
];

const VAN: &[Requirement] = &[Requirement {
    spot_type: SpotType::Regular,
    count: 3,
}];

pub fn requirements_for(category: VehicleCategory) -> RequirementBundle {
    match category {
        VehicleCategory::Motorcycle => RequirementBundle(MOTORCYCLE),
        VehicleCategory::Car => RequirementBundle(CAR),
        VehicleCategory::Van => RequirementBundle(VAN),
    }
}
