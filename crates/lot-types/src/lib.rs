//! Parking lot data model: spot types, vehicle categories and the requirement catalog.

pub mod catalog;
mod model;

pub use catalog::{Requirement, RequirementBundle, requirements_for};
pub use model::*;
