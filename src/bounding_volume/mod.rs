//! Bounding volumes handed over by the broad phase.

pub use self::aabb::Aabb;
pub use self::bounding_volume::{BodyHandle, BoundingVolume, VolumeShape};

mod aabb;
mod bounding_volume;
