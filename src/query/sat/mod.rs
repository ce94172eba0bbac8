//! The Separating Axis Theorem applied to pairs of oriented boxes.

pub use self::projection_interval::ProjectionInterval;
pub use self::sat_obb_obb::{
    obb_obb_find_min_penetration, MinPenetration, SeparatingAxis, Side, PARALLEL_CUTOFF,
};

mod projection_interval;
mod sat_obb_obb;
