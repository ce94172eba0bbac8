//! Shapes handled by the narrow phase.

pub use self::feature::{FeatureKind, SupportFeature};
pub use self::obb::Obb;
pub use self::polygon::Polygon;
pub use self::segment::Segment;

mod feature;
mod obb;
mod polygon;
mod segment;

/// Enum representing the kind of a volume shape.
///
/// This is a closed set: supporting a new shape means adding a variant here
/// and the matching arms of the queries that handle it. There is no
/// run-time type probing anywhere.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// An oriented bounding box.
    Obb,
}
