use crate::bounding_volume::Aabb;
use crate::shape::{Obb, ShapeKind};

/// An opaque handle to the rigid body owning a bounding volume.
///
/// The narrow phase never dereferences this handle; it only copies it into
/// the contacts it produces so that the constraint solver can find the
/// bodies back.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BodyHandle(
    /// The raw identifier of the body, as assigned by the body manager.
    pub u64,
);

/// The shape carried by a bounding volume.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum VolumeShape {
    /// An oriented bounding box.
    Obb(Obb),
}

impl VolumeShape {
    /// The kind of this shape.
    pub fn kind(&self) -> ShapeKind {
        match self {
            VolumeShape::Obb(_) => ShapeKind::Obb,
        }
    }
}

/// A bounding volume attached to a rigid body.
///
/// This is the unit of work handed over by the broad phase: an immutable
/// snapshot of one body's collision shape for the duration of a narrow-phase
/// query.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct BoundingVolume {
    /// The body owning this volume.
    pub body: BodyHandle,
    /// The shape of this volume.
    pub shape: VolumeShape,
}

impl BoundingVolume {
    /// Creates a new bounding volume owned by `body`.
    pub fn new(body: BodyHandle, shape: VolumeShape) -> Self {
        BoundingVolume { body, shape }
    }

    /// The axis-aligned bounds of this volume.
    pub fn aabb(&self) -> Aabb {
        match &self.shape {
            VolumeShape::Obb(obb) => obb.aabb(),
        }
    }
}
