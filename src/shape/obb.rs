//! Oriented bounding box shape.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Rotation, RotationMatrix, Vector, DIM};
use crate::shape::SupportFeature;
use arrayvec::ArrayVec;

/// Cosine threshold under which a box axis counts as orthogonal to a
/// direction when classifying support features.
pub(crate) const SUPPORT_EPSILON: Real = 1.0e-4;

/// A box with arbitrary orientation.
///
/// The box is described by its center, a rotation whose columns are the
/// directions of the three local axes, and one half-extent per axis.
/// The axes are orthonormal by construction; the half-extents must not be
/// negative.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Obb {
    /// The center of the box.
    pub center: Point,
    /// The orientation of the box. Column `i` is the direction of the box's
    /// `i`-th local axis.
    pub axes: RotationMatrix,
    /// The half-extents of the box along each of its local axes.
    pub half_extents: Vector,
}

impl Obb {
    /// Creates a new oriented box from its center, orientation, and
    /// half-extents.
    #[inline]
    pub fn new(center: Point, axes: RotationMatrix, half_extents: Vector) -> Obb {
        debug_assert!(half_extents.iter().all(|e| *e >= 0.0));
        Obb {
            center,
            axes,
            half_extents,
        }
    }

    /// Creates a new oriented box with its orientation given as a quaternion.
    #[inline]
    pub fn from_quaternion(center: Point, orientation: Rotation, half_extents: Vector) -> Obb {
        Self::new(center, orientation.to_rotation_matrix(), half_extents)
    }

    /// Creates a new box aligned with the world axes.
    #[inline]
    pub fn axis_aligned(center: Point, half_extents: Vector) -> Obb {
        Self::new(center, RotationMatrix::identity(), half_extents)
    }

    /// The direction of the `i`-th local axis of this box.
    #[inline]
    pub fn axis(&self, i: usize) -> Vector {
        self.axes.matrix().column(i).into_owned()
    }

    /// The half-extent of this box along its `i`-th local axis.
    #[inline]
    pub fn extent(&self, i: usize) -> Real {
        self.half_extents[i]
    }

    /// The eight corners of this box.
    ///
    /// The `i`-th bit of a corner's index is set iff. the corner lies on the
    /// negative side of the box's `i`-th axis.
    pub fn vertices(&self) -> [Point; 8] {
        let mut out = [self.center; 8];

        for (vid, pt) in out.iter_mut().enumerate() {
            for i in 0..DIM {
                let sign = if vid & (1 << i) != 0 { -1.0 } else { 1.0 };
                *pt += self.axis(i) * (self.half_extents[i] * sign);
            }
        }

        out
    }

    /// The feature of this box reaching the extreme of its projection in the
    /// direction `dir`.
    ///
    /// `dir` does not need to be normalized but must not be (nearly)
    /// orthogonal to all three axes at once.
    pub fn support_feature(&self, dir: &Vector) -> SupportFeature {
        let mut base = self.center;
        let mut flat: ArrayVec<usize, 3> = ArrayVec::new();

        for i in 0..DIM {
            let axis = self.axis(i);
            let dot = axis.dot(dir);

            if dot.abs() <= SUPPORT_EPSILON {
                flat.push(i);
            } else {
                base += axis * self.half_extents[i].copysign(dot);
            }
        }

        match flat.as_slice() {
            [] => SupportFeature::vertex(base),
            [i] => {
                let e = self.axis(*i) * self.half_extents[*i];
                SupportFeature::edge(base - e, base + e)
            }
            [i, j] => {
                let u = self.axis(*i) * self.half_extents[*i];
                let v = self.axis(*j) * self.half_extents[*j];
                SupportFeature::face([base + u + v, base - u + v, base - u - v, base + u - v])
            }
            // A direction cannot be orthogonal to three orthonormal axes.
            _ => unreachable!(),
        }
    }

    /// The axis-aligned bounding box of this box.
    pub fn aabb(&self) -> Aabb {
        let mut half_extents = Vector::zeros();

        for i in 0..DIM {
            half_extents += self.axis(i).abs() * self.half_extents[i];
        }

        Aabb::from_half_extents(self.center, half_extents)
    }
}
