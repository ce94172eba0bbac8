use crate::bounding_volume::BodyHandle;
use crate::math::{Point, Real, UnitVector};
use crate::shape::{Polygon, Segment};
use std::mem;

/// Geometric description of a contact.
///
/// Exactly one contact is produced per colliding pair and per query. The
/// record is immutable once built; the caller owns it until the next
/// simulation step discards it.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    /// The body owning the first volume.
    pub body1: BodyHandle,
    /// The body owning the second volume.
    pub body2: BodyHandle,
    /// The unit contact normal, pointing from the first volume toward the
    /// second.
    pub normal: UnitVector,
    /// The penetration depth along the axis of minimum penetration.
    ///
    /// Zero when the volumes merely touch.
    pub depth: Real,
    /// Where the volumes touch.
    pub geometry: ContactGeometry,
}

/// The shape of the touching region between two volumes.
///
/// The points lie on the first touching feature, not on a mid-penetration
/// plane.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum ContactGeometry {
    /// Contact through a single point: a vertex against anything, or two
    /// crossing edges.
    Point(Point),
    /// Contact along a line segment: an edge lying on a face, or two
    /// parallel overlapping edges.
    Segment(Segment),
    /// Contact across a polygonal area: two overlapping faces.
    Polygon(Polygon),
}

impl Contact {
    /// Creates a new contact.
    #[inline]
    pub fn new(
        body1: BodyHandle,
        body2: BodyHandle,
        normal: UnitVector,
        depth: Real,
        geometry: ContactGeometry,
    ) -> Self {
        Contact {
            body1,
            body2,
            normal,
            depth,
            geometry,
        }
    }

    /// Swaps the two bodies of this contact and reverses its normal.
    #[inline]
    pub fn flip(&mut self) {
        mem::swap(&mut self.body1, &mut self.body2);
        self.normal = -self.normal;
    }

    /// Returns this contact with the bodies swapped and the normal reversed.
    #[inline]
    pub fn flipped(mut self) -> Self {
        self.flip();
        self
    }
}
