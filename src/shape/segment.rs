//! Definition of the segment shape.

use crate::math::{Point, Real, Vector};
use na;

/// A segment shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// The segment first point.
    pub a: Point,
    /// The segment second point.
    pub b: Point,
}

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point, b: Point) -> Segment {
        Segment { a, b }
    }

    /// The direction of this segment scaled by its length.
    ///
    /// Points from `self.a` toward `self.b`.
    pub fn scaled_direction(&self) -> Vector {
        self.b - self.a
    }

    /// The length of this segment.
    pub fn length(&self) -> Real {
        self.scaled_direction().norm()
    }

    /// The point at the middle of this segment.
    pub fn midpoint(&self) -> Point {
        na::center(&self.a, &self.b)
    }
}
