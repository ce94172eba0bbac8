use crate::math::Point;
use crate::shape::{Polygon, Segment};
use arrayvec::ArrayVec;

/// The kind of geometric feature of a box supporting a projection extreme.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    /// A single corner of the box.
    Vertex,
    /// An edge between two corners.
    Edge,
    /// A rectangular face.
    Face,
}

/// The extreme feature of a box along a direction.
///
/// A box reaches the extreme of its projection onto an axis with one corner,
/// one edge (two corners), or one face (four corners).
#[derive(Clone, Debug, PartialEq)]
pub struct SupportFeature {
    /// The feature kind matching the number of support points.
    pub kind: FeatureKind,
    /// The world-space corners spanning the feature.
    ///
    /// Face corners are ordered so that consecutive points share a box edge.
    pub points: ArrayVec<Point, 4>,
}

impl SupportFeature {
    pub(crate) fn vertex(point: Point) -> Self {
        let mut points = ArrayVec::new();
        points.push(point);
        SupportFeature {
            kind: FeatureKind::Vertex,
            points,
        }
    }

    pub(crate) fn edge(a: Point, b: Point) -> Self {
        let mut points = ArrayVec::new();
        points.push(a);
        points.push(b);
        SupportFeature {
            kind: FeatureKind::Edge,
            points,
        }
    }

    pub(crate) fn face(corners: [Point; 4]) -> Self {
        SupportFeature {
            kind: FeatureKind::Face,
            points: ArrayVec::from(corners),
        }
    }

    /// This feature seen as a segment.
    ///
    /// Only meaningful for edge features.
    pub fn to_segment(&self) -> Segment {
        debug_assert_eq!(self.kind, FeatureKind::Edge);
        Segment::new(self.points[0], self.points[1])
    }

    /// This feature seen as a polygon.
    ///
    /// Only meaningful for face features.
    pub fn to_polygon(&self) -> Polygon {
        debug_assert_eq!(self.kind, FeatureKind::Face);
        Polygon::new(self.points.to_vec())
    }
}
