use crate::math::{Point, Real, Vector};

/// A convex planar polygon.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub(crate) vertices: Vec<Point>,
}

impl Polygon {
    /// Builds a new polygon from a set of vertices.
    ///
    /// The vertices must be ordered in such a way that two consecutive
    /// vertices determine an edge of the polygon. The last edge connects the
    /// last vertex with the first one. The vertices must form a convex
    /// polygon.
    pub fn new(vertices: Vec<Point>) -> Self {
        debug_assert!(vertices.len() >= 3);
        Self { vertices }
    }

    /// The vertices of this polygon.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// The average of the polygon's vertices.
    pub fn centroid(&self) -> Point {
        let denom = 1.0 / self.vertices.len() as Real;
        let sum = self
            .vertices
            .iter()
            .fold(Vector::zeros(), |acc, pt| acc + pt.coords);
        Point::from(sum * denom)
    }
}
