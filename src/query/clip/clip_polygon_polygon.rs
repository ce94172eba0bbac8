use crate::math::{Point, UnitVector, DEFAULT_EPSILON};
use crate::query::clip::clip_halfspace_polygon;
use crate::shape::Polygon;
use std::mem;

/// Cuts `polygon1` with the side planes of `polygon2`.
///
/// Each side plane contains one edge of `polygon2` and is parallel to
/// `normal`, so the cut keeps the part of `polygon1` lying over the second
/// polygon's footprint (the Sutherland-Hodgman clipping scheme). The two
/// polygons are expected to be (nearly) orthogonal to `normal`.
///
/// The returned ring has duplicate corners merged out; it may contain fewer
/// than three points when the overlap region is degenerate, or none at all
/// when the footprints are disjoint.
pub fn clip_polygon_polygon(polygon1: &Polygon, polygon2: &Polygon, normal: &UnitVector) -> Vec<Point> {
    let centroid = polygon2.centroid();
    let vtx2 = polygon2.vertices();

    let mut result = polygon1.vertices().to_vec();
    let mut buffer = Vec::new();

    for i in 0..vtx2.len() {
        let a = vtx2[i];
        let b = vtx2[(i + 1) % vtx2.len()];

        let mut side_normal = (b - a).cross(normal.as_ref());
        if (centroid - a).dot(&side_normal) > 0.0 {
            side_normal = -side_normal;
        }

        clip_halfspace_polygon(&a, &side_normal, &result, &mut buffer);
        mem::swap(&mut result, &mut buffer);

        if result.is_empty() {
            break;
        }
    }

    dedup_ring(&mut result);
    result
}

// Clipping against planes through shared corners produces duplicated cut
// points; collapse them, including across the ring's wrap-around.
fn dedup_ring(pts: &mut Vec<Point>) {
    let eps = DEFAULT_EPSILON.sqrt();
    pts.dedup_by(|a, b| na::distance(a, b) <= eps);

    while pts.len() > 1 {
        let first = pts[0];
        let last = *pts.last().unwrap();

        if na::distance(&first, &last) <= eps {
            let _ = pts.pop();
        } else {
            break;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::{Real, Vector};
    use na::Unit;

    fn square(cx: Real, cy: Real, half: Real) -> Polygon {
        Polygon::new(vec![
            Point::new(cx - half, cy - half, 0.0),
            Point::new(cx + half, cy - half, 0.0),
            Point::new(cx + half, cy + half, 0.0),
            Point::new(cx - half, cy + half, 0.0),
        ])
    }

    #[test]
    fn identical_footprints_keep_all_corners() {
        let poly1 = square(0.0, 0.0, 1.0);
        let poly2 = square(0.0, 0.0, 1.0);
        let clipped = clip_polygon_polygon(&poly1, &poly2, &Unit::new_unchecked(Vector::z()));

        assert_eq!(clipped.len(), 4);
    }

    #[test]
    fn offset_footprints_overlap_in_a_smaller_quad() {
        let poly1 = square(0.0, 0.0, 1.0);
        let poly2 = square(1.0, 1.0, 1.0);
        let clipped = clip_polygon_polygon(&poly1, &poly2, &Unit::new_unchecked(Vector::z()));

        assert_eq!(clipped.len(), 4);
        for pt in &clipped {
            assert!(pt.x >= 0.0 && pt.x <= 1.0);
            assert!(pt.y >= 0.0 && pt.y <= 1.0);
        }
    }

    #[test]
    fn corner_touching_footprints_collapse_to_a_point() {
        let poly1 = square(0.0, 0.0, 1.0);
        let poly2 = square(2.0, 2.0, 1.0);
        let clipped = clip_polygon_polygon(&poly1, &poly2, &Unit::new_unchecked(Vector::z()));

        assert_eq!(clipped.len(), 1);
        assert_eq!(clipped[0], Point::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn disjoint_footprints_clip_to_nothing() {
        let poly1 = square(0.0, 0.0, 1.0);
        let poly2 = square(5.0, 0.0, 1.0);
        let clipped = clip_polygon_polygon(&poly1, &poly2, &Unit::new_unchecked(Vector::z()));

        assert!(clipped.is_empty());
    }
}
