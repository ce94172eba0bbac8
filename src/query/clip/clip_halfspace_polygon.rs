use crate::math::{Point, Vector};
use crate::utils;

/// Cuts a polygon with the given half-space.
///
/// Given the half-space `center` and outward `normal`, this computes the
/// intersection between the half-space and the polygon. A point `pt` is
/// considered as inside of the half-space if `normal.dot(&(pt - center)) <=
/// 0.0`, so points exactly on the boundary are kept.
pub fn clip_halfspace_polygon(
    center: &Point,
    normal: &Vector,
    polygon: &[Point],
    result: &mut Vec<Point>,
) {
    result.clear();

    if polygon.is_empty() {
        return;
    }

    let signed_dist = |pt: &Point| (pt - center).dot(normal);
    let mut prev = polygon.last().unwrap();
    let mut prev_dist = signed_dist(prev);

    for pt in polygon {
        let dist = signed_dist(pt);

        if (prev_dist <= 0.0) != (dist <= 0.0) {
            // We crossed the plane, so we need to cut the edge.
            let bcoord = prev_dist * utils::inv(prev_dist - dist);
            result.push(*prev + (pt - prev) * bcoord);
        }

        if dist <= 0.0 {
            result.push(*pt);
        }

        prev = pt;
        prev_dist = dist;
    }
}
