use crate::math::{Point, DEFAULT_EPSILON};
use crate::shape::Segment;
use na;

/// Closest points between two segments.
///
/// Returns one point per segment; the points coincide when the segments
/// intersect.
#[inline]
pub fn closest_points_segment_segment(seg1: &Segment, seg2: &Segment) -> (Point, Point) {
    // Inspired by real-time collision detection by Christer Ericson.
    let d1 = seg1.scaled_direction();
    let d2 = seg2.scaled_direction();
    let r = seg1.a - seg2.a;

    let a = d1.norm_squared();
    let e = d2.norm_squared();
    let f = d2.dot(&r);

    let eps = DEFAULT_EPSILON;
    let mut s;
    let mut t;

    if a <= eps && e <= eps {
        s = 0.0;
        t = 0.0;
    } else if a <= eps {
        s = 0.0;
        t = na::clamp(f / e, 0.0, 1.0);
    } else {
        let c = d1.dot(&r);
        if e <= eps {
            t = 0.0;
            s = na::clamp(-c / a, 0.0, 1.0);
        } else {
            let b = d1.dot(&d2);
            let ae = a * e;
            let bb = b * b;
            let denom = ae - bb;

            // Use absolute and ulps error to test collinearity.
            if denom > eps && !ulps_eq!(ae, bb) {
                s = na::clamp((b * f - c * e) / denom, 0.0, 1.0);
            } else {
                s = 0.0;
            }

            t = (b * s + f) / e;

            if t < 0.0 {
                t = 0.0;
                s = na::clamp(-c / a, 0.0, 1.0);
            } else if t > 1.0 {
                t = 1.0;
                s = na::clamp((b - c) / a, 0.0, 1.0);
            }
        }
    }

    (seg1.a + d1 * s, seg2.a + d2 * t)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn crossing_perpendicular_segments() {
        let seg1 = Segment::new(Point::new(-1.0, 0.0, 0.0), Point::new(1.0, 0.0, 0.0));
        let seg2 = Segment::new(Point::new(0.5, -1.0, 0.25), Point::new(0.5, 1.0, 0.25));

        let (p1, p2) = closest_points_segment_segment(&seg1, &seg2);

        assert_eq!(p1, Point::new(0.5, 0.0, 0.0));
        assert_eq!(p2, Point::new(0.5, 0.0, 0.25));
    }

    #[test]
    fn disjoint_collinear_segments_use_the_facing_vertices() {
        let seg1 = Segment::new(Point::new(-2.0, 0.0, 0.0), Point::new(-1.0, 0.0, 0.0));
        let seg2 = Segment::new(Point::new(1.0, 0.0, 0.0), Point::new(2.0, 0.0, 0.0));

        let (p1, p2) = closest_points_segment_segment(&seg1, &seg2);

        assert_eq!(p1, Point::new(-1.0, 0.0, 0.0));
        assert_eq!(p2, Point::new(1.0, 0.0, 0.0));
    }
}
