use crate::math::{Real, UnitVector, DEFAULT_EPSILON};
use crate::shape::{Polygon, Segment};

/// Cuts a segment with the side planes of a face polygon.
///
/// The side planes contain the polygon's edges and are parallel to
/// `normal`, so the cut keeps the part of the segment lying over the
/// polygon's footprint. Returns `None` when the segment misses the
/// footprint entirely; the returned segment may be degenerate (a point)
/// when the segment only grazes a side plane.
pub fn clip_segment_polygon(
    segment: &Segment,
    polygon: &Polygon,
    normal: &UnitVector,
) -> Option<Segment> {
    let centroid = polygon.centroid();
    let vtx = polygon.vertices();
    let dir = segment.scaled_direction();

    let mut t_min: Real = 0.0;
    let mut t_max: Real = 1.0;

    for i in 0..vtx.len() {
        let a = vtx[i];
        let b = vtx[(i + 1) % vtx.len()];

        let mut side_normal = (b - a).cross(normal.as_ref());
        if (centroid - a).dot(&side_normal) > 0.0 {
            side_normal = -side_normal;
        }

        let dist = (segment.a - a).dot(&side_normal);
        let speed = dir.dot(&side_normal);

        if abs_diff_eq!(speed, 0.0, epsilon = DEFAULT_EPSILON) {
            // The segment runs parallel to this side plane.
            if dist > 0.0 {
                return None;
            }
        } else {
            let toi = -dist / speed;

            if speed < 0.0 {
                t_min = t_min.max(toi);
            } else {
                t_max = t_max.min(toi);
            }

            if t_min > t_max {
                return None;
            }
        }
    }

    Some(Segment::new(
        segment.a + dir * t_min,
        segment.a + dir * t_max,
    ))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::{Point, Vector};
    use na::Unit;

    fn footprint() -> Polygon {
        Polygon::new(vec![
            Point::new(-1.0, -1.0, 1.0),
            Point::new(1.0, -1.0, 1.0),
            Point::new(1.0, 1.0, 1.0),
            Point::new(-1.0, 1.0, 1.0),
        ])
    }

    #[test]
    fn segment_crossing_the_footprint_is_shortened() {
        let segment = Segment::new(Point::new(-3.0, 0.0, 1.5), Point::new(5.0, 0.0, 1.5));
        let clipped =
            clip_segment_polygon(&segment, &footprint(), &Unit::new_unchecked(Vector::z()))
                .unwrap();

        assert_eq!(clipped.a, Point::new(-1.0, 0.0, 1.5));
        assert_eq!(clipped.b, Point::new(1.0, 0.0, 1.5));
    }

    #[test]
    fn segment_inside_the_footprint_is_unchanged() {
        let segment = Segment::new(Point::new(-0.5, 0.2, 1.5), Point::new(0.5, 0.2, 1.5));
        let clipped =
            clip_segment_polygon(&segment, &footprint(), &Unit::new_unchecked(Vector::z()))
                .unwrap();

        assert_eq!(clipped, segment);
    }

    #[test]
    fn segment_outside_the_footprint_is_discarded() {
        let segment = Segment::new(Point::new(-5.0, 2.0, 1.5), Point::new(5.0, 2.0, 1.5));
        assert!(
            clip_segment_polygon(&segment, &footprint(), &Unit::new_unchecked(Vector::z()))
                .is_none()
        );
    }
}
