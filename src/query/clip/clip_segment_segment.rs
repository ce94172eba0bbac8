use crate::math::Point;
use crate::utils;
use std::mem;

/// Projects two segments on the direction of the first one and computes
/// their common range.
///
/// Returns the matched point pairs at both ends of the common range (the
/// first point of each pair lies on `seg1`, the second on `seg2`), or
/// `None` when the projected ranges are disjoint. This is only meaningful
/// for (nearly) parallel segments; for skew segments use the closest-point
/// query instead.
pub fn clip_segment_segment(
    seg1: (Point, Point),
    mut seg2: (Point, Point),
) -> Option<((Point, Point), (Point, Point))> {
    // NOTE: no need to normalize the tangent; the projected ranges live in
    // its squared-length scale.
    let tangent1 = seg1.1 - seg1.0;

    let range1 = [0.0, tangent1.norm_squared()];
    let mut range2 = [
        (seg2.0 - seg1.0).dot(&tangent1),
        (seg2.1 - seg1.0).dot(&tangent1),
    ];

    if range2[1] < range2[0] {
        range2.swap(0, 1);
        mem::swap(&mut seg2.0, &mut seg2.1);
    }

    if range2[0] > range1[1] || range1[0] > range2[1] {
        // No common range.
        return None;
    }

    let length1 = range1[1] - range1[0];
    let length2 = range2[1] - range2[0];

    let start = if range2[0] > range1[0] {
        let bcoord = (range2[0] - range1[0]) * utils::inv(length1);
        (seg1.0 + tangent1 * bcoord, seg2.0)
    } else {
        let bcoord = (range1[0] - range2[0]) * utils::inv(length2);
        (seg1.0, seg2.0 + (seg2.1 - seg2.0) * bcoord)
    };

    let end = if range2[1] < range1[1] {
        let bcoord = (range2[1] - range1[0]) * utils::inv(length1);
        (seg1.0 + tangent1 * bcoord, seg2.1)
    } else {
        let bcoord = (range1[1] - range2[0]) * utils::inv(length2);
        (seg1.1, seg2.0 + (seg2.1 - seg2.0) * bcoord)
    };

    Some((start, end))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn collinear_overlapping_segments() {
        let seg1 = (Point::new(-1.0, 0.0, 0.0), Point::new(1.0, 0.0, 0.0));
        let seg2 = (Point::new(0.0, 0.5, 0.0), Point::new(2.0, 0.5, 0.0));

        let (start, end) = clip_segment_segment(seg1, seg2).unwrap();

        assert_eq!(start.0, Point::new(0.0, 0.0, 0.0));
        assert_eq!(start.1, Point::new(0.0, 0.5, 0.0));
        assert_eq!(end.0, Point::new(1.0, 0.0, 0.0));
        assert_eq!(end.1, Point::new(1.0, 0.5, 0.0));
    }

    #[test]
    fn disjoint_ranges_do_not_clip() {
        let seg1 = (Point::new(-1.0, 0.0, 0.0), Point::new(1.0, 0.0, 0.0));
        let seg2 = (Point::new(2.0, 0.5, 0.0), Point::new(4.0, 0.5, 0.0));

        assert!(clip_segment_segment(seg1, seg2).is_none());
    }

    #[test]
    fn reversed_segments_share_the_same_overlap() {
        let seg1 = (Point::new(1.0, 0.0, 0.0), Point::new(-1.0, 0.0, 0.0));
        let seg2 = (Point::new(2.0, 0.5, 0.0), Point::new(0.0, 0.5, 0.0));

        let (start, end) = clip_segment_segment(seg1, seg2).unwrap();

        // The overlap region is x in [0, 1] whatever the orientations.
        assert_eq!(start.0, Point::new(1.0, 0.0, 0.0));
        assert_eq!(end.0, Point::new(0.0, 0.0, 0.0));
    }
}
