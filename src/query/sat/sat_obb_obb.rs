use crate::math::{Real, Vector};
use crate::shape::Obb;

/// Cosine cutoff above which two face normals count as parallel.
///
/// When such a pair exists the nine cross-product axes are degenerate or
/// nearly so; projecting onto them could report a separation that does not
/// exist, while the six face-normal tests passing is already a proof of
/// intersection.
pub const PARALLEL_CUTOFF: Real = 0.999999;

/// Identity of a candidate separating axis between two boxes.
///
/// The axis direction is not stored; it is reconstructed from the boxes on
/// demand by [`SeparatingAxis::resolve`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SeparatingAxis {
    /// The `i`-th face normal of the first box.
    FaceA(usize),
    /// The `i`-th face normal of the second box.
    FaceB(usize),
    /// The cross product of the `i`-th axis of the first box with the
    /// `j`-th axis of the second box.
    Cross(usize, usize),
}

impl SeparatingAxis {
    /// The world-space direction of this axis.
    ///
    /// Face normals are unit vectors; cross-product axes are returned
    /// non-normalized.
    pub fn resolve(self, obb1: &Obb, obb2: &Obb) -> Vector {
        match self {
            SeparatingAxis::FaceA(i) => obb1.axis(i),
            SeparatingAxis::FaceB(i) => obb2.axis(i),
            SeparatingAxis::Cross(i, j) => obb1.axis(i).cross(&obb2.axis(j)),
        }
    }
}

/// The ordering of the two projection intervals along the winning axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    /// The first box's max bound is adjacent to the second box's min bound.
    OneTwo,
    /// The second box's max bound is adjacent to the first box's min bound.
    TwoOne,
}

/// Running minimum-penetration bookkeeping for one axis-test sequence.
///
/// The accumulator is a plain value scoped to a single query, so distinct
/// queries running concurrently never share state.
#[derive(Copy, Clone, Debug)]
pub struct MinPenetration {
    /// The smallest positive penetration depth found so far.
    pub depth: Real,
    /// The axis it was found on.
    pub axis: SeparatingAxis,
    /// The interval ordering along that axis.
    pub side: Side,
}

impl MinPenetration {
    fn new() -> Self {
        MinPenetration {
            depth: Real::MAX,
            axis: SeparatingAxis::FaceA(0),
            side: Side::OneTwo,
        }
    }

    /// Computes the penetration depth of two projection intervals along a
    /// candidate axis and updates the running minimum when that depth is
    /// non-negative and strictly smaller than the smallest found so far.
    ///
    /// Returns the raw depth in every case; a negative value means the
    /// intervals are disjoint and `axis` separates the boxes.
    pub fn eval_axis(
        &mut self,
        axis: SeparatingAxis,
        min1: Real,
        max1: Real,
        min2: Real,
        max2: Real,
    ) -> Real {
        let length1 = max1 - min1;
        let length2 = max2 - min2;
        let union_span = max1.max(max2) - min1.min(min2);
        let depth = (length1 + length2) - union_span;

        if depth >= 0.0 && depth < self.depth {
            self.depth = depth;
            self.axis = axis;
            self.side = if min1 + max1 <= min2 + max2 {
                Side::OneTwo
            } else {
                Side::TwoOne
            };
        }

        depth
    }
}

/// Finds the axis of minimum penetration between two boxes, or proves them
/// disjoint.
///
/// Runs the 15 axis tests of the separating axis theorem for a pair of
/// boxes: the three face normals of each box, then the nine pairwise cross
/// products of their axes. The first axis with disjoint projections
/// short-circuits the remaining tests. Projections that exactly touch (zero
/// depth) count as overlapping, on every axis alike.
///
/// The cross-product tests never build the cross-product vectors: each
/// center and radius is expressed with the dot-product matrix
/// `c[i][j] = axis1(i) . axis2(j)`, its absolute value, and the projections
/// `udc1` of the center-to-center vector onto the first box's axes.
pub fn obb_obb_find_min_penetration(obb1: &Obb, obb2: &Obb) -> Option<MinPenetration> {
    let distance = obb2.center - obb1.center;

    let mut state = MinPenetration::new();
    let mut c = [[0.0; 3]; 3];
    let mut abs_c = [[0.0; 3]; 3];
    let mut udc1 = [0.0; 3];
    let mut exists_parallel_pair = false;

    // Face normals of the first box.
    for i in 0..3 {
        for j in 0..3 {
            c[i][j] = obb1.axis(i).dot(&obb2.axis(j));
            abs_c[i][j] = c[i][j].abs();

            if abs_c[i][j] > PARALLEL_CUTOFF {
                exists_parallel_pair = true;
            }
        }

        udc1[i] = obb1.axis(i).dot(&distance);
        let center = udc1[i];
        let radius1 = obb1.half_extents[i];
        let radius2 = obb2.half_extents[0] * abs_c[i][0]
            + obb2.half_extents[1] * abs_c[i][1]
            + obb2.half_extents[2] * abs_c[i][2];

        let depth = state.eval_axis(
            SeparatingAxis::FaceA(i),
            -radius1,
            radius1,
            center - radius2,
            center + radius2,
        );
        if depth < 0.0 {
            return None;
        }
    }

    // Face normals of the second box.
    for j in 0..3 {
        let center = obb2.axis(j).dot(&distance);
        let radius1 = obb1.half_extents[0] * abs_c[0][j]
            + obb1.half_extents[1] * abs_c[1][j]
            + obb1.half_extents[2] * abs_c[2][j];
        let radius2 = obb2.half_extents[j];

        let depth = state.eval_axis(
            SeparatingAxis::FaceB(j),
            -radius1,
            radius1,
            center - radius2,
            center + radius2,
        );
        if depth < 0.0 {
            return None;
        }
    }

    // With a parallel pair of face normals, the six face-normal tests all
    // passing already proves the intersection. The cross products are
    // (nearly) zero vectors there; projecting onto them is unreliable.
    if exists_parallel_pair {
        return Some(state);
    }

    // Cross products axis1(i) x axis2(j).
    for i in 0..3 {
        let (i1, i2) = ((i + 1) % 3, (i + 2) % 3);

        for j in 0..3 {
            let (j1, j2) = ((j + 1) % 3, (j + 2) % 3);

            let center = udc1[i2] * c[i1][j] - udc1[i1] * c[i2][j];
            let radius1 =
                obb1.half_extents[i1] * abs_c[i2][j] + obb1.half_extents[i2] * abs_c[i1][j];
            let radius2 =
                obb2.half_extents[j1] * abs_c[i][j2] + obb2.half_extents[j2] * abs_c[i][j1];

            let depth = state.eval_axis(
                SeparatingAxis::Cross(i, j),
                -radius1,
                radius1,
                center - radius2,
                center + radius2,
            );
            if depth < 0.0 {
                return None;
            }
        }
    }

    Some(state)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::{Point, Real, Vector};
    use na::Rotation3;

    #[test]
    fn eval_axis_reports_disjoint_intervals() {
        let mut state = MinPenetration::new();
        let depth = state.eval_axis(SeparatingAxis::FaceA(0), -1.0, 1.0, 3.0, 5.0);
        assert_eq!(depth, -2.0);
    }

    #[test]
    fn eval_axis_keeps_the_smallest_depth() {
        let mut state = MinPenetration::new();
        let _ = state.eval_axis(SeparatingAxis::FaceA(0), -1.0, 1.0, 0.0, 2.0);
        let _ = state.eval_axis(SeparatingAxis::FaceA(1), -1.0, 1.0, 0.5, 2.5);
        let _ = state.eval_axis(SeparatingAxis::FaceA(2), -1.0, 1.0, 0.25, 2.25);

        assert_eq!(state.depth, 0.5);
        assert_eq!(state.axis, SeparatingAxis::FaceA(1));
        assert_eq!(state.side, Side::OneTwo);
    }

    #[test]
    fn eval_axis_first_axis_wins_ties() {
        let mut state = MinPenetration::new();
        let _ = state.eval_axis(SeparatingAxis::FaceA(0), -1.0, 1.0, 0.0, 2.0);
        let _ = state.eval_axis(SeparatingAxis::FaceB(0), -1.0, 1.0, 0.0, 2.0);

        assert_eq!(state.axis, SeparatingAxis::FaceA(0));
    }

    #[test]
    fn parallel_boxes_offset_along_x() {
        let obb1 = Obb::axis_aligned(Point::origin(), Vector::new(1.0, 1.0, 1.0));
        let obb2 = Obb::axis_aligned(Point::new(1.0, 0.0, 0.0), Vector::new(1.0, 1.0, 1.0));

        let min_pen = obb_obb_find_min_penetration(&obb1, &obb2).unwrap();

        // The degenerate cross products must not steal the minimum: the
        // parallel-pair shortcut leaves the x face normal as the winner.
        assert_eq!(min_pen.axis, SeparatingAxis::FaceA(0));
        assert_eq!(min_pen.depth, 1.0);
        assert_eq!(min_pen.side, Side::OneTwo);
    }

    #[test]
    fn separated_boxes_short_circuit() {
        let obb1 = Obb::axis_aligned(Point::origin(), Vector::new(1.0, 1.0, 1.0));
        let obb2 = Obb::axis_aligned(Point::new(10.0, 0.0, 0.0), Vector::new(1.0, 1.0, 1.0));

        assert!(obb_obb_find_min_penetration(&obb1, &obb2).is_none());
    }

    #[test]
    fn touching_boxes_count_as_overlapping() {
        let obb1 = Obb::axis_aligned(Point::origin(), Vector::new(1.0, 1.0, 1.0));
        let obb2 = Obb::axis_aligned(Point::new(2.0, 0.0, 0.0), Vector::new(1.0, 1.0, 1.0));

        let min_pen = obb_obb_find_min_penetration(&obb1, &obb2).unwrap();
        assert_eq!(min_pen.depth, 0.0);
        assert_eq!(min_pen.axis, SeparatingAxis::FaceA(0));
    }

    #[test]
    fn tilted_box_resting_on_a_face() {
        // Rotating around z after x leaves no axis pair parallel, so all
        // fifteen axes run. The second box hangs 0.1 into the first one's
        // top face with its lowest edge.
        let frac_pi_4 = core::f64::consts::FRAC_PI_4 as Real;
        let axes = Rotation3::from_axis_angle(&Vector::z_axis(), frac_pi_4)
            * Rotation3::from_axis_angle(&Vector::x_axis(), frac_pi_4);
        let h = 1.0 + (2.0 as Real).sqrt() - 0.1;

        let obb1 = Obb::axis_aligned(Point::origin(), Vector::new(1.0, 1.0, 1.0));
        let obb2 = Obb::new(Point::new(0.0, 0.0, h), axes, Vector::new(1.0, 1.0, 1.0));

        let min_pen = obb_obb_find_min_penetration(&obb1, &obb2).unwrap();

        // The minimum is reached on a cross product parallel to the world z
        // axis; its raw depth is the 0.1 overlap scaled by the cross-product
        // length sqrt(2)/2.
        let axis = min_pen.axis.resolve(&obb1, &obb2);
        let unit = axis / axis.norm();
        assert_relative_eq!(unit.z.abs(), 1.0, epsilon = 1.0e-5);
        assert_relative_eq!(
            min_pen.depth,
            0.1 * core::f64::consts::FRAC_1_SQRT_2 as Real,
            epsilon = 1.0e-4
        );
    }
}
