use crate::bounding_volume::BodyHandle;
use crate::math::{Real, UnitVector, DEFAULT_EPSILON};
use crate::query::clip::{clip_polygon_polygon, clip_segment_polygon, clip_segment_segment};
use crate::query::closest_points::closest_points_segment_segment;
use crate::query::sat::{self, ProjectionInterval, Side};
use crate::query::{Contact, ContactGeometry};
use crate::shape::{FeatureKind, Obb, Polygon, Segment, SupportFeature};
use na::{self, Unit};

// Below this length, clipped contact regions collapse to a single point.
const GEOMETRY_DUST: Real = 1.0e-5;

/// Computes a contact between two oriented boxes.
///
/// Returns `None` when a separating axis exists. Otherwise the contact
/// describes the axis of minimum penetration: a unit normal pointing from
/// the first box toward the second, the penetration depth along that axis,
/// and the geometry of the touching features.
pub fn contact_obb_obb(
    body1: BodyHandle,
    obb1: &Obb,
    body2: BodyHandle,
    obb2: &Obb,
) -> Option<Contact> {
    let min_pen = sat::obb_obb_find_min_penetration(obb1, obb2)?;

    // The parallel-pair shortcut keeps degenerate cross products out of the
    // minimum, so the winning axis always normalizes.
    let Some(axis) = Unit::try_new(min_pen.axis.resolve(obb1, obb2), DEFAULT_EPSILON) else {
        unreachable!("degenerate minimum-penetration axis")
    };

    let normal = match min_pen.side {
        Side::OneTwo => axis,
        Side::TwoOne => -axis,
    };

    // With the normal oriented from the first box toward the second, the
    // first box touches with its max-bound feature and the second with its
    // min-bound feature.
    let interval1 = ProjectionInterval::project(obb1, &normal);
    let interval2 = ProjectionInterval::project(obb2, &normal);
    let geometry = contact_geometry(&interval1.max_support, &interval2.min_support, &normal);

    Some(Contact::new(body1, body2, normal, min_pen.depth, geometry))
}

/// Classifies a pair of touching features and builds the matching contact
/// geometry.
fn contact_geometry(
    feature1: &SupportFeature,
    feature2: &SupportFeature,
    normal: &UnitVector,
) -> ContactGeometry {
    match (feature1.kind, feature2.kind) {
        // A vertex always carries the contact on its own.
        (FeatureKind::Vertex, _) => ContactGeometry::Point(feature1.points[0]),
        (_, FeatureKind::Vertex) => ContactGeometry::Point(feature2.points[0]),
        (FeatureKind::Edge, FeatureKind::Edge) => {
            edge_edge_geometry(&feature1.to_segment(), &feature2.to_segment())
        }
        (FeatureKind::Edge, FeatureKind::Face) => {
            edge_face_geometry(&feature1.to_segment(), &feature2.to_polygon(), normal)
        }
        (FeatureKind::Face, FeatureKind::Edge) => {
            edge_face_geometry(&feature2.to_segment(), &feature1.to_polygon(), normal)
        }
        (FeatureKind::Face, FeatureKind::Face) => {
            face_face_geometry(&feature1.to_polygon(), &feature2.to_polygon(), normal)
        }
    }
}

fn edge_edge_geometry(edge1: &Segment, edge2: &Segment) -> ContactGeometry {
    let d1 = edge1.scaled_direction();
    let d2 = edge2.scaled_direction();
    let cross = d1.cross(&d2);

    if cross.norm_squared() <= d1.norm_squared() * d2.norm_squared() * GEOMETRY_DUST {
        // Parallel overlapping edges share a whole sub-segment.
        if let Some((start, end)) = clip_segment_segment((edge1.a, edge1.b), (edge2.a, edge2.b)) {
            let a = na::center(&start.0, &start.1);
            let b = na::center(&end.0, &end.1);

            if na::distance(&a, &b) > GEOMETRY_DUST {
                return ContactGeometry::Segment(Segment::new(a, b));
            }

            return ContactGeometry::Point(a);
        }

        return ContactGeometry::Point(edge1.midpoint());
    }

    let (p1, p2) = closest_points_segment_segment(edge1, edge2);
    ContactGeometry::Point(na::center(&p1, &p2))
}

fn edge_face_geometry(edge: &Segment, face: &Polygon, normal: &UnitVector) -> ContactGeometry {
    match clip_segment_polygon(edge, face, normal) {
        Some(clipped) if clipped.length() > GEOMETRY_DUST => ContactGeometry::Segment(clipped),
        Some(clipped) => ContactGeometry::Point(clipped.midpoint()),
        // Numerical dust: the edge grazes past the face footprint.
        None => ContactGeometry::Point(edge.midpoint()),
    }
}

fn face_face_geometry(face1: &Polygon, face2: &Polygon, normal: &UnitVector) -> ContactGeometry {
    let clipped = clip_polygon_polygon(face1, face2, normal);

    match clipped.len() {
        // Numerical dust: the face footprints barely miss each other.
        0 => ContactGeometry::Point(face1.centroid()),
        1 => ContactGeometry::Point(clipped[0]),
        2 => {
            let segment = Segment::new(clipped[0], clipped[1]);

            if segment.length() > GEOMETRY_DUST {
                ContactGeometry::Segment(segment)
            } else {
                ContactGeometry::Point(segment.midpoint())
            }
        }
        _ => ContactGeometry::Polygon(Polygon::new(clipped)),
    }
}
