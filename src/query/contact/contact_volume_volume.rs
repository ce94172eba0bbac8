use crate::bounding_volume::{BoundingVolume, VolumeShape};
use crate::query::contact::contact_obb_obb;
use crate::query::{Contact, Unsupported};

/// Computes one contact between two bounding volumes.
///
/// This is the narrow-phase entry point: the broad phase hands over a pair
/// of distinct volumes, and this function dispatches on their shape kinds.
/// It returns `Ok(None)` when the volumes are proven disjoint, `Ok(Some(_))`
/// with exactly one contact when they touch or overlap, and
/// `Err(Unsupported)` when no kernel handles this shape pair.
///
/// The query is a pure function of its inputs: calling it twice on the same
/// pair yields identical results, and distinct pairs can be tested from
/// distinct threads without any synchronization.
pub fn contact(
    volume1: &BoundingVolume,
    volume2: &BoundingVolume,
) -> Result<Option<Contact>, Unsupported> {
    debug_assert!(
        !std::ptr::eq(volume1, volume2),
        "narrow-phase queries take two distinct volumes"
    );

    let result = match (&volume1.shape, &volume2.shape) {
        (VolumeShape::Obb(obb1), VolumeShape::Obb(obb2)) => {
            contact_obb_obb(volume1.body, obb1, volume2.body, obb2)
        }
    };

    log::trace!(
        "narrow-phase {:?} vs {:?}: {}",
        volume1.shape.kind(),
        volume2.shape.kind(),
        if result.is_some() {
            "contact"
        } else {
            "disjoint"
        }
    );

    Ok(result)
}
