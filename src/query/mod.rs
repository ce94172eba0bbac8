//! Non-persistent geometric queries.
//!
//! The most general entry point is [`query::contact()`](contact()): it takes
//! two bounding volumes, dispatches over their shape kinds, and either
//! proves them disjoint or describes their intersection with a [`Contact`].
//!
//! The functions exported by the `details` submodule are more specific
//! versions of the above, dedicated to pairs of shapes known at
//! compile-time, plus the clipping primitives the contact synthesis relies
//! on.

pub use self::contact::{contact, Contact, ContactGeometry};
pub use self::error::Unsupported;

mod clip;
mod closest_points;
pub mod contact;
mod error;
pub mod sat;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::clip::*;
    pub use super::closest_points::closest_points_segment_segment;
    pub use super::contact::contact_obb_obb;
}
