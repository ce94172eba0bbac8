//! Contact computation between bounding volumes.

pub use self::contact::{Contact, ContactGeometry};
pub use self::contact_obb_obb::contact_obb_obb;
pub use self::contact_volume_volume::contact;

mod contact;
mod contact_obb_obb;
mod contact_volume_volume;
