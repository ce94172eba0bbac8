//! Linear algebra type aliases.

/// The scalar type used throughout this crate.
#[cfg(feature = "f64")]
pub type Real = f64;

/// The scalar type used throughout this crate.
#[cfg(feature = "f32")]
pub type Real = f32;

/// The default tolerance used for geometric operations.
pub const DEFAULT_EPSILON: Real = Real::EPSILON;

/// The dimension of the space.
pub const DIM: usize = 3;

/// The point type.
pub type Point = na::Point3<Real>;

/// The vector type.
pub type Vector = na::Vector3<Real>;

/// The unit vector type.
pub type UnitVector = na::UnitVector3<Real>;

/// The matrix type.
pub type Matrix = na::Matrix3<Real>;

/// The rotation type.
pub type Rotation = na::UnitQuaternion<Real>;

/// The rotation matrix type.
pub type RotationMatrix = na::Rotation3<Real>;

/// The translation type.
pub type Translation = na::Translation3<Real>;

/// The transformation matrix type.
pub type Isometry = na::Isometry3<Real>;
