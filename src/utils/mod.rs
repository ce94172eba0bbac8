//! Various unsorted geometrical and logical operators.

pub(crate) use self::inv::inv;

mod inv;
