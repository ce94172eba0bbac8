/*!
clash
========

**clash** is a 3-dimensional narrow-phase collision detection library
written with the rust programming language.

It determines whether two oriented bounding boxes intersect using the
separating axis theorem and, when they do, describes the intersection with
a contact record: a unit contact normal, a penetration depth, and the
touching feature geometry (a point, a segment, or a polygon).

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::needless_range_loop)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod math;
pub mod query;
pub mod shape;
pub mod utils;
