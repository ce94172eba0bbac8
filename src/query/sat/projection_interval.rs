use crate::math::{Real, UnitVector, DIM};
use crate::shape::{Obb, SupportFeature};

/// The projection of a box onto an axis.
///
/// The interval keeps, for each of its two bounds, the feature of the box
/// whose projection reaches that bound. Intervals are rebuilt for every
/// query; they are never persisted.
#[derive(Clone, Debug)]
pub struct ProjectionInterval<'a> {
    /// The projected box.
    pub volume: &'a Obb,
    /// The lower bound of the projection.
    pub min: Real,
    /// The upper bound of the projection.
    pub max: Real,
    /// The feature supporting the lower bound.
    pub min_support: SupportFeature,
    /// The feature supporting the upper bound.
    pub max_support: SupportFeature,
}

impl<'a> ProjectionInterval<'a> {
    /// Projects `volume` onto `axis`.
    pub fn project(volume: &'a Obb, axis: &UnitVector) -> Self {
        let dir = axis.as_ref();
        let center = volume.center.coords.dot(dir);
        let mut radius = 0.0;

        for i in 0..DIM {
            radius += (volume.axis(i).dot(dir) * volume.half_extents[i]).abs();
        }

        ProjectionInterval {
            volume,
            min: center - radius,
            max: center + radius,
            min_support: volume.support_feature(&-dir),
            max_support: volume.support_feature(dir),
        }
    }

    /// The length of this interval.
    pub fn length(&self) -> Real {
        self.max - self.min
    }
}
