//! The geometry engine: the capability that supplies the numeric algorithms behind
//! [`LinearGeometry`][crate::scalar::LinearGeometry] queries.
//!
//! An engine is held by a [`Factory`][crate::factory::Factory] and threaded through every
//! operation, so it can be substituted (for instance with GEOS, or with a mock in tests).

#[cfg(feature = "geos")]
mod geos;

#[cfg(feature = "geos")]
pub use self::geos::GeosEngine;

use crate::algorithm::geo::{
    EuclideanLength, IsRing, IsSimple, LineInterpolatePoint, LineLocatePoint,
};
use crate::coord::CoordSequence;
use crate::error::{GeoLinearError, Result};
use std::fmt::Debug;

/// A coordinate produced by an engine. z is `None` when the engine does not compute it.
pub type EngineCoord = (f64, f64, Option<f64>);

/// Primitive planar algorithms over a coordinate sequence.
///
/// Every method may fail; callers must treat an error as "no value" and never substitute a
/// default number.
pub trait GeometryEngine: Debug + Send + Sync {
    /// Sum of the Euclidean lengths of all segments.
    fn length(&self, coords: &CoordSequence) -> Result<f64>;

    /// Distance along the line of the point on it nearest to `(x, y)`.
    fn project(&self, coords: &CoordSequence, x: f64, y: f64) -> Result<f64>;

    /// The point at `distance` along the line. A negative distance counts back from the end.
    /// Distances outside the line are clamped to its endpoints. z is interpolated when the
    /// sequence stores z.
    fn interpolate(&self, coords: &CoordSequence, distance: f64) -> Result<EngineCoord>;

    /// Whether the line is closed and simple, with enough coordinates to form a ring.
    fn is_ring(&self, coords: &CoordSequence) -> Result<bool>;

    /// Whether the line has no self-intersections other than at its endpoints.
    fn is_simple(&self, coords: &CoordSequence) -> Result<bool>;
}

/// z at `distance` along the line, linear within each segment.
fn interpolate_z(coords: &CoordSequence, distance: f64) -> Result<f64> {
    let mut walked = 0.0;
    for i in 1..coords.len() {
        let (x0, y0, z0) = coords.get(i - 1)?;
        let (x1, y1, z1) = coords.get(i)?;
        let segment = (x1 - x0).hypot(y1 - y0);
        if walked + segment >= distance {
            if segment == 0.0 {
                return Ok(z0);
            }
            return Ok(z0 + (z1 - z0) * (distance - walked) / segment);
        }
        walked += segment;
    }

    Ok(coords.z_or_zero(coords.len().saturating_sub(1)))
}

/// The default engine, implemented with [`geo`] algorithms.
#[derive(Debug, Default, Clone, Copy)]
pub struct GeoEngine;

impl GeometryEngine for GeoEngine {
    fn length(&self, coords: &CoordSequence) -> Result<f64> {
        Ok(coords.euclidean_length())
    }

    fn project(&self, coords: &CoordSequence, x: f64, y: f64) -> Result<f64> {
        let fraction = coords
            .line_locate_point(&geo::Point::new(x, y))
            .ok_or_else(|| GeoLinearError::Engine("cannot project onto line".to_string()))?;
        Ok(fraction * coords.euclidean_length())
    }

    fn interpolate(&self, coords: &CoordSequence, distance: f64) -> Result<EngineCoord> {
        let length = coords.euclidean_length();
        let distance = if distance < 0.0 {
            distance + length
        } else {
            distance
        };
        let fraction = if length > 0.0 { distance / length } else { 0.0 };
        let point = coords
            .line_interpolate_point(fraction)
            .ok_or_else(|| GeoLinearError::Engine("cannot interpolate along line".to_string()))?;
        let z = if coords.dims().has_z() {
            Some(interpolate_z(coords, distance.clamp(0.0, length))?)
        } else {
            None
        };
        Ok((point.x(), point.y(), z))
    }

    fn is_ring(&self, coords: &CoordSequence) -> Result<bool> {
        Ok(IsRing::is_ring(coords))
    }

    fn is_simple(&self, coords: &CoordSequence) -> Result<bool> {
        Ok(IsSimple::is_simple(coords))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord::CoordDimensions;
    use approx::assert_relative_eq;

    #[test]
    fn project_is_absolute_distance() {
        let coords = CoordSequence::from_xy([(0., 0.), (10., 0.)]);
        assert_relative_eq!(GeoEngine.project(&coords, 4., 1.).unwrap(), 4.);
    }

    #[test]
    fn interpolate_is_absolute_distance() {
        let coords = CoordSequence::from_xy([(0., 0.), (10., 0.), (10., 10.)]);
        let (x, y, z) = GeoEngine.interpolate(&coords, 15.).unwrap();
        assert_relative_eq!(x, 10.);
        assert_relative_eq!(y, 5.);
        assert_eq!(z, None);
    }

    #[test]
    fn interpolate_clamps() {
        let coords = CoordSequence::from_xy([(0., 0.), (10., 0.)]);
        assert_eq!(GeoEngine.interpolate(&coords, -30.).unwrap(), (0., 0., None));
        assert_eq!(GeoEngine.interpolate(&coords, 30.).unwrap(), (10., 0., None));
    }

    #[test]
    fn negative_distance_counts_from_end() {
        let coords = CoordSequence::from_xy([(0., 0.), (10., 0.)]);
        let (x, y, _) = GeoEngine.interpolate(&coords, -3.).unwrap();
        assert_relative_eq!(x, 7.);
        assert_relative_eq!(y, 0.);
    }

    #[test]
    fn interpolate_carries_z() {
        let coords = CoordSequence::from_xyz([(0., 0., 0.), (10., 0., 10.), (10., 10., 0.)]);
        let (x, _, z) = GeoEngine.interpolate(&coords, 2.5).unwrap();
        assert_relative_eq!(x, 2.5);
        assert_relative_eq!(z.unwrap(), 2.5);

        let (_, y, z) = GeoEngine.interpolate(&coords, -2.5).unwrap();
        assert_relative_eq!(y, 7.5);
        assert_relative_eq!(z.unwrap(), 2.5);

        let (_, _, z) = GeoEngine.interpolate(&coords, 100.).unwrap();
        assert_relative_eq!(z.unwrap(), 0.);
    }

    #[test]
    fn simple_and_ring() {
        let bowtie = CoordSequence::from_xy([(0., 0.), (1., 1.), (1., 0.), (0., 1.)]);
        assert!(!GeoEngine.is_simple(&bowtie).unwrap());
        assert!(!GeoEngine.is_ring(&bowtie).unwrap());

        let square = CoordSequence::from_xy([(0., 0.), (1., 0.), (1., 1.), (0., 0.)]);
        assert!(GeoEngine.is_simple(&square).unwrap());
        assert!(GeoEngine.is_ring(&square).unwrap());
    }

    #[test]
    fn empty_fails() {
        let coords = CoordSequence::empty(CoordDimensions::TwoD);
        assert!(GeoEngine.project(&coords, 0., 0.).is_err());
        assert!(GeoEngine.interpolate(&coords, 0.).is_err());
        assert_eq!(GeoEngine.length(&coords).unwrap(), 0.);
    }
}
