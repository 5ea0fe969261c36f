use crate::coord::CoordSequence;
use crate::error::Result;
use crate::io::geos::{to_geos_line_string, to_geos_point};
use geos::Geom;

/// Returns the distance along self of the point on it nearest to the given point.
pub trait Project {
    type Output;

    fn project(&self, x: f64, y: f64) -> Self::Output;
}

impl Project for CoordSequence {
    type Output = Result<f64>;

    fn project(&self, x: f64, y: f64) -> Self::Output {
        let line_string = to_geos_line_string(self)?;
        Ok(line_string.project(&to_geos_point(x, y)?)?)
    }
}
