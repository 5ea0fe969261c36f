use crate::coord::CoordSequence;
use crate::error::Result;
use crate::io::geos::to_geos_line_string;
use geos::Geom;

/// Returns the length of self. The unit depends of the SRID.
pub trait Length {
    type Output;

    fn length(&self) -> Self::Output;
}

impl Length for CoordSequence {
    type Output = Result<f64>;

    fn length(&self) -> Self::Output {
        Ok(to_geos_line_string(self)?.length()?)
    }
}
