use crate::coord::CoordSequence;
use crate::engine::EngineCoord;
use crate::error::Result;
use crate::io::geos::to_geos_line_string;
use geos::Geom;

/// Returns the point at the given distance along self.
pub trait Interpolate {
    type Output;

    fn interpolate(&self, distance: f64) -> Self::Output;
}

impl Interpolate for CoordSequence {
    type Output = Result<EngineCoord>;

    fn interpolate(&self, distance: f64) -> Self::Output {
        let point = to_geos_line_string(self)?.interpolate(distance)?;
        let coord_seq = point.get_coord_seq()?;
        let x = coord_seq.get_x(0)?;
        let y = coord_seq.get_y(0)?;
        let z = coord_seq.get_z(0).ok().filter(|z| !z.is_nan());
        Ok((x, y, z))
    }
}
