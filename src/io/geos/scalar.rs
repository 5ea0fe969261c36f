use crate::coord::CoordSequence;
use crate::error::Result;
use crate::geo_traits::{CoordTrait, LineStringTrait};
use geos::{CoordDimensions, CoordSeq};

/// Copy a sequence into a GEOS coordinate sequence, keeping its dimensions.
pub fn to_geos_coord_seq(coords: &CoordSequence) -> Result<CoordSeq> {
    let dims = if coords.dims().has_z() {
        CoordDimensions::ThreeD
    } else {
        CoordDimensions::TwoD
    };
    let mut coord_seq = CoordSeq::new(coords.len() as u32, dims)?;
    for (i, coord) in coords.coords().enumerate() {
        coord_seq.set_x(i, coord.x())?;
        coord_seq.set_y(i, coord.y())?;
        if let Some(z) = coord.z() {
            coord_seq.set_z(i, z)?;
        }
    }
    Ok(coord_seq)
}

pub fn to_geos_line_string(coords: &CoordSequence) -> Result<geos::Geometry> {
    Ok(geos::Geometry::create_line_string(to_geos_coord_seq(
        coords,
    )?)?)
}

pub fn to_geos_point(x: f64, y: f64) -> Result<geos::Geometry> {
    let mut coord_seq = CoordSeq::new(1, CoordDimensions::TwoD)?;
    coord_seq.set_x(0, x)?;
    coord_seq.set_y(0, y)?;
    Ok(geos::Geometry::create_point(coord_seq)?)
}
