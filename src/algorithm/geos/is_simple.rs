use crate::coord::CoordSequence;
use crate::error::Result;
use crate::io::geos::to_geos_line_string;
use geos::Geom;

/// Returns `true` if the geometry has no anomalous points, such as self-intersections.
pub trait IsSimple {
    type Output;

    fn is_simple(&self) -> Self::Output;
}

impl IsSimple for CoordSequence {
    type Output = Result<bool>;

    fn is_simple(&self) -> Self::Output {
        Ok(to_geos_line_string(self)?.is_simple()?)
    }
}
