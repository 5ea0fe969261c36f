use crate::coord::CoordSequence;
use crate::error::Result;
use crate::io::geos::to_geos_line_string;
use geos::Geom;

/// Returns `true` if the geometry is a ring.
pub trait IsRing {
    type Output;

    fn is_ring(&self) -> Self::Output;
}

impl IsRing for CoordSequence {
    type Output = Result<bool>;

    fn is_ring(&self) -> Self::Output {
        Ok(to_geos_line_string(self)?.is_ring()?)
    }
}
