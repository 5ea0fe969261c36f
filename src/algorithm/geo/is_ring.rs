use crate::algorithm::geo::IsSimple;
use crate::coord::CoordSequence;

/// The minimum number of coordinates in a non-empty ring.
pub const MIN_RING_COORDS: usize = 4;

/// Returns `true` if the geometry is a ring: closed, simple, and with at least
/// [`MIN_RING_COORDS`] coordinates.
pub trait IsRing {
    fn is_ring(&self) -> bool;
}

impl IsRing for CoordSequence {
    fn is_ring(&self) -> bool {
        self.len() >= MIN_RING_COORDS && self.is_closed() == Some(true) && self.is_simple()
    }
}
