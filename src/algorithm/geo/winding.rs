use crate::coord::CoordSequence;
use geo::algorithm::winding_order::WindingOrder;
use geo::Winding as _Winding;

/// Calculate the winding order of a closed line.
pub trait Winding {
    /// Returns `Some(true)` if the ring is wound counter-clockwise, `Some(false)` if it is
    /// wound clockwise or its order cannot be determined, and `None` if it is empty.
    fn is_ccw(&self) -> Option<bool>;
}

impl Winding for CoordSequence {
    fn is_ccw(&self) -> Option<bool> {
        if self.is_empty() {
            return None;
        }

        let line_string: geo::LineString = self.into();
        Some(line_string.winding_order() == Some(WindingOrder::CounterClockwise))
    }
}
