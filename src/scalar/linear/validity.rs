use crate::algorithm::geo::is_ring::MIN_RING_COORDS;
use crate::algorithm::geo::IsSimple;
use crate::scalar::linear::{LinearGeometry, LinearKind};
use thiserror::Error;

/// The reason a linear geometry fails its structural checks.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// A line string with a single point.
    #[error("line string has {actual} point, expected 0 or at least 2")]
    TooFewPoints { actual: usize },

    /// A non-empty ring with fewer than [`MIN_RING_COORDS`] points.
    #[error("linear ring has {actual} points, expected 0 or at least 4")]
    TooFewRingPoints { actual: usize },

    /// A ring whose first and last points differ.
    #[error("linear ring is not closed")]
    RingNotClosed,

    /// A line without exactly two points.
    #[error("line has {actual} points, expected 2")]
    NotASegment { actual: usize },

    /// A ring that crosses or touches itself.
    #[error("linear ring self-intersects")]
    SelfIntersection,
}

impl LinearGeometry {
    /// The first structural check this geometry fails, or `None` if it is valid.
    ///
    /// Empty line strings and rings are valid. Ring checks run in order: point count, closure,
    /// then self-intersection.
    pub fn invalid_reason(&self) -> Option<InvalidReason> {
        let n = self.num_points();
        match self.geometry_type() {
            LinearKind::LineString if n == 1 => Some(InvalidReason::TooFewPoints { actual: n }),
            LinearKind::LineString => None,
            LinearKind::Line if n != 2 => Some(InvalidReason::NotASegment { actual: n }),
            LinearKind::Line => None,
            LinearKind::LinearRing if n == 0 => None,
            LinearKind::LinearRing if n < MIN_RING_COORDS => {
                Some(InvalidReason::TooFewRingPoints { actual: n })
            }
            LinearKind::LinearRing if self.coord_sequence().is_closed() == Some(false) => {
                Some(InvalidReason::RingNotClosed)
            }
            LinearKind::LinearRing if !self.coord_sequence().is_simple() => {
                Some(InvalidReason::SelfIntersection)
            }
            LinearKind::LinearRing => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.invalid_reason().is_none()
    }
}
