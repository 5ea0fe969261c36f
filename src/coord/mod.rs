//! Storage for the coordinates backing a linear geometry.
//!
//! Coordinates are stored _interleaved_ in a single `f64` buffer, two or three values per
//! coordinate depending on [`CoordDimensions`].

mod scalar;
mod sequence;

pub use scalar::SequenceCoord;
pub use sequence::CoordSequence;

use serde::{Deserialize, Serialize};

/// The number of numeric channels stored per coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoordDimensions {
    TwoD,
    ThreeD,
}

impl CoordDimensions {
    /// Number of `f64` values stored per coordinate.
    pub fn size(&self) -> usize {
        match self {
            CoordDimensions::TwoD => 2,
            CoordDimensions::ThreeD => 3,
        }
    }

    pub fn has_z(&self) -> bool {
        matches!(self, CoordDimensions::ThreeD)
    }
}
