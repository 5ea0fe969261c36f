//! Traits for accessing coordinate data independently of its storage.

pub use coord::CoordTrait;
pub use line_string::{LineStringIterator, LineStringTrait};

mod coord;
mod line_string;
