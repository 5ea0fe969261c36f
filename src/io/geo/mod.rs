//! Convert to and from [`geo`] scalars.

mod scalar;

pub use scalar::{coord_to_geo, line_string_to_geo};
