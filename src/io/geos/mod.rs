//! Convert to [`geos`] geometries.

mod scalar;

pub use scalar::{to_geos_coord_seq, to_geos_line_string, to_geos_point};
