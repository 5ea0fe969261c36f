//! Interoperability with other geometry libraries.

pub mod geo;
#[cfg(feature = "geos")]
pub mod geos;
