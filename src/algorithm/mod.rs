//! Algorithms implemented on coordinate sequences.

pub mod geo;
#[cfg(feature = "geos")]
pub mod geos;
pub mod native;
