//! Scalar geometries: points and linear geometries.

pub use linear::{InvalidReason, LinearGeometry, LinearKind};
pub use point::{Point, ToPoint};

pub mod linear;
pub mod point;
