//! Linear geometries: line strings, linear rings and two-point lines sharing one kernel.

mod builder;
mod copy;
mod kind;
mod scalar;
mod validity;

pub use builder::{build_from_points, build_segment};
pub use copy::copy_into;
pub use kind::LinearKind;
pub use scalar::LinearGeometry;
pub use validity::InvalidReason;
