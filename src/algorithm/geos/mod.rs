//! Bindings to the [`geos`] crate for geometry operations.

mod interpolate;
mod is_ring;
mod is_simple;
mod length;
mod project;

pub use interpolate::Interpolate;
pub use is_ring::IsRing;
pub use is_simple::IsSimple;
pub use length::Length;
pub use project::Project;
