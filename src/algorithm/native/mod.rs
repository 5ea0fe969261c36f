//! Native implementations of algorithms that need no external geometry engine.

pub mod eq;
pub mod hash;
