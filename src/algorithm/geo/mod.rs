//! Algorithms implemented on coordinate sequences using georust/geo algorithms.

/// Calculate the length of a `LineString`.
pub mod euclidean_length;
pub use euclidean_length::EuclideanLength;

/// Check whether a `LineString` is a valid ring.
pub mod is_ring;
pub use is_ring::IsRing;

/// Check whether a `LineString` has no self-intersections.
pub mod is_simple;
pub use is_simple::IsSimple;

/// Interpolate a point along a `LineString`.
pub mod line_interpolate_point;
pub use line_interpolate_point::LineInterpolatePoint;

/// Locate a point's closest position along a `LineString`.
pub mod line_locate_point;
pub use line_locate_point::LineLocatePoint;

/// Calculate the winding order of a ring.
pub mod winding;
pub use winding::Winding;
