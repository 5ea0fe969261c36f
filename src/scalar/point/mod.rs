mod scalar;
mod to_point;

pub use scalar::Point;
pub use to_point::ToPoint;
