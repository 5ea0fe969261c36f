use crate::geo_traits::{CoordTrait, LineStringTrait};

/// Exact float equality, except that NaN equals NaN.
#[inline]
pub fn f64_eq(left: f64, right: f64) -> bool {
    left == right || (left.is_nan() && right.is_nan())
}

/// Compare two coordinates exactly. z is compared only when `compare_z` is set; a
/// coordinate without a z dimension reads as `0.0`.
pub fn coord_eq(
    left: impl CoordTrait<T = f64>,
    right: impl CoordTrait<T = f64>,
    compare_z: bool,
) -> bool {
    if !f64_eq(left.x(), right.x()) || !f64_eq(left.y(), right.y()) {
        return false;
    }

    !compare_z || f64_eq(left.z().unwrap_or(0.0), right.z().unwrap_or(0.0))
}

pub fn line_string_eq(
    left: &impl LineStringTrait<T = f64>,
    right: &impl LineStringTrait<T = f64>,
    compare_z: bool,
) -> bool {
    if left.num_coords() != right.num_coords() {
        return false;
    }

    left.coords()
        .zip(right.coords())
        .all(|(left_coord, right_coord)| coord_eq(left_coord, right_coord, compare_z))
}
