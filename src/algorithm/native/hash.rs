use crate::geo_traits::{CoordTrait, LineStringTrait};
use std::hash::{Hash, Hasher};

/// Hash a float consistently with [`f64_eq`][crate::algorithm::native::eq::f64_eq]: `-0.0`
/// hashes like `0.0` and every NaN hashes alike.
#[inline]
pub fn hash_f64<H: Hasher>(value: f64, state: &mut H) {
    let canonical = if value == 0.0 {
        0.0f64
    } else if value.is_nan() {
        f64::NAN
    } else {
        value
    };
    canonical.to_bits().hash(state);
}

/// Fold every coordinate into `state`, in sequence order: x, y, and z when `include_z` is set.
pub fn hash_coords<H: Hasher>(
    coords: &impl LineStringTrait<T = f64>,
    include_z: bool,
    state: &mut H,
) {
    coords.num_coords().hash(state);
    for coord in coords.coords() {
        hash_f64(coord.x(), state);
        hash_f64(coord.y(), state);
        if include_z {
            hash_f64(coord.z().unwrap_or(0.0), state);
        }
    }
}
