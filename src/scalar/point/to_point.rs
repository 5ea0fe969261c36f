use crate::error::{GeoLinearError, Result};
use crate::factory::Factory;
use crate::geo_traits::CoordTrait;
use crate::scalar::Point;

/// Conversion of a point-like input into a [`Point`] of a given factory.
pub trait ToPoint {
    /// The raw `(x, y, z)` of this input. z is `None` when the input carries none.
    fn to_xyz(&self) -> (f64, f64, Option<f64>);

    /// Convert into a point of `factory`.
    ///
    /// Fails when the factory supports z but the input has no z value.
    fn to_point(&self, factory: &Factory) -> Result<Point> {
        let (x, y, z) = self.to_xyz();
        let z = if factory.supports_z_or_m() {
            z.ok_or_else(|| GeoLinearError::conversion(None, "input has no z coordinate"))?
        } else {
            0.0
        };
        Ok(Point::new(factory, x, y, z))
    }
}

impl<C: CoordTrait<T = f64>> ToPoint for C {
    fn to_xyz(&self) -> (f64, f64, Option<f64>) {
        (self.x(), self.y(), self.z())
    }
}

impl ToPoint for Point {
    fn to_xyz(&self) -> (f64, f64, Option<f64>) {
        (self.x(), self.y(), self.z())
    }
}
