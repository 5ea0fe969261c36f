use crate::algorithm::native::eq::coord_eq;
use crate::factory::Factory;
use crate::trait_::NativeScalar;

/// A point created by a [`Factory`].
///
/// The z value is only meaningful when the factory supports z (or measure); otherwise it is
/// always `0.0` and [`Point::z`] returns `None`.
#[derive(Debug, Clone)]
pub struct Point {
    x: f64,
    y: f64,
    z: f64,
    factory: Factory,
}

impl Point {
    pub fn new(factory: &Factory, x: f64, y: f64, z: f64) -> Self {
        let z = if factory.supports_z_or_m() { z } else { 0.0 };
        Self {
            x,
            y,
            z,
            factory: factory.clone(),
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> Option<f64> {
        self.factory.supports_z_or_m().then_some(self.z)
    }

    pub fn factory(&self) -> &Factory {
        &self.factory
    }

    /// `[x, y]`, or `[x, y, z]` when the factory supports z.
    pub fn coordinates(&self) -> Vec<f64> {
        match self.z() {
            Some(z) => vec![self.x, self.y, z],
            None => vec![self.x, self.y],
        }
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.factory == other.factory
            && coord_eq(
                (self.x, self.y, self.z),
                (other.x, other.y, other.z),
                self.factory.supports_z_or_m(),
            )
    }
}

impl From<&Point> for geo::Point {
    fn from(value: &Point) -> Self {
        geo::Point::new(value.x, value.y)
    }
}

impl From<Point> for geo::Point {
    fn from(value: Point) -> Self {
        (&value).into()
    }
}

impl NativeScalar for Point {
    type ScalarGeo = geo::Point;

    fn to_geo(&self) -> Self::ScalarGeo {
        self.into()
    }

    fn to_geo_geometry(&self) -> geo::Geometry {
        geo::Geometry::Point(self.to_geo())
    }

    #[cfg(feature = "geos")]
    fn to_geos(&self) -> crate::error::Result<geos::Geometry> {
        crate::io::geos::to_geos_point(self.x, self.y)
    }
}
