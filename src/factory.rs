//! The factory: configuration shared by every geometry it creates.

use crate::coord::CoordDimensions;
use crate::engine::{GeoEngine, GeometryEngine};
use crate::error::Result;
use crate::scalar::{LinearGeometry, Point, ToPoint};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Options controlling the geometries created by a [`Factory`].
///
/// ```
/// use geolinear::factory::FactoryOptions;
///
/// let options = FactoryOptions::from_json(r#"{"has_z_coordinate": true, "srid": 4326}"#).unwrap();
/// assert!(options.has_z_coordinate);
/// assert!(!options.has_m_coordinate);
/// assert_eq!(options.srid, 4326);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FactoryOptions {
    pub has_z_coordinate: bool,
    pub has_m_coordinate: bool,
    pub srid: i32,
}

impl FactoryOptions {
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn with_z(mut self, has_z: bool) -> Self {
        self.has_z_coordinate = has_z;
        self
    }

    pub fn with_m(mut self, has_m: bool) -> Self {
        self.has_m_coordinate = has_m;
        self
    }

    pub fn with_srid(mut self, srid: i32) -> Self {
        self.srid = srid;
        self
    }
}

struct FactoryInner {
    options: FactoryOptions,
    engine: Arc<dyn GeometryEngine>,
}

/// A cheaply clonable handle to geometry configuration and the geometry engine.
///
/// Two factories are compatible (`==`) when their options match, regardless of engine.
#[derive(Clone)]
pub struct Factory {
    inner: Arc<FactoryInner>,
}

impl Factory {
    pub fn new(options: FactoryOptions, engine: Arc<dyn GeometryEngine>) -> Self {
        Self {
            inner: Arc::new(FactoryInner { options, engine }),
        }
    }

    /// A factory using the default [`GeoEngine`].
    pub fn with_options(options: FactoryOptions) -> Self {
        Self::new(options, Arc::new(GeoEngine))
    }

    pub fn options(&self) -> &FactoryOptions {
        &self.inner.options
    }

    pub fn engine(&self) -> &dyn GeometryEngine {
        self.inner.engine.as_ref()
    }

    pub fn srid(&self) -> i32 {
        self.inner.options.srid
    }

    pub fn has_z(&self) -> bool {
        self.inner.options.has_z_coordinate
    }

    pub fn has_m(&self) -> bool {
        self.inner.options.has_m_coordinate
    }

    /// Whether coordinates carry a third (z or measure) channel.
    pub fn supports_z_or_m(&self) -> bool {
        self.has_z() || self.has_m()
    }

    /// The number of channels read from input points.
    pub fn dims(&self) -> CoordDimensions {
        if self.supports_z_or_m() {
            CoordDimensions::ThreeD
        } else {
            CoordDimensions::TwoD
        }
    }

    /// Create a point. `z` is dropped unless the factory supports z.
    pub fn point(&self, x: f64, y: f64, z: f64) -> Point {
        Point::new(self, x, y, z)
    }

    pub fn line_string<P: ToPoint>(&self, points: &[P]) -> Result<LinearGeometry> {
        LinearGeometry::line_string(self, points)
    }

    pub fn linear_ring<P: ToPoint>(&self, points: &[P]) -> Result<LinearGeometry> {
        LinearGeometry::linear_ring(self, points)
    }

    pub fn line<P: ToPoint>(&self, start: &P, end: &P) -> Result<LinearGeometry> {
        LinearGeometry::line(self, start, end)
    }
}

impl Default for Factory {
    fn default() -> Self {
        Self::with_options(FactoryOptions::default())
    }
}

impl fmt::Debug for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Factory")
            .field("options", &self.inner.options)
            .field("engine", &self.inner.engine)
            .finish()
    }
}

impl PartialEq for Factory {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.inner.options == other.inner.options
    }
}

impl Eq for Factory {}

impl Hash for Factory {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.options.hash(state);
    }
}
