//! Traits shared by the scalar geometry types.

/// A geometry that can be converted to its [`geo`] (and optionally [`geos`]) equivalent.
pub trait NativeScalar {
    type ScalarGeo;

    fn to_geo(&self) -> Self::ScalarGeo;

    fn to_geo_geometry(&self) -> geo::Geometry;

    #[cfg(feature = "geos")]
    fn to_geos(&self) -> crate::error::Result<geos::Geometry>;
}
