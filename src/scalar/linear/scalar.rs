use crate::algorithm::geo::Winding;
use crate::algorithm::native::eq::line_string_eq;
use crate::algorithm::native::hash::hash_coords;
use crate::coord::CoordSequence;
use crate::error::{GeoLinearError, Result};
use crate::factory::Factory;
use crate::io::geo::coord_to_geo;
use crate::scalar::linear::LinearKind;
use crate::scalar::Point;
use crate::trait_::NativeScalar;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

const HASH_SEED: u64 = 0;

/// A line string, linear ring, or line: an owned coordinate sequence tagged with its variant
/// and the factory that created it.
///
/// Queries never fail hard: anything that cannot produce a value returns `None`.
#[derive(Debug, Clone)]
pub struct LinearGeometry {
    kind: LinearKind,
    coords: CoordSequence,
    factory: Factory,
}

impl LinearGeometry {
    pub(crate) fn new_unchecked(kind: LinearKind, factory: &Factory, coords: CoordSequence) -> Self {
        Self {
            kind,
            coords,
            factory: factory.clone(),
        }
    }

    /// Wrap an existing sequence, checking the invariants of `kind`.
    ///
    /// # Errors
    ///
    /// - a [`LinearKind::Line`] without exactly two coordinates
    /// - a non-empty [`LinearKind::LinearRing`] whose first and last coordinates differ
    pub fn try_new(kind: LinearKind, factory: &Factory, coords: CoordSequence) -> Result<Self> {
        match kind {
            LinearKind::Line if coords.len() != 2 => {
                return Err(GeoLinearError::ShapeMismatch {
                    expected: 2,
                    actual: coords.len(),
                })
            }
            LinearKind::LinearRing if coords.is_closed() == Some(false) => {
                return Err(GeoLinearError::General(
                    "linear ring must be closed".to_string(),
                ))
            }
            _ => {}
        }

        Ok(Self::new_unchecked(kind, factory, coords))
    }

    pub fn geometry_type(&self) -> LinearKind {
        self.kind
    }

    pub fn factory(&self) -> &Factory {
        &self.factory
    }

    pub fn coord_sequence(&self) -> &CoordSequence {
        &self.coords
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Total length of all segments, as computed by the factory's engine.
    pub fn length(&self) -> Option<f64> {
        self.factory
            .engine()
            .length(&self.coords)
            .map_err(|err| tracing::debug!(%err, "length failed"))
            .ok()
    }

    pub fn num_points(&self) -> usize {
        self.coords.len()
    }

    /// The point at index `i`, or `None` if `i` is negative or past the end.
    pub fn point_n(&self, i: isize) -> Option<Point> {
        let i = usize::try_from(i).ok()?;
        let x = self.coords.x(i).ok()?;
        let y = self.coords.y(i).ok()?;
        let z = if self.factory.supports_z_or_m() {
            self.coords.z_or_zero(i)
        } else {
            0.0
        };
        Some(Point::new(&self.factory, x, y, z))
    }

    pub fn start_point(&self) -> Option<Point> {
        self.point_n(0)
    }

    pub fn end_point(&self) -> Option<Point> {
        let n = self.num_points();
        if n == 0 {
            return None;
        }
        self.point_n(isize::try_from(n - 1).ok()?)
    }

    /// All points, in order. Points that cannot be read are left out.
    pub fn points(&self) -> Vec<Point> {
        let n = self.num_points();
        let points: Vec<Point> = (0..n)
            .filter_map(|i| isize::try_from(i).ok().and_then(|i| self.point_n(i)))
            .collect();
        if points.len() != n {
            tracing::warn!(
                expected = n,
                actual = points.len(),
                "some points could not be read and were omitted"
            );
        }
        points
    }

    /// Each point as `[x, y]`, or `[x, y, z]` when the factory supports z.
    pub fn coordinates(&self) -> Vec<Vec<f64>> {
        self.points().iter().map(Point::coordinates).collect()
    }

    /// Distance along this line of the point on it nearest to `point`.
    pub fn project_point(&self, point: &Point) -> Option<f64> {
        self.factory
            .engine()
            .project(&self.coords, point.x(), point.y())
            .map_err(|err| tracing::debug!(%err, "projection failed"))
            .ok()
    }

    /// The point at `location` distance along this line.
    pub fn interpolate_point(&self, location: f64) -> Option<Point> {
        let (x, y, z) = self
            .factory
            .engine()
            .interpolate(&self.coords, location)
            .map_err(|err| tracing::debug!(%err, location, "interpolation failed"))
            .ok()?;
        Some(Point::new(&self.factory, x, y, z.unwrap_or(0.0)))
    }

    /// Whether the first and last points share x and y exactly. `None` if empty.
    pub fn is_closed(&self) -> Option<bool> {
        let first = self.start_point()?;
        let last = self.end_point()?;
        Some(first.x() == last.x() && first.y() == last.y())
    }

    /// Whether this line is closed and simple, as judged by the factory's engine.
    pub fn is_ring(&self) -> Option<bool> {
        self.factory
            .engine()
            .is_ring(&self.coords)
            .map_err(|err| tracing::debug!(%err, "ring test failed"))
            .ok()
    }

    /// Whether this line has no self-intersections other than at its endpoints, as judged by
    /// the factory's engine.
    pub fn is_simple(&self) -> Option<bool> {
        self.factory
            .engine()
            .is_simple(&self.coords)
            .map_err(|err| tracing::debug!(%err, "simplicity test failed"))
            .ok()
    }

    /// Whether a linear ring is wound counter-clockwise. `None` for other variants and for
    /// empty rings.
    pub fn is_ccw(&self) -> Option<bool> {
        match self.kind {
            LinearKind::LinearRing => self.coords.is_ccw(),
            _ => None,
        }
    }

    /// A hash of this geometry, stable across calls and consistent with `==`.
    pub fn hash_code(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl PartialEq for LinearGeometry {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.factory == other.factory
            && line_string_eq(
                &self.coords,
                &other.coords,
                self.factory.supports_z_or_m(),
            )
    }
}

impl Eq for LinearGeometry {}

impl Hash for LinearGeometry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        HASH_SEED.hash(state);
        self.kind.hash(state);
        self.factory.hash(state);
        hash_coords(&self.coords, self.factory.supports_z_or_m(), state);
    }
}

impl From<&LinearGeometry> for geo::LineString {
    fn from(value: &LinearGeometry) -> Self {
        (&value.coords).into()
    }
}

impl NativeScalar for LinearGeometry {
    type ScalarGeo = geo::LineString;

    fn to_geo(&self) -> Self::ScalarGeo {
        self.into()
    }

    fn to_geo_geometry(&self) -> geo::Geometry {
        use crate::geo_traits::LineStringTrait;

        match (self.kind, self.coords.coord(0), self.coords.coord(1)) {
            (LinearKind::Line, Some(start), Some(end)) => {
                geo::Geometry::Line(geo::Line::new(coord_to_geo(&start), coord_to_geo(&end)))
            }
            _ => geo::Geometry::LineString(self.to_geo()),
        }
    }

    #[cfg(feature = "geos")]
    fn to_geos(&self) -> Result<geos::Geometry> {
        use crate::io::geos::{to_geos_coord_seq, to_geos_line_string};

        match self.kind {
            LinearKind::LinearRing => Ok(geos::Geometry::create_linear_ring(
                to_geos_coord_seq(&self.coords)?,
            )?),
            _ => to_geos_line_string(&self.coords),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::factory::FactoryOptions;
    use crate::test::engine::failing_factory;
    use crate::test::factory::{xy_factory, xyz_factory};
    use crate::test::linestring::{ls0, square, square_open};
    use approx::assert_relative_eq;
    use std::collections::HashSet;

    #[test]
    fn closed_square_scenario() {
        let ring = xy_factory().linear_ring(&square()).unwrap();
        assert_eq!(ring.num_points(), 4);
        assert_eq!(ring.is_closed(), Some(true));
        assert_eq!(ring.is_ring(), Some(true));
    }

    #[test]
    fn diagonal_length_scenario() {
        let ls = xy_factory().line_string(&[(0., 0.), (1., 1.)]).unwrap();
        assert_relative_eq!(ls.length().unwrap(), 2f64.sqrt());
    }

    #[test]
    fn empty_geometry() {
        let empty: [(f64, f64); 0] = [];
        let ring = xy_factory().linear_ring(&empty).unwrap();
        assert!(ring.is_empty());
        assert_eq!(ring.num_points(), 0);
        assert_eq!(ring.is_closed(), None);
        assert!(ring.start_point().is_none());
        assert!(ring.end_point().is_none());
        assert!(ring.points().is_empty());
        assert_eq!(ring.is_ring(), Some(false));
        assert_eq!(ring.is_ccw(), None);
        assert_eq!(ring.length(), Some(0.));
        assert!(ring.interpolate_point(0.).is_none());
    }

    #[test]
    fn point_n_bounds() {
        let ls = xy_factory().line_string(&square_open()).unwrap();
        assert!(ls.point_n(-1).is_none());
        assert!(ls.point_n(4).is_none());
        let p = ls.point_n(2).unwrap();
        assert_eq!((p.x(), p.y(), p.z()), (1., 1., None));
        assert_eq!(ls.start_point(), ls.point_n(0));
        assert_eq!(ls.end_point(), ls.point_n(3));
    }

    #[test]
    fn point_n_reads_z_when_supported() {
        let factory = xyz_factory();
        let ls = factory.line_string(&[(0., 0., 4.), (1., 1., 5.)]).unwrap();
        assert_eq!(ls.point_n(1).unwrap().z(), Some(5.));
        assert_eq!(ls.coordinates(), vec![vec![0., 0., 4.], vec![1., 1., 5.]]);
    }

    #[test]
    fn z_defaults_on_flat_sequence() {
        let coords = CoordSequence::from_xy([(0., 0.), (1., 1.)]);
        let ls = LinearGeometry::try_new(LinearKind::LineString, &xyz_factory(), coords).unwrap();
        assert_eq!(ls.point_n(1).unwrap().z(), Some(0.));
    }

    #[test]
    fn points_in_order() {
        let ls = xy_factory().line_string(&square_open()).unwrap();
        let xy: Vec<_> = ls.points().iter().map(|p| (p.x(), p.y())).collect();
        assert_eq!(xy, square_open().to_vec());
        assert_eq!(ls.coordinates()[3], vec![0., 1.]);
    }

    #[test]
    fn project_and_interpolate() {
        let factory = xy_factory();
        let ls = factory.line_string(&[(0., 0.), (10., 0.), (10., 10.)]).unwrap();
        assert_relative_eq!(ls.project_point(&factory.point(12., 5., 0.)).unwrap(), 15.);

        let p = ls.interpolate_point(5.).unwrap();
        assert_relative_eq!(p.x(), 5.);
        assert_relative_eq!(p.y(), 0.);
        assert_eq!(p.factory(), &factory);
    }

    #[test]
    fn interpolated_point_carries_z() {
        let ls = xyz_factory()
            .line_string(&[(0., 0., 1.), (10., 0., 3.)])
            .unwrap();
        assert_relative_eq!(ls.interpolate_point(5.).unwrap().z().unwrap(), 2.);
        assert_relative_eq!(ls.interpolate_point(-2.5).unwrap().x(), 7.5);

        let flat = xy_factory()
            .line_string(&[(0., 0., 1.), (10., 0., 3.)])
            .unwrap();
        assert_eq!(flat.interpolate_point(5.).unwrap().z(), None);
    }

    #[test]
    fn engine_failures_are_soft() {
        let factory = failing_factory();
        let ls = factory.line_string(&[(0., 0.), (1., 1.)]).unwrap();
        assert_eq!(ls.length(), None);
        assert_eq!(ls.is_ring(), None);
        assert_eq!(ls.is_simple(), None);
        assert_eq!(ls.project_point(&factory.point(0., 0., 0.)), None);
        assert!(ls.interpolate_point(0.5).is_none());
        assert_eq!(ls.num_points(), 2);
        assert_eq!(ls.is_closed(), Some(false));
    }

    #[test]
    fn is_closed_is_exact() {
        let ls = xy_factory()
            .line_string(&[(0., 0.), (1., 0.), (0., 1e-12)])
            .unwrap();
        assert_eq!(ls.is_closed(), Some(false));
    }

    #[test]
    fn line_string_from_ring_input_is_open_ring_not_closed() {
        let ls = xy_factory().line_string(&square_open()).unwrap();
        assert_eq!(ls.is_closed(), Some(false));
        assert_eq!(ls.is_ring(), Some(false));
    }

    #[test]
    fn winding_only_for_rings() {
        let factory = xy_factory();
        let ring = factory.linear_ring(&square_open()).unwrap();
        assert_eq!(ring.is_ccw(), Some(true));

        let reversed: Vec<_> = square_open().iter().rev().copied().collect();
        assert_eq!(factory.linear_ring(&reversed).unwrap().is_ccw(), Some(false));

        let ls = factory.line_string(&square()).unwrap();
        assert_eq!(ls.is_ccw(), None);
    }

    #[test]
    fn try_new_checks_shape() {
        let factory = xy_factory();
        let three = CoordSequence::from_xy([(0., 0.), (1., 0.), (1., 1.)]);
        assert!(matches!(
            LinearGeometry::try_new(LinearKind::Line, &factory, three.clone()),
            Err(GeoLinearError::ShapeMismatch {
                expected: 2,
                actual: 3
            })
        ));
        assert!(LinearGeometry::try_new(LinearKind::LinearRing, &factory, three.clone()).is_err());
        assert!(LinearGeometry::try_new(LinearKind::LineString, &factory, three).is_ok());
    }

    #[test]
    fn eq_requires_same_variant() {
        let factory = xy_factory();
        let ls = factory.line_string(&square()).unwrap();
        let ring = factory.linear_ring(&square()).unwrap();
        assert_ne!(ls, ring);
        assert_eq!(ls, ls.clone());
    }

    #[test]
    fn eq_requires_compatible_factory() {
        let a = xy_factory().line_string(&square()).unwrap();
        let other = Factory::with_options(FactoryOptions::default().with_srid(4326));
        let b = other.line_string(&square()).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn eq_compares_z_only_when_supported() {
        let a = xyz_factory().line(&(0., 0., 1.), &(1., 1., 1.)).unwrap();
        let b = xyz_factory().line(&(0., 0., 2.), &(1., 1., 1.)).unwrap();
        assert_ne!(a, b);
        assert_ne!(a.hash_code(), b.hash_code());

        let a = xy_factory().line(&(0., 0., 1.), &(1., 1., 1.)).unwrap();
        let b = xy_factory().line(&(0., 0., 2.), &(1., 1., 1.)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.hash_code(), b.hash_code());
    }

    #[test]
    fn hash_distinguishes_variant() {
        let factory = xy_factory();
        let ls = factory.line_string(&[(0., 0.), (1., 1.)]).unwrap();
        let line = factory.line(&(0., 0.), &(1., 1.)).unwrap();
        assert_ne!(ls, line);
        assert_ne!(ls.hash_code(), line.hash_code());
    }

    #[test]
    fn usable_in_hash_set() {
        let factory = xy_factory();
        let mut set = HashSet::new();
        set.insert(factory.line_string(&square()).unwrap());
        set.insert(factory.line_string(&square()).unwrap());
        set.insert(factory.linear_ring(&square()).unwrap());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn to_geo() {
        let factory = xy_factory();
        let ls = factory.line_string(&[(0., 1.), (1., 2.)]).unwrap();
        assert_eq!(ls.to_geo(), ls0());

        let line = factory.line(&(0., 1.), &(1., 2.)).unwrap();
        assert!(matches!(line.to_geo_geometry(), geo::Geometry::Line(_)));
        assert!(matches!(ls.to_geo_geometry(), geo::Geometry::LineString(_)));
    }

    mod properties {
        use super::*;
        use crate::scalar::linear::copy_into;
        use proptest::prelude::*;

        fn coords() -> impl Strategy<Value = Vec<(f64, f64)>> {
            prop::collection::vec((-100i32..100, -100i32..100), 0..12).prop_map(|v| {
                v.into_iter()
                    .map(|(x, y)| (f64::from(x), f64::from(y)))
                    .collect()
            })
        }

        proptest! {
            #[test]
            fn open_build_keeps_size(points in coords()) {
                let ls = xy_factory().line_string(&points).unwrap();
                prop_assert_eq!(ls.num_points(), points.len());
            }

            #[test]
            fn ring_build_closes_once(points in coords()) {
                let ring = xy_factory().linear_ring(&points).unwrap();
                match (points.first(), points.last()) {
                    (Some(first), Some(last)) if first != last => {
                        prop_assert_eq!(ring.num_points(), points.len() + 1);
                        prop_assert_eq!(ring.is_closed(), Some(true));
                    }
                    _ => prop_assert_eq!(ring.num_points(), points.len()),
                }

                let again = xy_factory().linear_ring(&ring.coordinates()
                    .iter()
                    .map(|c| (c[0], c[1]))
                    .collect::<Vec<_>>()).unwrap();
                prop_assert_eq!(again.num_points(), ring.num_points());
            }

            #[test]
            fn copy_into_line_iff_two_points(points in coords()) {
                let factory = xy_factory();
                let ls = factory.line_string(&points).unwrap();
                let line = copy_into(LinearKind::Line, &factory, &ls);
                prop_assert_eq!(line.is_some(), ls.num_points() == 2);
            }

            #[test]
            fn eq_implies_same_hash(points in coords()) {
                let factory = xy_factory();
                let a = factory.line_string(&points).unwrap();
                let b = factory.line_string(&points).unwrap();
                prop_assert_eq!(&a, &a);
                prop_assert_eq!(&a, &b);
                prop_assert_eq!(a.hash_code(), a.hash_code());
                prop_assert_eq!(a.hash_code(), b.hash_code());
            }

            #[test]
            fn point_n_out_of_range(points in coords()) {
                let ls = xy_factory().line_string(&points).unwrap();
                prop_assert!(ls.point_n(points.len() as isize).is_none());
                prop_assert!(ls.point_n(-1).is_none());
            }
        }
    }
}
