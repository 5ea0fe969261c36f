use crate::coord::{CoordDimensions, CoordSequence};
use crate::error::{GeoLinearError, Result};
use crate::factory::Factory;
use crate::scalar::linear::{LinearGeometry, LinearKind};
use crate::scalar::ToPoint;

/// How a missing z is handled when the factory supports z.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ZRead {
    /// A missing z fails the conversion.
    Required,
    /// A missing z reads as `0.0`.
    BestEffort,
}

/// Read `(x, y, z)` from a point-like input. z is `0.0` unless the factory supports z.
fn read_point<P: ToPoint>(
    factory: &Factory,
    input: &P,
    z_read: ZRead,
) -> Result<(f64, f64, f64)> {
    let (x, y, z) = input.to_xyz();
    let z = match (factory.supports_z_or_m(), z) {
        (false, _) => 0.0,
        (true, Some(z)) => z,
        (true, None) if z_read == ZRead::Required => {
            return Err(GeoLinearError::conversion(None, "input has no z coordinate"))
        }
        (true, None) => 0.0,
    };
    Ok((x, y, z))
}

/// Build a coordinate sequence from point-like inputs.
///
/// With `should_close`, a copy of the first point is appended unless the input is empty or
/// its first and last points already share x and y. The result always stores three channels;
/// z is `0.0` everywhere unless the factory supports z.
///
/// Fails without producing a sequence if any input cannot be converted.
///
/// ```
/// use geolinear::factory::Factory;
/// use geolinear::scalar::linear::build_from_points;
///
/// let factory = Factory::default();
/// let ring = build_from_points(&factory, &[(0., 0.), (1., 0.), (1., 1.)], true).unwrap();
/// assert_eq!(ring.len(), 4);
///
/// let closed = build_from_points(&factory, &[(0., 0.), (1., 0.), (0., 0.)], true).unwrap();
/// assert_eq!(closed.len(), 3);
/// ```
pub fn build_from_points<P: ToPoint>(
    factory: &Factory,
    points: &[P],
    should_close: bool,
) -> Result<CoordSequence> {
    let values = points
        .iter()
        .enumerate()
        .map(|(i, input)| {
            read_point(factory, input, ZRead::Required).map_err(|err| err.at_index(i))
        })
        .collect::<Result<Vec<_>>>()?;

    let close = should_close
        && match (values.first(), values.last()) {
            (Some(first), Some(last)) => first.0 != last.0 || first.1 != last.1,
            _ => false,
        };

    let mut coords = CoordSequence::zeroed(values.len() + close as usize, CoordDimensions::ThreeD);
    for (i, (x, y, z)) in values.iter().enumerate() {
        coords.set(i, *x, *y, *z)?;
    }
    if close {
        let (x, y, z) = values[0];
        coords.set(values.len(), x, y, z)?;
        tracing::trace!(num_points = values.len(), "closed ring by appending first point");
    }

    Ok(coords)
}

/// Build a two-point coordinate sequence from a start and an end point.
///
/// Unlike [`build_from_points`], an endpoint without z is accepted under a z-enabled factory
/// and reads as `0.0`.
pub fn build_segment<P: ToPoint>(factory: &Factory, start: &P, end: &P) -> Result<CoordSequence> {
    let (x0, y0, z0) =
        read_point(factory, start, ZRead::BestEffort).map_err(|err| err.at_index(0))?;
    let (x1, y1, z1) =
        read_point(factory, end, ZRead::BestEffort).map_err(|err| err.at_index(1))?;

    let mut coords = CoordSequence::zeroed(2, CoordDimensions::ThreeD);
    coords.set(0, x0, y0, z0)?;
    coords.set(1, x1, y1, z1)?;
    Ok(coords)
}

impl LinearGeometry {
    /// Create an open line string from point-like inputs.
    pub fn line_string<P: ToPoint>(factory: &Factory, points: &[P]) -> Result<Self> {
        let coords = build_from_points(factory, points, false)?;
        Ok(Self::new_unchecked(LinearKind::LineString, factory, coords))
    }

    /// Create a linear ring from point-like inputs, closing it if needed.
    pub fn linear_ring<P: ToPoint>(factory: &Factory, points: &[P]) -> Result<Self> {
        let coords = build_from_points(factory, points, true)?;
        Ok(Self::new_unchecked(LinearKind::LinearRing, factory, coords))
    }

    /// Create a line segment between two points.
    pub fn line<P: ToPoint>(factory: &Factory, start: &P, end: &P) -> Result<Self> {
        let coords = build_segment(factory, start, end)?;
        Ok(Self::new_unchecked(LinearKind::Line, factory, coords))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::factory::{xy_factory, xyz_factory};
    use crate::test::linestring::{square, square_open};

    #[test]
    fn open_keeps_length() {
        let coords = build_from_points(&xy_factory(), &square_open(), false).unwrap();
        assert_eq!(coords.len(), 4);
        assert_eq!(coords.dims(), CoordDimensions::ThreeD);
        assert_eq!(coords.is_closed(), Some(false));
    }

    #[test]
    fn close_appends_first_point() {
        let coords = build_from_points(&xy_factory(), &square_open(), true).unwrap();
        assert_eq!(coords.len(), 5);
        assert_eq!(coords.get(4).unwrap(), (0., 0., 0.));
        assert_eq!(coords.is_closed(), Some(true));
    }

    #[test]
    fn close_is_idempotent() {
        let coords = build_from_points(&xy_factory(), &square(), true).unwrap();
        assert_eq!(coords.len(), 4);
    }

    #[test]
    fn close_compares_xy_only() {
        let points = [(0., 0., 1.), (1., 0., 0.), (0., 0., 2.)];
        let coords = build_from_points(&xyz_factory(), &points, true).unwrap();
        assert_eq!(coords.len(), 3);
    }

    #[test]
    fn closing_point_takes_first_z() {
        let points = [(0., 0., 7.), (1., 0., 0.), (1., 1., 0.)];
        let coords = build_from_points(&xyz_factory(), &points, true).unwrap();
        assert_eq!(coords.get(3).unwrap(), (0., 0., 7.));
    }

    #[test]
    fn empty_and_single() {
        let empty: [(f64, f64); 0] = [];
        assert_eq!(build_from_points(&xy_factory(), &empty, true).unwrap().len(), 0);
        assert_eq!(
            build_from_points(&xy_factory(), &[(1., 1.)], true)
                .unwrap()
                .len(),
            1
        );
    }

    #[test]
    fn z_written_only_with_support() {
        let points = [(0., 0., 5.), (1., 1., 6.)];
        let flat = build_from_points(&xy_factory(), &points, false).unwrap();
        assert_eq!(flat.get(1).unwrap(), (1., 1., 0.));

        let deep = build_from_points(&xyz_factory(), &points, false).unwrap();
        assert_eq!(deep.get(1).unwrap(), (1., 1., 6.));
    }

    #[test]
    fn conversion_failure_reports_index() {
        let mixed = [xyz_factory().point(0., 0., 0.), xy_factory().point(1., 1., 1.)];
        let err = build_from_points(&xyz_factory(), &mixed, false).unwrap_err();
        assert!(matches!(
            err,
            GeoLinearError::Conversion { index: Some(1), .. }
        ));
    }

    #[test]
    fn segment() {
        let coords = build_segment(&xyz_factory(), &(0., 0., 1.), &(3., 4., 2.)).unwrap();
        assert_eq!(coords.len(), 2);
        assert_eq!(coords.get(0).unwrap(), (0., 0., 1.));
        assert_eq!(coords.get(1).unwrap(), (3., 4., 2.));

        let coords = build_segment(&xy_factory(), &(0., 0., 1.), &(3., 4., 2.)).unwrap();
        assert_eq!(coords.get(1).unwrap(), (3., 4., 0.));
    }

    #[test]
    fn segment_reads_missing_z_as_zero() {
        let coords = build_segment(&xyz_factory(), &(0., 0.), &(3., 4.)).unwrap();
        assert_eq!(coords.get(0).unwrap(), (0., 0., 0.));
        assert_eq!(coords.get(1).unwrap(), (3., 4., 0.));

        let start = xy_factory().point(1., 1., 0.);
        let end = xyz_factory().point(2., 2., 5.);
        let coords = build_segment(&xyz_factory(), &start, &end).unwrap();
        assert_eq!(coords.get(0).unwrap(), (1., 1., 0.));
        assert_eq!(coords.get(1).unwrap(), (2., 2., 5.));

        let line = xyz_factory().line(&(0., 0.), &(3., 4.)).unwrap();
        assert_eq!(line.end_point().unwrap().z(), Some(0.));
    }
}
