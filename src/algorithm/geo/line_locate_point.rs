use crate::coord::CoordSequence;
use geo::LineLocatePoint as _LineLocatePoint;

/// Returns a (option of the) fraction of the line's total length
/// representing the location of the closest point on the line to
/// the given point.
///
/// If the line has zero length the fraction returned is zero.
///
/// If either the point's coordinates or any coordinates of the line
/// are not finite, returns `None`.
///
/// # Examples
///
/// ```
/// use geo::point;
/// use geolinear::algorithm::geo::LineLocatePoint;
/// use geolinear::coord::CoordSequence;
///
/// let coords = CoordSequence::from_xy([(-1.0, 0.0), (0.0, 0.0), (0.0, 1.0)]);
///
/// assert_eq!(coords.line_locate_point(&point!(x: -1.0, y: 0.0)), Some(0.0));
/// assert_eq!(coords.line_locate_point(&point!(x: -0.5, y: 0.0)), Some(0.25));
/// assert_eq!(coords.line_locate_point(&point!(x: 0.0, y: 0.5)), Some(0.75));
/// ```
pub trait LineLocatePoint<Rhs> {
    type Output;

    fn line_locate_point(&self, p: &Rhs) -> Self::Output;
}

impl LineLocatePoint<geo::Point> for CoordSequence {
    type Output = Option<f64>;

    fn line_locate_point(&self, p: &geo::Point) -> Self::Output {
        if self.is_empty() {
            return None;
        }

        let line_string: geo::LineString = self.into();
        line_string.line_locate_point(p)
    }
}
