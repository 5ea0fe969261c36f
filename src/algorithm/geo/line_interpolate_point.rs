use crate::coord::CoordSequence;
use geo::LineInterpolatePoint as _LineInterpolatePoint;

/// Returns an option of the point that lies a given fraction along the line.
///
/// If the given fraction is
///  * less than zero (including negative infinity): returns a `Some`
///    of the starting point
///  * greater than one (including infinity): returns a `Some` of the ending point
///
///  If either the fraction is NaN, the line is empty, or any coordinates of the line are not
///  finite, returns `None`.
///
/// # Examples
///
/// ```
/// use geo::point;
/// use geolinear::algorithm::geo::LineInterpolatePoint;
/// use geolinear::coord::CoordSequence;
///
/// let coords = CoordSequence::from_xy([(-1.0, 0.0), (0.0, 0.0), (0.0, 1.0)]);
///
/// assert_eq!(coords.line_interpolate_point(-1.0), Some(point!(x: -1.0, y: 0.0)));
/// assert_eq!(coords.line_interpolate_point(0.25), Some(point!(x: -0.5, y: 0.0)));
/// assert_eq!(coords.line_interpolate_point(2.0), Some(point!(x: 0.0, y: 1.0)));
/// ```
pub trait LineInterpolatePoint<Rhs> {
    type Output;

    fn line_interpolate_point(&self, fraction: Rhs) -> Self::Output;
}

impl LineInterpolatePoint<f64> for CoordSequence {
    type Output = Option<geo::Point>;

    fn line_interpolate_point(&self, fraction: f64) -> Self::Output {
        if self.is_empty() || fraction.is_nan() {
            return None;
        }

        let line_string: geo::LineString = self.into();
        if fraction <= 0.0 || line_string.0.len() == 1 {
            return line_string.points().next();
        }
        if fraction >= 1.0 {
            return line_string.points().last();
        }

        line_string.line_interpolate_point(fraction)
    }
}
