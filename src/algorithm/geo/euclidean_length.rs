use crate::coord::CoordSequence;
use geo::EuclideanLength as _EuclideanLength;

pub trait EuclideanLength {
    type Output;

    /// Calculation of the length of a Line
    ///
    /// # Examples
    ///
    /// ```
    /// use geolinear::algorithm::geo::EuclideanLength;
    /// use geolinear::coord::CoordSequence;
    ///
    /// let coords = CoordSequence::from_xy([(0., 0.), (3., 4.)]);
    ///
    /// assert_eq!(5., coords.euclidean_length());
    /// ```
    fn euclidean_length(&self) -> Self::Output;
}

impl EuclideanLength for CoordSequence {
    type Output = f64;

    fn euclidean_length(&self) -> Self::Output {
        let line_string: geo::LineString = self.into();
        line_string.euclidean_length()
    }
}
