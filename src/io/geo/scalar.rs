use crate::coord::CoordSequence;
use crate::geo_traits::{CoordTrait, LineStringTrait};
use geo::CoordNum;

/// Convert any coordinate to a [`geo::Coord`].
///
/// Only the first two dimensions will be kept.
pub fn coord_to_geo<T: CoordNum>(coord: &impl CoordTrait<T = T>) -> geo::Coord<T> {
    geo::Coord {
        x: coord.x(),
        y: coord.y(),
    }
}

/// Convert any LineString to a [`geo::LineString`].
///
/// Only the first two dimensions will be kept.
pub fn line_string_to_geo<T: CoordNum>(
    line_string: &impl LineStringTrait<T = T>,
) -> geo::LineString<T> {
    geo::LineString::new(
        line_string
            .coords()
            .map(|coord| coord_to_geo(&coord))
            .collect(),
    )
}

impl From<&CoordSequence> for geo::LineString {
    fn from(value: &CoordSequence) -> Self {
        line_string_to_geo(value)
    }
}

impl From<&geo::LineString> for CoordSequence {
    fn from(value: &geo::LineString) -> Self {
        CoordSequence::from_xy(value.coords().map(|c| (c.x, c.y)))
    }
}

impl From<geo::LineString> for CoordSequence {
    fn from(value: geo::LineString) -> Self {
        (&value).into()
    }
}
