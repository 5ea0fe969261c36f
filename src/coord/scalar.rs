use crate::coord::CoordSequence;
use crate::geo_traits::CoordTrait;

/// A borrowed view of a single coordinate in a [`CoordSequence`].
#[derive(Debug, Clone, Copy)]
pub struct SequenceCoord<'a> {
    coords: &'a CoordSequence,
    i: usize,
}

impl<'a> SequenceCoord<'a> {
    pub(crate) fn new(coords: &'a CoordSequence, i: usize) -> Self {
        Self { coords, i }
    }
}

impl CoordTrait for SequenceCoord<'_> {
    type T = f64;

    fn nth_unchecked(&self, n: usize) -> Self::T {
        self.coords.coords[self.i * self.coords.dims().size() + n]
    }

    fn dim(&self) -> usize {
        self.coords.dims().size()
    }

    fn x(&self) -> Self::T {
        self.nth_unchecked(0)
    }

    fn y(&self) -> Self::T {
        self.nth_unchecked(1)
    }
}

impl From<SequenceCoord<'_>> for geo::Coord {
    fn from(value: SequenceCoord) -> Self {
        geo::Coord {
            x: value.x(),
            y: value.y(),
        }
    }
}

impl From<SequenceCoord<'_>> for geo::Point {
    fn from(value: SequenceCoord<'_>) -> Self {
        let coord: geo::Coord = value.into();
        coord.into()
    }
}
