use super::coord::CoordTrait;
use geo::{Coord, CoordNum, LineString};

pub struct LineStringIterator<
    'a,
    T: CoordNum,
    ItemType: 'a + CoordTrait<T = T>,
    G: LineStringTrait<T = T, ItemType<'a> = ItemType>,
> {
    geom: &'a G,
    index: usize,
    end: usize,
}

impl<
        'a,
        T: CoordNum,
        ItemType: 'a + CoordTrait<T = T>,
        G: LineStringTrait<T = T, ItemType<'a> = ItemType>,
    > Iterator for LineStringIterator<'a, T, ItemType, G>
{
    type Item = ItemType;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.index == self.end {
            return None;
        }
        let old = self.index;
        self.index += 1;
        self.geom.coord(old)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.end - self.index, Some(self.end - self.index))
    }
}

impl<
        'a,
        T: CoordNum,
        ItemType: 'a + CoordTrait<T = T>,
        G: LineStringTrait<T = T, ItemType<'a> = ItemType>,
    > ExactSizeIterator for LineStringIterator<'a, T, ItemType, G>
{
}

/// A trait for accessing data from a generic LineString.
pub trait LineStringTrait: Sized {
    type T: CoordNum;
    type ItemType<'a>: 'a + CoordTrait<T = Self::T>
    where
        Self: 'a;

    /// An iterator over the coords in this LineString
    fn coords(&self) -> LineStringIterator<'_, Self::T, Self::ItemType<'_>, Self> {
        LineStringIterator {
            geom: self,
            index: 0,
            end: self.num_coords(),
        }
    }

    /// The number of coords in this LineString
    fn num_coords(&self) -> usize;

    /// Access to a specified coord in this LineString
    /// Will return None if the provided index is out of bounds
    fn coord(&self, i: usize) -> Option<Self::ItemType<'_>>;
}

impl<T: CoordNum> LineStringTrait for LineString<T> {
    type T = T;
    type ItemType<'a> = &'a Coord<T> where Self: 'a;

    fn num_coords(&self) -> usize {
        self.0.len()
    }

    fn coord(&self, i: usize) -> Option<Self::ItemType<'_>> {
        self.0.get(i)
    }
}
