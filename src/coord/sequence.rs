use crate::coord::{CoordDimensions, SequenceCoord};
use crate::error::{GeoLinearError, Result};
use crate::geo_traits::{CoordTrait, LineStringTrait};

/// An ordered, fixed-length sequence of coordinates stored interleaved in a single buffer.
///
/// The length is fixed at creation. Sequences are only written while they are being
/// built; once attached to a geometry they are read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordSequence {
    pub(crate) coords: Vec<f64>,
    dims: CoordDimensions,
}

fn check(coords: &[f64], dims: CoordDimensions) -> Result<()> {
    if coords.len() % dims.size() != 0 {
        return Err(GeoLinearError::General(format!(
            "coordinate buffer of length {} is not a multiple of {}",
            coords.len(),
            dims.size()
        )));
    }

    Ok(())
}

impl CoordSequence {
    /// Construct a new CoordSequence
    ///
    /// # Errors
    ///
    /// - if the buffer length is not a multiple of the dimension size
    pub fn try_new(coords: Vec<f64>, dims: CoordDimensions) -> Result<Self> {
        check(&coords, dims)?;
        Ok(Self { coords, dims })
    }

    /// An empty sequence.
    pub fn empty(dims: CoordDimensions) -> Self {
        Self {
            coords: vec![],
            dims,
        }
    }

    /// A sequence of `len` coordinates, all zero.
    pub(crate) fn zeroed(len: usize, dims: CoordDimensions) -> Self {
        Self {
            coords: vec![0.0; len * dims.size()],
            dims,
        }
    }

    pub fn from_xy(coords: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let coords = coords
            .into_iter()
            .flat_map(|(x, y)| [x, y])
            .collect();
        Self {
            coords,
            dims: CoordDimensions::TwoD,
        }
    }

    pub fn from_xyz(coords: impl IntoIterator<Item = (f64, f64, f64)>) -> Self {
        let coords = coords
            .into_iter()
            .flat_map(|(x, y, z)| [x, y, z])
            .collect();
        Self {
            coords,
            dims: CoordDimensions::ThreeD,
        }
    }

    pub fn dims(&self) -> CoordDimensions {
        self.dims
    }

    pub fn len(&self) -> usize {
        self.coords.len() / self.dims.size()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    fn check_index(&self, i: usize) -> Result<()> {
        if i >= self.len() {
            return Err(GeoLinearError::IndexOutOfRange {
                index: i,
                len: self.len(),
            });
        }
        Ok(())
    }

    pub fn x(&self, i: usize) -> Result<f64> {
        self.check_index(i)?;
        Ok(self.coords[i * self.dims.size()])
    }

    pub fn y(&self, i: usize) -> Result<f64> {
        self.check_index(i)?;
        Ok(self.coords[i * self.dims.size() + 1])
    }

    /// The z value at `i`.
    ///
    /// Errors if the sequence was created without a z dimension.
    pub fn z(&self, i: usize) -> Result<f64> {
        self.check_index(i)?;
        if !self.dims.has_z() {
            return Err(GeoLinearError::MissingDimension);
        }
        Ok(self.coords[i * self.dims.size() + 2])
    }

    /// Best-effort z read: any failure reads as `0.0`.
    pub fn z_or_zero(&self, i: usize) -> f64 {
        self.z(i).unwrap_or(0.0)
    }

    /// The `(x, y, z)` tuple at `i`. z is `0.0` for two-dimensional sequences.
    pub fn get(&self, i: usize) -> Result<(f64, f64, f64)> {
        Ok((self.x(i)?, self.y(i)?, self.z_or_zero(i)))
    }

    pub(crate) fn set(&mut self, i: usize, x: f64, y: f64, z: f64) -> Result<()> {
        self.check_index(i)?;
        let offset = i * self.dims.size();
        self.coords[offset] = x;
        self.coords[offset + 1] = y;
        if self.dims.has_z() {
            self.coords[offset + 2] = z;
        }
        Ok(())
    }

    /// Whether the first and last coordinates are equal in x and y.
    ///
    /// Returns `None` for an empty sequence. Comparison is exact.
    pub fn is_closed(&self) -> Option<bool> {
        let first = self.coord(0)?;
        let last = self.coord(self.len() - 1)?;
        Some(first.x_y() == last.x_y())
    }
}

impl LineStringTrait for CoordSequence {
    type T = f64;
    type ItemType<'a> = SequenceCoord<'a>;

    fn num_coords(&self) -> usize {
        self.len()
    }

    fn coord(&self, i: usize) -> Option<Self::ItemType<'_>> {
        if i >= self.len() {
            return None;
        }

        Some(SequenceCoord::new(self, i))
    }
}
