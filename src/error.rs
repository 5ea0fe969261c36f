//! Defines [`GeoLinearError`], representing all errors returned by this crate.

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoLinearError {
    /// An input value could not be converted into a point.
    #[error("could not convert input at index {index:?} to a point: {message}")]
    Conversion {
        index: Option<usize>,
        message: String,
    },

    /// Coordinate index past the end of a sequence.
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The sequence was created without the requested dimension.
    #[error("coordinate sequence has no z dimension")]
    MissingDimension,

    /// The geometry does not have the shape required by the target variant.
    #[error("expected {expected} coordinates, found {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// The geometry engine reported a failure.
    #[error("geometry engine error: {0}")]
    Engine(String),

    /// General error.
    #[error("General error: {0}")]
    General(String),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    #[cfg(feature = "geos")]
    #[error(transparent)]
    GeosError(#[from] geos::Error),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoLinearError>;

impl GeoLinearError {
    pub(crate) fn conversion(index: Option<usize>, message: impl Into<String>) -> Self {
        Self::Conversion {
            index,
            message: message.into(),
        }
    }

    /// Attach the position of the failing input to a conversion error.
    pub(crate) fn at_index(self, index: usize) -> Self {
        match self {
            Self::Conversion { message, .. } => Self::Conversion {
                index: Some(index),
                message,
            },
            other => other,
        }
    }
}
