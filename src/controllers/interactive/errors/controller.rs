use crate::core::data::cell_buffer::CellBufferError;
use crate::core::data::pixel_rect::PixelRectError;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;
use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum ControllerError {
    /// Drawing to or reading from the display surface failed.
    Surface(io::Error),
    /// The surface reported a grid with no columns or no rows.
    InvalidDimensions(PixelRectError),
    Mapping(PixelToComplexCoordsError),
    Frame(CellBufferError),
    /// The user aborted the session instead of quitting normally.
    Interrupted,
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surface(err) => write!(f, "display surface error: {}", err),
            Self::InvalidDimensions(err) => write!(f, "invalid terminal dimensions: {}", err),
            Self::Mapping(err) => write!(f, "coordinate mapping error: {}", err),
            Self::Frame(err) => write!(f, "frame error: {}", err),
            Self::Interrupted => write!(f, "interrupted"),
        }
    }
}

impl Error for ControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Surface(err) => Some(err),
            Self::InvalidDimensions(err) => Some(err),
            Self::Mapping(err) => Some(err),
            Self::Frame(err) => Some(err),
            Self::Interrupted => None,
        }
    }
}

impl From<io::Error> for ControllerError {
    fn from(err: io::Error) -> Self {
        Self::Surface(err)
    }
}

impl From<PixelRectError> for ControllerError {
    fn from(err: PixelRectError) -> Self {
        Self::InvalidDimensions(err)
    }
}

impl From<PixelToComplexCoordsError> for ControllerError {
    fn from(err: PixelToComplexCoordsError) -> Self {
        Self::Mapping(err)
    }
}

impl From<CellBufferError> for ControllerError {
    fn from(err: CellBufferError) -> Self {
        Self::Frame(err)
    }
}
