use thiserror::Error;

/// Errors raised by direct grid construction and cell access
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("Invalid grid dimensions {width}x{height} (allowed range {min}..={max})")]
    InvalidDimension {
        width: usize,
        height: usize,
        min: usize,
        max: usize,
    },
    #[error("Cell ({row}, {col}) is outside the {width}x{height} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },
}

/// Errors raised while producing an exported image
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Cannot allocate a {width}x{height} drawing surface")]
    InvalidResolution { width: usize, height: usize },
    #[error("Pixel buffer of {len} bytes does not match {width}x{height}")]
    BufferSize { width: usize, height: usize, len: usize },
    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

pub type GridResult<T> = Result<T, GridError>;
pub type ExportResult<T> = Result<T, ExportError>;
