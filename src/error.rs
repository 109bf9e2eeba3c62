//! Error type for the fallible edges of the crate.
//!
//! The flood fill itself never fails. Errors only arise when wrapping
//! caller-supplied bytes or arrays, encoding PNG output, or resolving
//! tool names coming from the UI layer.

/// Errors produced outside the fill routine.
#[derive(Debug, thiserror::Error)]
pub enum PaintError {
    #[error("buffer of {actual} bytes does not match {width}x{height} RGBA (expected {expected})")]
    DimensionMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
    #[error("{width}x{height} RGBA buffer is too large to allocate")]
    TooLarge { width: usize, height: usize },
    #[error("expected RGBA array with 4 channels, got {0}")]
    ChannelCount(usize),
    #[error("array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
    #[error("png encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error("unknown tool: {0}")]
    UnknownTool(String),
}

pub type Result<T> = std::result::Result<T, PaintError>;
