//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, image codec, and resizer errors, and provides semantic
//! variants for plan validation failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Image(#[from] image::ImageError),

    #[error("Pixel buffer error: {0}")]
    ImageBuffer(#[from] fast_image_resize::ImageBufferError),

    #[error("Resize error: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),

    #[error("Unsupported color type for resizing: {color}")]
    UnsupportedColor { color: String },

    #[error("Size must be greater than 0, got: {width}x{height}")]
    ZeroSize { width: u32, height: u32 },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Resize plan has no outputs")]
    EmptyPlan,

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}
