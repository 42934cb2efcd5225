//! Error types for icon generation

use thiserror::Error;

/// Result type alias for icon operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating icons
#[derive(Error, Debug)]
pub enum Error {
    /// Icons must be at least one pixel wide
    #[error("Invalid icon size: {0}")]
    InvalidSize(u32),

    /// No output path was given
    #[error("Output path is empty")]
    EmptyPath,

    /// A font candidate could not be used
    #[error("Font unavailable: {0}")]
    Font(String),

    /// Glyph rasterization failed
    #[error("Rendering failed: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}
