//! Paint error types

use thiserror::Error;

/// Errors raised by paint backends
#[derive(Error, Debug)]
pub enum PaintError {
    /// Surface dimensions tiny-skia cannot allocate
    #[error("Invalid surface size: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    /// PNG encoding or writing failed
    #[error("PNG encoding error: {0}")]
    Encode(String),
}

/// Result type for paint operations
pub type Result<T> = std::result::Result<T, PaintError>;
