//! Error types for wordrec-core
//!
//! Provides a unified error type for the primitive data structures.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Wordrec core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid blob dimensions
    #[error("invalid blob dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel coordinate out of bounds
    #[error("pixel out of bounds: ({x}, {y}) in {width}x{height}")]
    PixelOutOfBounds { x: u32, y: u32, width: u32, height: u32 },

    /// Invalid parameter provided
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// No foreground pixels where some are required
    #[error("no foreground: {0}")]
    NoForeground(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;
