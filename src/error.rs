// In: src/error.rs

//! This module defines the error types for the haar_pyramid library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.
//!
//! Every error here is raised before the transform touches the buffer. Once the
//! orchestrator has accepted its inputs the kernels below it cannot fail.

use thiserror::Error;

/// Classified failure of the dyadic length check.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthError {
    /// The dimension is 0 or 1, so there is nothing to pair up.
    #[error("length {0} is too short: a dyadic dimension must be at least 2")]
    TooShort(usize),

    #[error("length {0} is odd")]
    Odd(usize),

    /// Even, but halving hits an odd remainder before reaching 1.
    #[error("length {0} is not a power of two")]
    NotPowerOfTwo(usize),
}

#[derive(Error, Debug)]
pub enum HaarError {
    // =========================================================================
    // === Input Validation Errors
    // =========================================================================
    #[error("Invalid grid dimension: {0}")]
    Length(#[from] LengthError),

    #[error("Requested level {requested} exceeds the maximum level {max} for this grid")]
    LevelOutOfRange { requested: u32, max: u32 },

    #[error("Buffer length mismatch: expected at least {expected} samples, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("Invalid stride {stride} for a grid of width {width}")]
    InvalidStride { width: usize, stride: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error from the Serde JSON library while reading a configuration.
    #[error("Serde JSON error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// An error originating from the underlying I/O subsystem, e.g. a missing config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
