//! This file is the root of the `haar_pyramid` Rust crate.
//!
//! The crate computes a multi-level 2D Haar wavelet pyramid, and its inverse,
//! over a grid of 8-bit samples entirely in place: no second buffer is ever
//! allocated. It is aimed at memory-constrained targets where a scratch copy
//! of the image is not affordable.
//!
//! Layers, leaves first:
//! 1.  `kernels::length`  : dyadic dimension check and maximum level.
//! 2.  `kernels::lifting` : the two-sample Haar step.
//! 3.  `kernels::permute` : in-place subband packing and unpacking.
//! 4.  `kernels::axis`    : lifting plus packing across rows or columns.
//! 5.  `pipeline`         : level-by-level forward and inverse orchestration.
//!
//! Decoding images into the sample buffer, displaying results and choosing a
//! level interactively are left to the caller.
//!
//! ```
//! use haar_pyramid::{HaarConfig, HaarPyramid};
//!
//! let mut samples: Vec<u8> = (0..64u8).collect();
//! let pyramid = HaarPyramid::new(HaarConfig::reversible()).unwrap();
//! pyramid.forward_square(&mut samples, 8, 3).unwrap();
//! pyramid.inverse_square(&mut samples, 8, 3).unwrap();
//! assert_eq!(samples, (0..64u8).collect::<Vec<_>>());
//! ```

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod config;
pub mod kernels;
pub mod pipeline;
pub mod traits;
pub mod types;

mod error;

//==================================================================================
// 2. Public Re-exports
//==================================================================================
pub use config::{HaarConfig, LiftingScheme, RoundingMode};
pub use error::{HaarError, LengthError};
pub use kernels::length::validate_length;
pub use observability::enable_verbose_logging;
pub use pipeline::{forward_transform, inverse_transform, HaarPyramid};
pub use types::{subband_layout, Direction, SampleGrid, Subband, SubbandKind};
