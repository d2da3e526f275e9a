//! This module declares the pure, stateless kernels the pyramid orchestrator is
//! built from, leaves first.
//!
//! None of them allocate a second buffer: the only transient storage is the
//! quarter-length visited table inside a single pack or unpack call.

/// Dyadic dimension check and maximum level.
pub mod length;

/// The two-sample Haar step.
pub mod lifting;

/// In-place deinterleave / interleave of one line.
pub mod permute;

/// Lifting plus permutation over rows and columns of the active region.
pub mod axis;

pub use axis::{transform_columns, transform_line, transform_rows};
pub use length::{max_grid_level, validate_length};
pub use lifting::{lift_exact, LiftingKernel};
pub use permute::{pack, unpack};
