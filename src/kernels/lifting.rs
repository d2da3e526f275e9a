//! This module contains the elementary two-sample Haar computation.
//!
//! The orthonormal Haar matrix `(1/√2)·[[1, 1], [1, -1]]` is its own inverse,
//! so the orthonormal scheme runs the very same rotation in both directions.
//! The only imperfection comes from rounding the rotated values back to
//! integers and storing them modulo 256.
//!
//! The reversible scheme is the integer Haar (S-transform): the fluctuation is
//! the wrapped difference and the trend is `b` plus half of it. It has a
//! distinct inverse and loses nothing.

use crate::config::{HaarConfig, LiftingScheme, RoundingMode};

/// The unrounded rotation in the real domain.
///
/// Applying it twice returns `(a, b)` up to floating-point error when `sqrt2`
/// is the true √2.
pub fn lift_exact(a: f64, b: f64, sqrt2: f64) -> (f64, f64) {
    ((a + b) / sqrt2, (a - b) / sqrt2)
}

/// A configured pairwise kernel, copied out of a `HaarConfig` once per transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiftingKernel {
    sqrt2: f32,
    rounding: RoundingMode,
    scheme: LiftingScheme,
}

impl Default for LiftingKernel {
    fn default() -> Self {
        Self::from_config(&HaarConfig::default())
    }
}

impl LiftingKernel {
    pub fn from_config(config: &HaarConfig) -> Self {
        Self {
            sqrt2: config.sqrt2,
            rounding: config.rounding,
            scheme: config.scheme,
        }
    }

    pub fn scheme(&self) -> LiftingScheme {
        self.scheme
    }

    /// Maps a sample pair `(a, b)` to `(trend, fluctuation)`.
    #[inline]
    pub fn forward(&self, a: u8, b: u8) -> (u8, u8) {
        match self.scheme {
            LiftingScheme::Orthonormal => self.rotate(a, b),
            LiftingScheme::Reversible => reversible_forward(a, b),
        }
    }

    /// Maps `(trend, fluctuation)` back to a sample pair.
    #[inline]
    pub fn inverse(&self, trend: u8, fluctuation: u8) -> (u8, u8) {
        match self.scheme {
            LiftingScheme::Orthonormal => self.rotate(trend, fluctuation),
            LiftingScheme::Reversible => reversible_inverse(trend, fluctuation),
        }
    }

    /// The sum is formed in integers and divided in single precision, the way
    /// the reference DSP code evaluates `(int)/float`.
    #[inline]
    fn rotate(&self, a: u8, b: u8) -> (u8, u8) {
        let a = i32::from(a);
        let b = i32::from(b);
        let sum = (a + b) as f32 / self.sqrt2;
        let difference = (a - b) as f32 / self.sqrt2;
        (self.store(sum), self.store(difference))
    }

    /// Rounds and wraps into the 8-bit sample range (modulo 256, never saturating).
    #[inline]
    fn store(&self, value: f32) -> u8 {
        let rounded = match self.rounding {
            // `as i32` truncates toward zero.
            RoundingMode::TruncateHalfUp => (f64::from(value) + 0.5) as i32,
            RoundingMode::HalfAwayFromZero => f64::from(value).round() as i32,
        };
        rounded as u8
    }
}

#[inline]
fn reversible_forward(a: u8, b: u8) -> (u8, u8) {
    let difference = a.wrapping_sub(b) as i8;
    let trend = b.wrapping_add((difference >> 1) as u8);
    (trend, difference as u8)
}

#[inline]
fn reversible_inverse(trend: u8, fluctuation: u8) -> (u8, u8) {
    let difference = fluctuation as i8;
    let b = trend.wrapping_sub((difference >> 1) as u8);
    let a = b.wrapping_add(difference as u8);
    (a, b)
}
