// In: src/config.rs

//! The single source of truth for all transform configuration.
//!
//! The original platform baked the grid size, the level and the √2 constant
//! into the binary. Here they are runtime values: the grid size comes from the
//! `SampleGrid`, the level is a call argument, and everything that changes the
//! numeric behaviour of a lifting step lives in `HaarConfig`.
//!
//! A config is created once at the application boundary (from code, a JSON
//! string or a JSON file) and then passed down by shared reference.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::HaarError;

//==================================================================================
// I. Core Configuration Enums
//==================================================================================

/// The fixed single-precision √2 used by the reference DSP port.
pub const DEFAULT_SQRT_2: f32 = 1.414214;

/// How a real-valued lifting result is brought back to an integer.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// **Default:** `trunc(x + 0.5)`. Round-half-up for non-negative values but
    /// rounds towards +∞ for negative fluctuations. Bit-compatible with the
    /// reference platform.
    #[default]
    TruncateHalfUp,

    /// Symmetric round-half-away-from-zero (`f64::round`).
    HalfAwayFromZero,
}

/// Which pairwise Haar kernel the axis transformer applies.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LiftingScheme {
    /// **Default:** the orthonormal rotation `(a ± b) / √2`, rounded and stored
    /// modulo 256. Forward and inverse use the identical formula. Lossy once
    /// the 8-bit store wraps or rounds.
    #[default]
    Orthonormal,

    /// Integer Haar (S-transform) with wrapping 8-bit arithmetic:
    /// `d = a - b`, `s = b + (d >> 1)`. Exactly invertible for every input.
    Reversible,
}

//==================================================================================
// II. The Unified HaarConfig
//==================================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct HaarConfig {
    /// The normalization constant used by the orthonormal scheme.
    #[serde(default = "default_sqrt2")]
    pub sqrt2: f32,

    #[serde(default)]
    pub rounding: RoundingMode,

    #[serde(default)]
    pub scheme: LiftingScheme,

    /// If true, the rows of a row pass are transformed on the rayon pool.
    /// Only honoured when the crate is built with the `parallel` feature.
    #[serde(default)]
    pub parallel_rows: bool,
}

impl Default for HaarConfig {
    fn default() -> Self {
        Self {
            sqrt2: DEFAULT_SQRT_2,
            rounding: RoundingMode::default(),
            scheme: LiftingScheme::default(),
            parallel_rows: false,
        }
    }
}

impl HaarConfig {
    /// The exactly invertible configuration.
    pub fn reversible() -> Self {
        Self {
            scheme: LiftingScheme::Reversible,
            ..Self::default()
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self, HaarError> {
        let config: HaarConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, HaarError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Rejects constants that would turn every lifting result into NaN or ∞.
    pub fn validate(&self) -> Result<(), HaarError> {
        if !self.sqrt2.is_finite() || self.sqrt2 <= 0.0 {
            return Err(HaarError::InvalidConfig(format!(
                "normalization constant must be finite and positive, got {}",
                self.sqrt2
            )));
        }
        Ok(())
    }
}

/// Helper for `serde` to default the normalization constant.
fn default_sqrt2() -> f32 {
    DEFAULT_SQRT_2
}
