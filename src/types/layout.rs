//! Describes where each subband sits after a forward transform.
//!
//! Level `k` (1-based) works on the top-left `(W >> (k-1)) × (H >> (k-1))`
//! region and leaves three detail quadrants around a new, half-size
//! approximation. Display and extraction code reads the pyramid through
//! these rectangles instead of recomputing the nesting itself.

use serde::{Deserialize, Serialize};

use crate::error::HaarError;
use crate::kernels::length::max_grid_level;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SubbandKind {
    /// Low-pass along both axes (top-left).
    Approximation,
    /// Low-pass along rows, high-pass along columns (bottom-left).
    Horizontal,
    /// High-pass along rows, low-pass along columns (top-right).
    Vertical,
    /// High-pass along both axes (bottom-right).
    Diagonal,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subband {
    pub level: u32,
    pub kind: SubbandKind,
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Subband {
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Subbands of a `width` × `height` grid after `level` forward levels.
///
/// Detail bands come first, finest level outward-in, and the single remaining
/// approximation band comes last. Together they tile the grid exactly.
pub fn subband_layout(width: usize, height: usize, level: u32) -> Result<Vec<Subband>, HaarError> {
    let max = max_grid_level(width, height)?;
    if level > max {
        return Err(HaarError::LevelOutOfRange {
            requested: level,
            max,
        });
    }

    let mut bands = Vec::with_capacity(3 * level as usize + 1);
    let mut active_w = width;
    let mut active_h = height;

    for k in 1..=level {
        let half_w = active_w / 2;
        let half_h = active_h / 2;
        bands.push(Subband {
            level: k,
            kind: SubbandKind::Vertical,
            x: half_w,
            y: 0,
            width: half_w,
            height: half_h,
        });
        bands.push(Subband {
            level: k,
            kind: SubbandKind::Horizontal,
            x: 0,
            y: half_h,
            width: half_w,
            height: half_h,
        });
        bands.push(Subband {
            level: k,
            kind: SubbandKind::Diagonal,
            x: half_w,
            y: half_h,
            width: half_w,
            height: half_h,
        });
        active_w = half_w;
        active_h = half_h;
    }

    bands.push(Subband {
        level,
        kind: SubbandKind::Approximation,
        x: 0,
        y: 0,
        width: active_w,
        height: active_h,
    });
    Ok(bands)
}
