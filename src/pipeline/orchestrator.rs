// In: src/pipeline/orchestrator.rs

//! The pyramid orchestrator: drives the axis passes level by level.
//!
//! Forward works outside-in. Level `k` runs a row pass then a column pass over
//! the `(W >> k) × (H >> k)` top-left region, leaving that region's three detail
//! quadrants in place and a half-size approximation for the next level.
//!
//! Inverse works inside-out over the same regions in reverse: it starts at the
//! innermost `(W >> (level - 1)) × (H >> (level - 1))` region, undoes the column
//! pass then the row pass, and doubles the region.
//!
//! All validation happens here, once, before the first sample is touched. The
//! kernels below are infallible.

use std::time::Instant;

use crate::config::HaarConfig;
use crate::error::HaarError;
use crate::kernels::axis::{transform_columns, transform_rows};
use crate::kernels::length::{max_grid_level, validate_length};
use crate::kernels::lifting::LiftingKernel;
use crate::types::{Direction, SampleGrid};

//==================================================================================
// 1. Configured Orchestrator
//==================================================================================

/// A validated configuration ready to run forward and inverse transforms.
#[derive(Debug, Clone)]
pub struct HaarPyramid {
    config: HaarConfig,
    kernel: LiftingKernel,
}

impl Default for HaarPyramid {
    fn default() -> Self {
        let config = HaarConfig::default();
        let kernel = LiftingKernel::from_config(&config);
        Self { config, kernel }
    }
}

impl HaarPyramid {
    pub fn new(config: HaarConfig) -> Result<Self, HaarError> {
        config.validate()?;
        let kernel = LiftingKernel::from_config(&config);
        Ok(Self { config, kernel })
    }

    pub fn config(&self) -> &HaarConfig {
        &self.config
    }

    /// Decomposes `grid` in place into a `level`-deep pyramid.
    pub fn forward(&self, grid: &mut SampleGrid<'_>, level: u32) -> Result<(), HaarError> {
        let max = check_level(grid, level)?;
        log::info!(
            "forward transform: {}x{} grid, level {} of {}, {:?}",
            grid.width(),
            grid.height(),
            level,
            max,
            self.config.scheme
        );
        let start = Instant::now();

        let mut active_w = grid.width();
        let mut active_h = grid.height();
        for k in 0..level {
            log::debug!("level {}: row pass over {}x{}", k + 1, active_w, active_h);
            transform_rows(
                grid,
                active_w,
                active_h,
                Direction::Forward,
                &self.kernel,
                self.config.parallel_rows,
            );

            log::debug!("level {}: column pass over {}x{}", k + 1, active_w, active_h);
            transform_columns(grid, active_w, active_h, Direction::Forward, &self.kernel);

            active_w /= 2;
            active_h /= 2;
        }

        log_metric!(
            "event" = "forward",
            "level" = level,
            "width" = grid.width(),
            "height" = grid.height(),
            "elapsed" = format!("{:.2?}", start.elapsed()),
        );
        Ok(())
    }

    /// Reconstructs samples in place from a `level`-deep pyramid.
    pub fn inverse(&self, grid: &mut SampleGrid<'_>, level: u32) -> Result<(), HaarError> {
        let max = check_level(grid, level)?;
        log::info!(
            "inverse transform: {}x{} grid, level {} of {}, {:?}",
            grid.width(),
            grid.height(),
            level,
            max,
            self.config.scheme
        );
        if level == 0 {
            return Ok(());
        }
        let start = Instant::now();

        let mut active_w = grid.width() >> (level - 1);
        let mut active_h = grid.height() >> (level - 1);
        for k in (0..level).rev() {
            log::debug!("level {}: column pass over {}x{}", k + 1, active_w, active_h);
            transform_columns(grid, active_w, active_h, Direction::Inverse, &self.kernel);

            log::debug!("level {}: row pass over {}x{}", k + 1, active_w, active_h);
            transform_rows(
                grid,
                active_w,
                active_h,
                Direction::Inverse,
                &self.kernel,
                self.config.parallel_rows,
            );

            active_w *= 2;
            active_h *= 2;
        }

        log_metric!(
            "event" = "inverse",
            "level" = level,
            "width" = grid.width(),
            "height" = grid.height(),
            "elapsed" = format!("{:.2?}", start.elapsed()),
        );
        Ok(())
    }

    /// Forward transform of a contiguous, row-major `side` × `side` buffer.
    pub fn forward_square(&self, data: &mut [u8], side: usize, level: u32) -> Result<(), HaarError> {
        let mut grid = exact_square(data, side)?;
        self.forward(&mut grid, level)
    }

    /// Inverse transform of a contiguous, row-major `side` × `side` buffer.
    pub fn inverse_square(&self, data: &mut [u8], side: usize, level: u32) -> Result<(), HaarError> {
        let mut grid = exact_square(data, side)?;
        self.inverse(&mut grid, level)
    }
}

//==================================================================================
// 2. Stateless API
//==================================================================================

pub fn forward_transform(
    grid: &mut SampleGrid<'_>,
    level: u32,
    config: &HaarConfig,
) -> Result<(), HaarError> {
    HaarPyramid::new(config.clone())?.forward(grid, level)
}

pub fn inverse_transform(
    grid: &mut SampleGrid<'_>,
    level: u32,
    config: &HaarConfig,
) -> Result<(), HaarError> {
    HaarPyramid::new(config.clone())?.inverse(grid, level)
}

//==================================================================================
// 3. Precondition Checks
//==================================================================================

/// Both dimensions must be dyadic and `level` no deeper than the shallower one allows.
fn check_level(grid: &SampleGrid<'_>, level: u32) -> Result<u32, HaarError> {
    let max = max_grid_level(grid.width(), grid.height())?;
    if level > max {
        return Err(HaarError::LevelOutOfRange {
            requested: level,
            max,
        });
    }
    Ok(max)
}

/// The N×N buffer contract: exactly `side * side` samples, no padding.
fn exact_square(data: &mut [u8], side: usize) -> Result<SampleGrid<'_>, HaarError> {
    validate_length(side)?;
    let expected = side.checked_mul(side).ok_or(HaarError::SizeMismatch {
        expected: usize::MAX,
        actual: data.len(),
    })?;
    if data.len() != expected {
        return Err(HaarError::SizeMismatch {
            expected,
            actual: data.len(),
        });
    }
    SampleGrid::square(data, side)
}
