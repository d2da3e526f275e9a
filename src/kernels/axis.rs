//! This module contains the axis transformer: one lifting sweep over a line
//! followed (forward) or preceded (inverse) by the subband permutation.
//!
//! A row pass and a column pass differ only in how the line is addressed: rows
//! are contiguous slices, columns are `StridedLine`s over the same buffer.
//! Only the leading `active` samples of each line take part; the subbands that
//! earlier levels left outside the active region are never read or written.

use crate::kernels::lifting::LiftingKernel;
use crate::kernels::permute::{pack, unpack};
use crate::traits::SampleLine;
use crate::types::{Direction, SampleGrid};

//==================================================================================
// 1. Line Kernels
//==================================================================================

/// Applies `step` to every `(2k, 2k + 1)` pair, writing the results back in place.
#[inline]
fn lift_pairs<L, F>(line: &mut L, step: F)
where
    L: SampleLine<Sample = u8> + ?Sized,
    F: Fn(u8, u8) -> (u8, u8),
{
    for even in (0..line.len()).step_by(2) {
        let (first, second) = step(line.get(even), line.get(even + 1));
        line.set(even, first);
        line.set(even + 1, second);
    }
}

/// Transforms one whole line of even length in place.
///
/// Forward: lift each pair into `(trend, fluctuation)`, then pack trends into
/// the first half and fluctuations into the second. Inverse: unpack back to
/// interleaved order, then lift each pair back to samples.
pub fn transform_line<L>(line: &mut L, direction: Direction, kernel: &LiftingKernel)
where
    L: SampleLine<Sample = u8> + ?Sized,
{
    debug_assert!(line.len() % 2 == 0, "axis segments must have even length");
    match direction {
        Direction::Forward => {
            lift_pairs(line, |a, b| kernel.forward(a, b));
            pack(line);
        }
        Direction::Inverse => {
            unpack(line);
            lift_pairs(line, |t, f| kernel.inverse(t, f));
        }
    }
}

//==================================================================================
// 2. Grid Passes
//==================================================================================

/// Transforms each of the first `active_h` rows over their first `active_w` samples.
///
/// Rows are independent; with the `parallel` feature and `parallel` set they
/// are handed to the rayon pool, and the call returns only once all are done.
pub fn transform_rows(
    grid: &mut SampleGrid<'_>,
    active_w: usize,
    active_h: usize,
    direction: Direction,
    kernel: &LiftingKernel,
    parallel: bool,
) {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            use rayon::prelude::*;
            grid.par_row_segments_mut(active_h, active_w)
                .for_each(|row| transform_line(row, direction, kernel));
            return;
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    for row in grid.row_segments_mut(active_h, active_w) {
        transform_line(row, direction, kernel);
    }
}

/// Transforms each of the first `active_w` columns over their first `active_h` samples.
pub fn transform_columns(
    grid: &mut SampleGrid<'_>,
    active_w: usize,
    active_h: usize,
    direction: Direction,
    kernel: &LiftingKernel,
) {
    for x in 0..active_w {
        let mut column = grid.column_segment_mut(x, active_h);
        transform_line(&mut column, direction, kernel);
    }
}

//==================================================================================
// 3. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HaarConfig;

    #[test]
    fn test_forward_line_packs_trends_then_fluctuations() {
        let kernel = LiftingKernel::default();
        let mut line = [10u8, 4, 10, 4, 2, 2, 0, 0];
        transform_line(&mut line[..], Direction::Forward, &kernel);
        // (10,4)->(10,4), (2,2)->(3,0): 4/1.414214 = 2.83 -> 3
        assert_eq!(line, [10, 10, 3, 0, 4, 4, 0, 0]);
    }

    #[test]
    fn test_inverse_line_unpacks_before_lifting() {
        let kernel = LiftingKernel::default();
        let mut line = [10u8, 10, 4, 4];
        transform_line(&mut line[..], Direction::Inverse, &kernel);
        assert_eq!(line, [10, 4, 10, 4]);
    }

    #[test]
    fn test_reversible_line_round_trip() {
        let kernel = LiftingKernel::from_config(&HaarConfig::reversible());
        let original: Vec<u8> = (0..32u8).map(|v| v.wrapping_mul(73).wrapping_add(11)).collect();
        let mut line = original.clone();
        transform_line(&mut line[..], Direction::Forward, &kernel);
        assert_ne!(line, original);
        transform_line(&mut line[..], Direction::Inverse, &kernel);
        assert_eq!(line, original);
    }

    #[test]
    fn test_row_pass_leaves_outside_region_alone() {
        let kernel = LiftingKernel::default();
        let mut data = vec![1u8; 16];
        data[3] = 200;
        data[15] = 99;
        let mut grid = SampleGrid::square(&mut data, 4).unwrap();
        transform_rows(&mut grid, 2, 2, Direction::Forward, &kernel, false);
        // (1,1) -> (1,0) in the 2x2 corner only.
        assert_eq!(&data[0..4], &[1, 0, 1, 200]);
        assert_eq!(&data[4..8], &[1, 0, 1, 1]);
        assert_eq!(data[15], 99);
    }

    #[test]
    fn test_column_pass_works_down_columns() {
        let kernel = LiftingKernel::from_config(&HaarConfig::reversible());
        // Column 0 = [10, 4, 8, 8]; column 1 = [0, 0, 0, 0].
        let mut data = vec![10u8, 0, 4, 0, 8, 0, 8, 0];
        let mut grid = SampleGrid::new(&mut data, 2, 4).unwrap();
        transform_columns(&mut grid, 2, 4, Direction::Forward, &kernel);
        // Trends (7, 8) on top, fluctuations (6, 0) below.
        assert_eq!(data, vec![7, 0, 8, 0, 6, 0, 0, 0]);
    }
}
