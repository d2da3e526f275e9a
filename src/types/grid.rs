//! The mutable 2D view the transform works through.
//!
//! Samples are row-major. `stride` is the distance, in samples, between the
//! starts of adjacent rows and may exceed `width`, so a grid can be a window
//! onto a larger padded image. The view only borrows the caller's buffer.

use ndarray::Array2;

use crate::error::HaarError;
use crate::traits::StridedLine;

#[derive(Debug)]
pub struct SampleGrid<'a> {
    width: usize,
    height: usize,
    stride: usize,
    data: &'a mut [u8],
}

impl<'a> SampleGrid<'a> {
    /// A contiguous `side` × `side` grid.
    pub fn square(data: &'a mut [u8], side: usize) -> Result<Self, HaarError> {
        Self::with_stride(data, side, side, side)
    }

    /// A contiguous `width` × `height` grid.
    pub fn new(data: &'a mut [u8], width: usize, height: usize) -> Result<Self, HaarError> {
        Self::with_stride(data, width, height, width)
    }

    pub fn with_stride(
        data: &'a mut [u8],
        width: usize,
        height: usize,
        stride: usize,
    ) -> Result<Self, HaarError> {
        if stride < width || stride == 0 {
            return Err(HaarError::InvalidStride { width, stride });
        }

        let min_len = min_required_len(width, height, stride).ok_or(HaarError::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;

        if data.len() < min_len {
            return Err(HaarError::SizeMismatch {
                expected: min_len,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.stride + x).copied()
    }

    pub fn row(&self, y: usize) -> &[u8] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.stride;
        &self.data[start..start + self.width]
    }

    /// The first `len` samples of row `y`.
    pub fn row_segment_mut(&mut self, y: usize, len: usize) -> &mut [u8] {
        assert!(y < self.height, "row index out of bounds");
        assert!(len <= self.width, "row segment longer than grid width");
        let start = y * self.stride;
        &mut self.data[start..start + len]
    }

    /// The first `len` samples of column `x`, walked at the row stride.
    pub fn column_segment_mut(&mut self, x: usize, len: usize) -> StridedLine<'_, u8> {
        assert!(x < self.width, "column index out of bounds");
        assert!(len <= self.height, "column segment longer than grid height");
        StridedLine::new(&mut self.data[x..], self.stride, len)
    }

    /// The leading `rows` rows, each as a `len`-sample slice, for row passes
    /// that hand rows out independently.
    pub fn row_segments_mut(&mut self, rows: usize, len: usize) -> impl Iterator<Item = &mut [u8]> {
        assert!(rows <= self.height, "more rows requested than the grid holds");
        assert!(len <= self.width, "row segment longer than grid width");
        self.data
            .chunks_mut(self.stride)
            .take(rows)
            .map(move |row| &mut row[..len])
    }

    #[cfg(feature = "parallel")]
    pub(crate) fn par_row_segments_mut(
        &mut self,
        rows: usize,
        len: usize,
    ) -> impl rayon::iter::ParallelIterator<Item = &mut [u8]> {
        use rayon::prelude::*;
        assert!(rows <= self.height, "more rows requested than the grid holds");
        assert!(len <= self.width, "row segment longer than grid width");
        self.data
            .par_chunks_mut(self.stride)
            .take(rows)
            .map(move |row| &mut row[..len])
    }

    /// Copies the visible samples into an owned `ndarray` matrix (rows × columns).
    pub fn to_array2(&self) -> Array2<u8> {
        Array2::from_shape_fn((self.height, self.width), |(y, x)| {
            self.data[y * self.stride + x]
        })
    }
}

fn min_required_len(width: usize, height: usize, stride: usize) -> Option<usize> {
    if width == 0 || height == 0 {
        return Some(0);
    }
    (height - 1).checked_mul(stride)?.checked_add(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::SampleLine;

    #[test]
    fn test_square_grid_accessors() {
        let mut data: Vec<u8> = (0..16).collect();
        let grid = SampleGrid::square(&mut data, 4).unwrap();
        assert_eq!((grid.width(), grid.height(), grid.stride()), (4, 4, 4));
        assert_eq!(grid.get(1, 2), Some(9));
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.row(3), &[12, 13, 14, 15]);
    }

    #[test]
    fn test_short_buffer_is_rejected() {
        let mut data = vec![0u8; 15];
        let result = SampleGrid::square(&mut data, 4);
        assert!(matches!(
            result,
            Err(HaarError::SizeMismatch {
                expected: 16,
                actual: 15
            })
        ));
    }

    #[test]
    fn test_stride_narrower_than_width_is_rejected() {
        let mut data = vec![0u8; 64];
        let result = SampleGrid::with_stride(&mut data, 8, 4, 6);
        assert!(matches!(
            result,
            Err(HaarError::InvalidStride { width: 8, stride: 6 })
        ));
    }

    #[test]
    fn test_padded_window_does_not_need_trailing_padding() {
        // 2 rows of width 4 inside a stride of 6: the last row needs no padding.
        let mut data = vec![0u8; 10];
        assert!(SampleGrid::with_stride(&mut data, 4, 2, 6).is_ok());
    }

    #[test]
    fn test_column_segment_walks_the_stride() {
        let mut data: Vec<u8> = (0..24).collect();
        let mut grid = SampleGrid::with_stride(&mut data, 4, 4, 6).unwrap();
        let column = grid.column_segment_mut(2, 3);
        assert_eq!((column.get(0), column.get(1), column.get(2)), (2, 8, 14));
    }

    #[test]
    fn test_row_segments_respect_active_width() {
        let mut data: Vec<u8> = (0..16).collect();
        let mut grid = SampleGrid::square(&mut data, 4).unwrap();
        let rows: Vec<Vec<u8>> = grid.row_segments_mut(2, 2).map(|r| r.to_vec()).collect();
        assert_eq!(rows, vec![vec![0, 1], vec![4, 5]]);
    }

    #[test]
    fn test_to_array2_skips_padding() {
        let mut data: Vec<u8> = (0..12).collect();
        let grid = SampleGrid::with_stride(&mut data, 2, 3, 4).unwrap();
        let array = grid.to_array2();
        assert_eq!(array.shape(), &[3, 2]);
        assert_eq!(array[[2, 1]], 9);
    }
}
