//! This module defines the shared line abstraction used across the kernels.
//!
//! A row of a grid is a contiguous slice; a column is the same buffer walked at
//! the row stride. The permutation and lifting kernels are written once against
//! `SampleLine` and work on both.

/// A fixed-length, mutable sequence of samples addressed by offset.
pub trait SampleLine {
    type Sample: Copy;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Panics if `offset >= self.len()`.
    fn get(&self, offset: usize) -> Self::Sample;

    /// Panics if `offset >= self.len()`.
    fn set(&mut self, offset: usize, value: Self::Sample);
}

impl<T: Copy> SampleLine for [T] {
    type Sample = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, offset: usize) -> T {
        self[offset]
    }

    #[inline]
    fn set(&mut self, offset: usize, value: T) {
        self[offset] = value;
    }
}

/// A line whose consecutive samples sit `stride` elements apart, e.g. a grid column.
#[derive(Debug)]
pub struct StridedLine<'a, T> {
    data: &'a mut [T],
    stride: usize,
    len: usize,
}

impl<'a, T: Copy> StridedLine<'a, T> {
    /// `data` must start at the line's first sample and hold at least
    /// `(len - 1) * stride + 1` elements.
    pub fn new(data: &'a mut [T], stride: usize, len: usize) -> Self {
        debug_assert!(stride > 0);
        debug_assert!(len == 0 || data.len() > (len - 1) * stride);
        Self { data, stride, len }
    }
}

impl<T: Copy> SampleLine for StridedLine<'_, T> {
    type Sample = T;

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn get(&self, offset: usize) -> T {
        assert!(offset < self.len, "line offset out of bounds");
        self.data[offset * self.stride]
    }

    #[inline]
    fn set(&mut self, offset: usize, value: T) {
        assert!(offset < self.len, "line offset out of bounds");
        self.data[offset * self.stride] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strided_line_reads_every_stride() {
        let mut data: Vec<u8> = (0..12).collect();
        let line = StridedLine::new(&mut data[1..], 4, 3);
        assert_eq!(line.len(), 3);
        assert_eq!((line.get(0), line.get(1), line.get(2)), (1, 5, 9));
    }

    #[test]
    fn test_strided_line_writes_in_place() {
        let mut data = vec![0u8; 9];
        {
            let mut line = StridedLine::new(&mut data[2..], 3, 3);
            line.set(0, 7);
            line.set(2, 9);
        }
        assert_eq!(data, vec![0, 0, 7, 0, 0, 0, 0, 0, 9]);
    }

    #[test]
    #[should_panic(expected = "line offset out of bounds")]
    fn test_strided_line_rejects_offset_past_len() {
        let mut data = vec![0u8; 16];
        let line = StridedLine::new(&mut data[..], 4, 2);
        line.get(2);
    }
}
