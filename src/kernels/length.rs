//! This module contains the dyadic length check consulted before any transform.
//!
//! A dimension is usable when it can be halved repeatedly down to exactly 1,
//! which is what makes every level's active segment even. The number of halvings
//! is the deepest level the pyramid can reach along that dimension.

use crate::error::LengthError;

/// Validates `length` and returns its maximum decomposition level, `log2(length)`.
pub fn validate_length(length: usize) -> Result<u32, LengthError> {
    if length < 2 {
        return Err(LengthError::TooShort(length));
    }
    if length % 2 != 0 {
        return Err(LengthError::Odd(length));
    }

    let mut remainder = length;
    let mut max_level = 0u32;
    while remainder > 1 {
        if remainder % 2 != 0 {
            return Err(LengthError::NotPowerOfTwo(length));
        }
        remainder /= 2;
        max_level += 1;
    }
    Ok(max_level)
}

/// The deepest level usable on a `width` × `height` grid.
pub fn max_grid_level(width: usize, height: usize) -> Result<u32, LengthError> {
    let along_rows = validate_length(width)?;
    let along_columns = validate_length(height)?;
    Ok(along_rows.min(along_columns))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_and_one_are_too_short() {
        assert_eq!(validate_length(0), Err(LengthError::TooShort(0)));
        assert_eq!(validate_length(1), Err(LengthError::TooShort(1)));
    }

    #[test]
    fn test_odd_length() {
        assert_eq!(validate_length(3), Err(LengthError::Odd(3)));
        assert_eq!(validate_length(255), Err(LengthError::Odd(255)));
    }

    #[test]
    fn test_even_but_not_dyadic() {
        assert_eq!(validate_length(6), Err(LengthError::NotPowerOfTwo(6)));
        assert_eq!(validate_length(12), Err(LengthError::NotPowerOfTwo(12)));
        assert_eq!(validate_length(1000), Err(LengthError::NotPowerOfTwo(1000)));
    }

    #[test]
    fn test_powers_of_two() {
        assert_eq!(validate_length(2), Ok(1));
        assert_eq!(validate_length(4), Ok(2));
        assert_eq!(validate_length(256), Ok(8));
        assert_eq!(validate_length(1024), Ok(10));
    }

    #[test]
    fn test_rectangular_grid_takes_shallower_dimension() {
        assert_eq!(max_grid_level(64, 8), Ok(3));
        assert_eq!(max_grid_level(2, 512), Ok(1));
        assert_eq!(max_grid_level(16, 6), Err(LengthError::NotPowerOfTwo(6)));
    }
}
