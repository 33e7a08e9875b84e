//! Coordinate and operand-shape validation
//!
//! This module provides pure mathematical validation functions for
//! coordinate addressing and operator shape compatibility. Shapes are
//! `(rows, cols)` pairs; no function here touches stored entries.

use crate::error::{Result, SpmatError};

/// Validate a coordinate against a logical shape
///
/// Fails when the row or column index falls outside the shape. This is
/// the bounds check behind every coordinate-addressing operation; it is
/// not re-applied to entries already stored when a matrix is reshaped.
pub const fn validate_index(shape: (usize, usize), row: usize, col: usize) -> Result<()> {
    if row >= shape.0 || col >= shape.1 {
        return Err(SpmatError::IndexOutOfBounds);
    }
    Ok(())
}

/// Validate that two operand shapes are identical
///
/// Elementwise addition and subtraction require equal shapes.
pub const fn validate_same_shape(lhs: (usize, usize), rhs: (usize, usize)) -> Result<()> {
    if lhs.0 != rhs.0 || lhs.1 != rhs.1 {
        return Err(SpmatError::DimensionMismatch);
    }
    Ok(())
}

/// Validate that two operand shapes share an inner dimension
///
/// A matrix product needs the left operand's column count to equal the
/// right operand's row count.
pub const fn validate_inner_dims(lhs: (usize, usize), rhs: (usize, usize)) -> Result<()> {
    if lhs.1 != rhs.0 {
        return Err(SpmatError::DimensionMismatch);
    }
    Ok(())
}

/// Validate that a shape is square
///
/// Matrix powers are only defined for square shapes.
pub const fn validate_square(shape: (usize, usize)) -> Result<()> {
    if shape.0 != shape.1 {
        return Err(SpmatError::DimensionMismatch);
    }
    Ok(())
}

/// Validate a matrix power exponent
///
/// Exponents must be positive; an exponent of one is the identity case.
pub const fn validate_exponent(exp: u32) -> Result<()> {
    if exp == 0 {
        return Err(SpmatError::InvalidExponent);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_index() {
        // In-bounds coordinates
        assert_eq!(validate_index((2, 3), 0, 0), Ok(()));
        assert_eq!(validate_index((2, 3), 1, 2), Ok(()));
        assert_eq!(validate_index((1, 1), 0, 0), Ok(()));

        // Either axis out of bounds
        assert_eq!(validate_index((2, 3), 2, 0), Err(SpmatError::IndexOutOfBounds));
        assert_eq!(validate_index((2, 3), 0, 3), Err(SpmatError::IndexOutOfBounds));
        assert_eq!(validate_index((2, 3), 2, 3), Err(SpmatError::IndexOutOfBounds));

        // Empty shapes admit no coordinate at all
        assert_eq!(validate_index((0, 0), 0, 0), Err(SpmatError::IndexOutOfBounds));
        assert_eq!(validate_index((0, 5), 0, 1), Err(SpmatError::IndexOutOfBounds));
    }

    #[test]
    fn test_validate_same_shape() {
        assert_eq!(validate_same_shape((2, 3), (2, 3)), Ok(()));
        assert_eq!(validate_same_shape((0, 0), (0, 0)), Ok(()));

        assert_eq!(
            validate_same_shape((2, 3), (3, 2)),
            Err(SpmatError::DimensionMismatch)
        );
        assert_eq!(
            validate_same_shape((2, 3), (2, 4)),
            Err(SpmatError::DimensionMismatch)
        );
    }

    #[test]
    fn test_validate_inner_dims() {
        assert_eq!(validate_inner_dims((2, 3), (3, 5)), Ok(()));
        assert_eq!(validate_inner_dims((1, 1), (1, 9)), Ok(()));

        assert_eq!(
            validate_inner_dims((2, 3), (2, 3)),
            Err(SpmatError::DimensionMismatch)
        );
        assert_eq!(
            validate_inner_dims((3, 5), (3, 5)),
            Err(SpmatError::DimensionMismatch)
        );
    }

    #[test]
    fn test_validate_square() {
        assert_eq!(validate_square((4, 4)), Ok(()));
        assert_eq!(validate_square((0, 0)), Ok(()));
        assert_eq!(validate_square((4, 5)), Err(SpmatError::DimensionMismatch));
    }

    #[test]
    fn test_validate_exponent() {
        assert_eq!(validate_exponent(1), Ok(()));
        assert_eq!(validate_exponent(17), Ok(()));
        assert_eq!(validate_exponent(0), Err(SpmatError::InvalidExponent));
    }
}
