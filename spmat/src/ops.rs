//! Arithmetic operators over map-backed sparse matrices
//!
//! Every operation allocates a fresh result and leaves its operands
//! untouched. The `checked_*` methods surface shape errors as `Result`;
//! the `std::ops` impls delegate to them and panic on a shape mismatch,
//! the usual operator convention for linear algebra types. Unary negate
//! and scalar divide cannot fail and exist only as operators.

use std::ops::{Add, Div, Mul, Neg, Sub};

use spmat_core::{
    validate_exponent, validate_inner_dims, validate_same_shape, validate_square, MatrixElement,
    Result,
};

use crate::map_matrix::MapMatrix;

impl<T: MatrixElement> MapMatrix<T> {
    /// Elementwise sum over the union of stored coordinates
    ///
    /// Fails with `DimensionMismatch` unless both shapes are equal.
    /// Overlapping coordinates are summed; a sum that lands on zero is
    /// stored, not pruned.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self> {
        validate_same_shape(self.shape(), rhs.shape())?;
        let mut out = self.clone();
        for (&key, &value) in rhs.iter() {
            let slot = out.slot(key);
            *slot = *slot + value;
        }
        Ok(out)
    }

    /// Elementwise difference over the union of stored coordinates
    ///
    /// Fails with `DimensionMismatch` unless both shapes are equal.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self> {
        validate_same_shape(self.shape(), rhs.shape())?;
        let mut out = self.clone();
        for (&key, &value) in rhs.iter() {
            let slot = out.slot(key);
            *slot = *slot - value;
        }
        Ok(out)
    }

    /// Sparse matrix product
    ///
    /// Fails with `DimensionMismatch` unless the left column count
    /// equals the right row count. Only stored entries of the left
    /// operand drive the accumulation: each `(row, k)` entry is paired
    /// with the stored row `k` of the right operand through an ordered
    /// range scan, accumulating into `(row, right col)` of a result
    /// shaped `(left rows, right cols)`.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self> {
        validate_inner_dims(self.shape(), rhs.shape())?;
        let mut out = MapMatrix::new(self.rows(), rhs.cols());
        for (&(row, inner), &value) in self.iter() {
            for (&(_, col), &rhs_value) in rhs.row_entries(inner) {
                let slot = out.slot((row, col));
                *slot = *slot + value * rhs_value;
            }
        }
        Ok(out)
    }

    /// Matrix power by repeated multiplication
    ///
    /// Fails with `DimensionMismatch` for non-square shapes and
    /// `InvalidExponent` for an exponent of zero. An exponent of one
    /// returns an equal copy; higher exponents fold `checked_mul` into a
    /// fresh accumulator.
    pub fn checked_pow(&self, exp: u32) -> Result<Self> {
        validate_square(self.shape())?;
        validate_exponent(exp)?;
        let mut out = self.clone();
        for _ in 1..exp {
            out = out.checked_mul(self)?;
        }
        Ok(out)
    }
}

impl<T: MatrixElement> Add for &MapMatrix<T> {
    type Output = MapMatrix<T>;

    fn add(self, rhs: Self) -> MapMatrix<T> {
        match self.checked_add(rhs) {
            Ok(out) => out,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: MatrixElement> Sub for &MapMatrix<T> {
    type Output = MapMatrix<T>;

    fn sub(self, rhs: Self) -> MapMatrix<T> {
        match self.checked_sub(rhs) {
            Ok(out) => out,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: MatrixElement> Mul for &MapMatrix<T> {
    type Output = MapMatrix<T>;

    fn mul(self, rhs: Self) -> MapMatrix<T> {
        match self.checked_mul(rhs) {
            Ok(out) => out,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: MatrixElement> Neg for &MapMatrix<T> {
    type Output = MapMatrix<T>;

    fn neg(self) -> MapMatrix<T> {
        let mut out = self.clone();
        out.map(|value| -value);
        out
    }
}

impl<T: MatrixElement> Div<T> for &MapMatrix<T> {
    type Output = MapMatrix<T>;

    /// Divide every stored value by the scalar
    ///
    /// No divide-by-zero guard: the semantics are the scalar type's own
    /// (floats produce infinities or NaN, integer division panics).
    fn div(self, rhs: T) -> MapMatrix<T> {
        let mut out = self.clone();
        out.map(|value| value / rhs);
        out
    }
}
