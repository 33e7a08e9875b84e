//! Error types for sparse matrix operations

/// Errors that can occur during sparse matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpmatError {
    /// Coordinate outside the current logical shape
    IndexOutOfBounds,
    /// Operand shapes incompatible with the requested operation
    DimensionMismatch,
    /// Matrix power requested with a zero exponent
    InvalidExponent,
}

impl core::fmt::Display for SpmatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            SpmatError::IndexOutOfBounds => "Index is out of bounds",
            SpmatError::DimensionMismatch => "Operand dimensions do not match",
            SpmatError::InvalidExponent => "Exponent must be greater than 0",
        };
        write!(f, "{msg}")
    }
}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, SpmatError>;
