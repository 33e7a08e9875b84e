//! SPMAT - Sparse Matrix Backed by an Ordered Coordinate Map
//!
//! This library stores a 2-D numeric dataset as an ordered mapping from
//! `(row, col)` coordinates to values. Only non-default entries are kept;
//! every in-bounds coordinate absent from the map reads as zero.
//!
//! ## Architecture
//!
//! SPMAT follows a clean specification/implementation separation:
//!
//! - **spmat-core**: Pure traits, error types, and shape validation (no storage)
//! - **spmat**: The concrete map-backed container and its arithmetic operators
//!
//! ## Quick Start
//!
//! ```rust
//! use spmat::{MapMatrix, SparseMatrix};
//!
//! fn example() -> spmat::Result<()> {
//!     let mut m = MapMatrix::<f64>::new(2, 3);
//!     m.put(1, 0, 1.0)?;
//!     m.put(1, 2, 2.0)?;
//!
//!     // Transpose swaps the shape and relocates off-diagonal entries
//!     m.transpose();
//!     assert_eq!(m.dimensions(), (3, 2));
//!     assert_eq!(m.get(0, 1)?, 1.0);
//!     assert_eq!(m.get(2, 1)?, 2.0);
//!     assert!(!m.contains(1, 0)?);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **Implicit zeros**: Arithmetic and transpose cost scale with stored
//!   entries, never with the logical shape
//! - **Fresh-result operators**: `+`, `-`, `*`, unary `-` and scalar `/`
//!   allocate their result and leave both operands untouched
//! - **Checked variants**: `checked_add` and friends surface shape errors
//!   as `Result` instead of panicking
//! - **Type safety**: Generic over any `MatrixElement` scalar

// Re-export core abstractions
pub use spmat_core::{
    // Core traits
    SparseMatrix, MatrixOperations, MatrixElement,
    // Error handling
    SpmatError, Result,
    // Validation utilities
    validate_exponent, validate_index, validate_inner_dims, validate_same_shape, validate_square,
};

// Implementation modules
pub mod map_matrix;
pub mod ops;

// Public exports
pub use map_matrix::MapMatrix;
