//! Abstract interfaces for sparse coordinate-map matrices
//!
//! This module defines the trait abstractions shared by container
//! implementations. Traits are pure interfaces - no concrete implementations.

pub mod element;
pub mod matrix;

pub use element::MatrixElement;
pub use matrix::SparseMatrix;
#[cfg(feature = "alloc")]
pub use matrix::MatrixOperations;
