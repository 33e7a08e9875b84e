//! Shape validation utilities for sparse matrix operations
//!
//! This module contains pure validation functions with no I/O dependencies.
//! All functions are mathematical checks on coordinates and operand shapes.

pub mod shape;

pub use shape::{
    validate_exponent, validate_index, validate_inner_dims, validate_same_shape, validate_square,
};
