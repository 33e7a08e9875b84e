#![no_std]

//! SPMAT Core - Sparse Coordinate-Map Matrix Definitions
//!
//! This crate provides the core traits, error types and validation
//! routines shared by sparse coordinate-map matrix implementations

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod traits;
pub mod validation;

pub use error::*;
pub use traits::*;
pub use validation::*;
