#![no_std]

//! gmatrix core - definitions for generic dense matrices
//!
//! This crate provides the error kinds, the element-type contract, the
//! complex element types and the pure shape validation used by the `gmatrix`
//! engine. It performs no allocation and no I/O.

pub mod complex;
pub mod error;
pub mod traits;
pub mod validation;

pub use complex::{Complex128, Complex64};
pub use error::*;
pub use traits::*;
pub use validation::*;
