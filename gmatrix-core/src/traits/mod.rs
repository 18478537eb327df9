//! Abstract interfaces for dense matrices
//!
//! Traits are pure interfaces; the matrix engine implements them.

pub mod element;
pub mod matrix;

pub use element::{Conjugate, MatrixElement};
pub use matrix::MatrixShape;
