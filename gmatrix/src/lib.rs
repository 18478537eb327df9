//! gmatrix - generic dense matrices with row-parallel arithmetic
//!
//! This library provides a value-semantic two-dimensional matrix over any
//! element type that supplies the usual arithmetic, with addition and
//! multiplication optionally split across threads by result row.
//!
//! ## Architecture
//!
//! gmatrix follows a definitions/implementation separation:
//!
//! - **gmatrix-core**: error kinds, the element contract, complex element
//!   types and pure shape validation (no allocation)
//! - **gmatrix**: the `Matrix<T>` storage engine, its operators and the
//!   parallel dispatch
//!
//! ## Quick Start
//!
//! ```rust
//! use gmatrix::{ExecutionConfig, Matrix, Result};
//!
//! fn example() -> Result<()> {
//!     let m = Matrix::from_vec(3, 3, (1..=9).collect::<Vec<i32>>())?;
//!
//!     let doubled = (&m + &m)?;
//!     assert_eq!(doubled[(2, 2)], 18);
//!
//!     // Same result, computed row by row on the rayon pool
//!     let parallel = m.add_with(&m, &ExecutionConfig::parallel())?;
//!     assert_eq!(parallel, doubled);
//!
//!     let t = m.transpose();
//!     assert_eq!(t.row(0)?, &[1, 4, 7]);
//!     print!("{t}");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **Checked construction**: both dimensions zero or neither; cell counts
//!   must match the shape
//! - **Typed errors**: every fallible operation returns [`MatrixError`]
//!   classified as a dimensions or an index error
//! - **Conjugate transpose**: complex element types are conjugated on
//!   transpose, real types are not
//! - **Row-parallel arithmetic**: addition and multiplication run on a
//!   bounded rayon pool, per call or per element type
//! - **serde** (feature `serde`): serialization with invariant checks on
//!   deserialization

// Re-export core abstractions
pub use gmatrix_core::{
    // Core traits
    Conjugate, MatrixElement, MatrixShape,
    // Element types
    Complex128, Complex64,
    // Error handling
    ErrorCategory, MatrixError, Operation, Result,
};

pub mod execution;
pub mod matrix;
mod ops;
#[cfg(feature = "serde")]
mod serde_support;

pub use execution::{default_mode, set_default_mode, ExecutionConfig, ExecutionMode};
pub use matrix::{Matrix, CELL_SEPARATOR};
