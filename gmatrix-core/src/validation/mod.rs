//! Shape validation utilities for dense matrices
//!
//! This module contains pure validation functions with no I/O and no
//! allocation. All functions are arithmetic on dimensions and indices.

pub mod dimensions;

pub use dimensions::{
    checked_cell_count, linear_offset, validate_cell_count, validate_product_shape,
    validate_same_shape,
};
