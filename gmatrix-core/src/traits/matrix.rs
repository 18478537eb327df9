//! Shape abstraction for dense matrices
//!
//! Implementations store `rows * cols` cells in row-major order.

use crate::validation::{validate_product_shape, validate_same_shape};
use crate::{Operation, Result};

/// Shape and layout of a dense row-major matrix
pub trait MatrixShape {
    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get the number of rows
    fn rows(&self) -> usize {
        self.dimensions().0
    }

    /// Get the number of columns
    fn cols(&self) -> usize {
        self.dimensions().1
    }

    /// Total number of stored cells
    fn len(&self) -> usize {
        let (rows, cols) = self.dimensions();
        rows * cols
    }

    /// Whether this is the `0 x 0` matrix
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the row and column counts are equal
    fn is_square(&self) -> bool {
        let (rows, cols) = self.dimensions();
        rows == cols
    }

    /// Check that `other` has the same shape, as elementwise `op` requires
    fn check_same_shape<M: MatrixShape + ?Sized>(&self, op: Operation, other: &M) -> Result<()> {
        validate_same_shape(op, self.dimensions(), other.dimensions())
    }

    /// Check that `self * other` is defined and return its shape
    fn product_shape<M: MatrixShape + ?Sized>(&self, other: &M) -> Result<(usize, usize)> {
        validate_product_shape(self.dimensions(), other.dimensions())
    }
}
