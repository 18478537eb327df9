//! Shape and index validation for dense row-major matrices
//!
//! Pure functions with no allocation. Every constructor and operator in the
//! engine goes through these before touching any storage.

use crate::{MatrixError, Operation, Result};

/// Validate a `rows x cols` shape and return its cell count
///
/// Both dimensions must be zero or both non-zero. The product is computed
/// with overflow protection so that `rows * cols` is always a valid
/// allocation length.
pub const fn checked_cell_count(rows: usize, cols: usize) -> Result<usize> {
    if (rows == 0) != (cols == 0) {
        return Err(MatrixError::InvalidDimensions { rows, cols });
    }

    match rows.checked_mul(cols) {
        Some(count) => Ok(count),
        None => Err(MatrixError::InvalidDimensions { rows, cols }),
    }
}

/// Validate that `actual` initial cells exactly fill a `rows x cols` shape
pub const fn validate_cell_count(rows: usize, cols: usize, actual: usize) -> Result<usize> {
    let expected = match checked_cell_count(rows, cols) {
        Ok(count) => count,
        Err(e) => return Err(e),
    };

    if actual != expected {
        return Err(MatrixError::CellCountMismatch { expected, actual });
    }

    Ok(expected)
}

/// Map `(row, col)` to its row-major offset, rejecting out-of-range indices
pub const fn linear_offset(rows: usize, cols: usize, row: usize, col: usize) -> Result<usize> {
    if row >= rows || col >= cols {
        return Err(MatrixError::IndexOutOfBounds {
            row,
            col,
            rows,
            cols,
        });
    }

    Ok(row * cols + col)
}

/// Validate operands of an elementwise operation (identical shapes)
pub const fn validate_same_shape(
    op: Operation,
    left: (usize, usize),
    right: (usize, usize),
) -> Result<()> {
    if left.0 != right.0 || left.1 != right.1 {
        return Err(MatrixError::ShapeMismatch { op, left, right });
    }
    Ok(())
}

/// Validate operands of a matrix product and return the result shape
///
/// The left column count must equal the right row count. The result is
/// `(left.rows, right.cols)`.
pub const fn validate_product_shape(
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(usize, usize)> {
    if left.1 != right.0 {
        return Err(MatrixError::ShapeMismatch {
            op: Operation::Mul,
            left,
            right,
        });
    }
    Ok((left.0, right.1))
}
