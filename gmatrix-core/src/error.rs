//! Error types for matrix operations

/// Arithmetic operation that rejected its operands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Sub,
    Mul,
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Operation::Add => "addition",
            Operation::Sub => "subtraction",
            Operation::Mul => "multiplication",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while building or combining matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Exactly one dimension is zero, or `rows * cols` overflows
    InvalidDimensions { rows: usize, cols: usize },
    /// Initial cell sequence does not fill the requested shape
    CellCountMismatch { expected: usize, actual: usize },
    /// Operand shapes are incompatible with the operation
    ShapeMismatch {
        op: Operation,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Row or column outside the matrix
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Coarse classification of [`MatrixError`]
///
/// Callers that only care whether a failure came from a bad shape or a bad
/// index can match on this instead of the individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Construction or operand shapes are inconsistent
    Dimensions,
    /// Cell access outside `[0, rows) x [0, cols)`
    Index,
}

impl MatrixError {
    /// Get the error category
    pub const fn category(&self) -> ErrorCategory {
        match self {
            MatrixError::InvalidDimensions { .. }
            | MatrixError::CellCountMismatch { .. }
            | MatrixError::ShapeMismatch { .. } => ErrorCategory::Dimensions,
            MatrixError::IndexOutOfBounds { .. } => ErrorCategory::Index,
        }
    }

    pub const fn is_dimensions(&self) -> bool {
        matches!(self.category(), ErrorCategory::Dimensions)
    }

    pub const fn is_index(&self) -> bool {
        matches!(self.category(), ErrorCategory::Index)
    }
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::InvalidDimensions { rows, cols } => {
                write!(f, "Invalid matrix dimensions: {rows}x{cols}")
            }
            MatrixError::CellCountMismatch { expected, actual } => write!(
                f,
                "Invalid matrix dimensions: expected {expected} cells, got {actual}"
            ),
            MatrixError::ShapeMismatch { op, left, right } => write!(
                f,
                "Invalid matrix dimensions for {op}: {}x{} and {}x{}",
                left.0, left.1, right.0, right.1
            ),
            MatrixError::IndexOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "Attempt to reach an invalid index in the matrix: ({row}, {col}) in {rows}x{cols}"
            ),
        }
    }
}

impl core::error::Error for MatrixError {}

/// Result type for matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;

#[cfg(test)]
mod tests {
    use super::*;

    extern crate alloc;
    use alloc::string::ToString;

    #[test]
    fn test_category() {
        let dims = MatrixError::InvalidDimensions { rows: 0, cols: 3 };
        let cells = MatrixError::CellCountMismatch {
            expected: 4,
            actual: 3,
        };
        let shape = MatrixError::ShapeMismatch {
            op: Operation::Mul,
            left: (4, 3),
            right: (4, 3),
        };
        let index = MatrixError::IndexOutOfBounds {
            row: 2,
            col: 0,
            rows: 2,
            cols: 2,
        };

        assert_eq!(dims.category(), ErrorCategory::Dimensions);
        assert_eq!(cells.category(), ErrorCategory::Dimensions);
        assert!(shape.is_dimensions());
        assert!(!shape.is_index());
        assert_eq!(index.category(), ErrorCategory::Index);
        assert!(index.is_index());
    }

    #[test]
    fn test_display() {
        let shape = MatrixError::ShapeMismatch {
            op: Operation::Mul,
            left: (4, 3),
            right: (4, 3),
        };
        assert_eq!(
            shape.to_string(),
            "Invalid matrix dimensions for multiplication: 4x3 and 4x3"
        );

        let index = MatrixError::IndexOutOfBounds {
            row: 3,
            col: 1,
            rows: 3,
            cols: 3,
        };
        assert!(index.to_string().starts_with("Attempt to reach an invalid index"));
    }
}
