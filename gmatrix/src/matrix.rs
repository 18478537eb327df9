//! Dense row-major matrix storage
//!
//! This module owns the `Matrix<T>` type: its storage, construction,
//! checked cell access, traversal and text rendering. Arithmetic lives in
//! [`crate::ops`].

use std::fmt;
use std::ops::{Index, IndexMut};

use gmatrix_core::{
    checked_cell_count, linear_offset, validate_cell_count, MatrixElement, MatrixError,
    MatrixShape, Result,
};

/// Separator written after every cell by the `Display` impl
pub const CELL_SEPARATOR: char = '\t';

/// Generic dense matrix with value semantics
///
/// Cells are stored in a single row-major buffer of exactly `rows * cols`
/// elements. Either both dimensions are zero (the empty matrix) or neither
/// is. Cloning copies the buffer; two matrices never share storage.
#[derive(Debug, PartialEq, Eq)]
pub struct Matrix<T> {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) cells: Vec<T>,
}

impl<T: MatrixElement> Matrix<T> {
    /// Create a 1x1 matrix holding the zero value
    pub fn new() -> Self {
        Self {
            rows: 1,
            cols: 1,
            cells: vec![T::zero()],
        }
    }

    /// Create a `rows x cols` matrix with every cell set to zero
    ///
    /// Fails if exactly one of `rows` and `cols` is zero.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        let len = checked_cell_count(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![T::zero(); len],
        })
    }
}

impl<T> Matrix<T> {
    /// Create the `0 x 0` matrix
    pub const fn empty() -> Self {
        Self {
            rows: 0,
            cols: 0,
            cells: Vec::new(),
        }
    }

    /// Create a `rows x cols` matrix from row-major cells
    ///
    /// Fails if the shape violates dimension parity or if `cells` does not
    /// hold exactly `rows * cols` elements.
    pub fn from_vec(rows: usize, cols: usize, cells: Vec<T>) -> Result<Self> {
        validate_cell_count(rows, cols, cells.len())?;
        Ok(Self { rows, cols, cells })
    }

    /// Create a matrix from a list of equally long rows
    ///
    /// No rows, or only empty rows, yield the empty matrix.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        if ncols == 0 {
            if let Some(row) = rows.iter().find(|row| !row.is_empty()) {
                return Err(MatrixError::InvalidDimensions {
                    rows: nrows,
                    cols: row.len(),
                });
            }
            return Ok(Self::empty());
        }

        let mut cells = Vec::with_capacity(checked_cell_count(nrows, ncols)?);
        for row in rows {
            if row.len() != ncols {
                return Err(MatrixError::CellCountMismatch {
                    expected: ncols,
                    actual: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Self {
            rows: nrows,
            cols: ncols,
            cells,
        })
    }

    /// Get matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Get the number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the matrix is square
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Get a reference to the cell at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Result<&T> {
        let offset = linear_offset(self.rows, self.cols, row, col)?;
        Ok(&self.cells[offset])
    }

    /// Get a mutable reference to the cell at `(row, col)`
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        let offset = linear_offset(self.rows, self.cols, row, col)?;
        Ok(&mut self.cells[offset])
    }

    /// Get one row as a slice
    pub fn row(&self, row: usize) -> Result<&[T]> {
        if row >= self.rows {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col: 0,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.row_slice(row))
    }

    /// Row slice for an index already known to be in range
    pub(crate) fn row_slice(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Iterate over all cells in row-major order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.cells.iter()
    }

    /// Iterate over the rows as slices
    pub fn row_iter(&self) -> std::slice::Chunks<'_, T> {
        // The empty matrix has no cells, so any non-zero chunk size yields no rows
        self.cells.chunks(self.cols.max(1))
    }

    /// View the row-major storage
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Consume the matrix and return its row-major storage
    pub fn into_vec(self) -> Vec<T> {
        self.cells
    }
}

impl<T> MatrixShape for Matrix<T> {
    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

impl<T: MatrixElement> Default for Matrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Matrix<T> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.clone(),
        }
    }

    /// Copy-and-swap: the copy is fully built before `self` changes, so a
    /// panicking element clone leaves `self` as it was.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        std::mem::swap(self, &mut copy);
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the matrix; use [`Matrix::get`] for
    /// a checked lookup.
    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.get(row, col) {
            Ok(cell) => cell,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        match self.get_mut(row, col) {
            Ok(cell) => cell,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<'a, T> IntoIterator for &'a Matrix<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One line per row; every cell is followed by a tab.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.row_iter() {
            for cell in row {
                write!(f, "{cell}{CELL_SEPARATOR}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
