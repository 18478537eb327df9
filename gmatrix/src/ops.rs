//! Matrix arithmetic: addition, subtraction, multiplication and transpose
//!
//! Every operation validates operand shapes before allocating its result
//! and returns a fresh matrix; operands are never modified. Addition and
//! multiplication honour an [`ExecutionConfig`]; the operator forms
//! (`&a + &b`, `&a * &b`) use the default mode of the element type.
//! Sequential and parallel execution produce identical results.

use std::ops::{Add, Mul, Sub};

use gmatrix_core::{MatrixElement, MatrixShape, Operation, Result};

use crate::execution::{for_each_row, ExecutionConfig, ExecutionMode};
use crate::Matrix;

impl<T: MatrixElement + Send + Sync> Matrix<T> {
    /// Elementwise sum using the given execution strategy
    ///
    /// Fails with a dimensions error unless both matrices have the same
    /// shape.
    pub fn add_with(&self, other: &Self, config: &ExecutionConfig) -> Result<Self> {
        self.check_same_shape(Operation::Add, other)?;

        let mut result = self.clone();
        match config.mode {
            ExecutionMode::Sequential => {
                for (cell, rhs) in result.cells.iter_mut().zip(&other.cells) {
                    *cell += rhs.clone();
                }
            }
            ExecutionMode::Parallel => {
                for_each_row(&mut result.cells, self.cols, config, |row, out| {
                    for (cell, rhs) in out.iter_mut().zip(other.row_slice(row)) {
                        *cell += rhs.clone();
                    }
                });
            }
        }
        Ok(result)
    }

    /// Matrix product using the given execution strategy
    ///
    /// `self` must have as many columns as `other` has rows. Each result
    /// cell starts from zero and accumulates `self(i, k) * other(k, j)`.
    pub fn mul_with(&self, other: &Self, config: &ExecutionConfig) -> Result<Self> {
        let (rows, cols) = self.product_shape(other)?;

        let mut result = Self::zeros(rows, cols)?;
        for_each_row(&mut result.cells, cols, config, |i, out| {
            let lhs = self.row_slice(i);
            for (j, cell) in out.iter_mut().enumerate() {
                let mut sum = T::zero();
                for (k, a) in lhs.iter().enumerate() {
                    sum += a.clone() * other.cells[k * cols + j].clone();
                }
                *cell = sum;
            }
        });
        Ok(result)
    }
}

impl<T: MatrixElement + Send + Sync + 'static> Matrix<T> {
    /// Enable or disable parallel addition and multiplication for every
    /// `Matrix<T>` using the operator forms
    ///
    /// Returns `true` (and logs the new mode) only when the mode changed.
    pub fn set_parallel(enabled: bool) -> bool {
        crate::execution::set_default_mode::<T>(ExecutionMode::from_parallel(enabled))
    }

    /// Whether the operator forms currently run in parallel for `Matrix<T>`
    pub fn is_parallel() -> bool {
        crate::execution::default_mode::<T>().is_parallel()
    }
}

impl<T: MatrixElement> Matrix<T> {
    /// Elementwise difference `self - other`, always sequential
    pub fn sub_matrix(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(Operation::Sub, other)?;

        let mut result = self.clone();
        for (cell, rhs) in result.cells.iter_mut().zip(&other.cells) {
            *cell -= rhs.clone();
        }
        Ok(result)
    }

    /// Transpose, conjugating every element
    ///
    /// For real element types this is the plain transpose. For complex
    /// element types each cell is conjugated as well, giving the conjugate
    /// (Hermitian) transpose.
    pub fn transpose(&self) -> Self {
        let mut cells = Vec::with_capacity(self.cells.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                cells.push(self.cells[row * self.cols + col].conjugate());
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// Alias for [`Matrix::transpose`]
    pub fn trans(&self) -> Self {
        self.transpose()
    }
}

impl<T: MatrixElement + Send + Sync + 'static> Add for &Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_with(rhs, &ExecutionConfig::for_element::<T>())
    }
}

impl<T: MatrixElement> Sub for &Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.sub_matrix(rhs)
    }
}

impl<T: MatrixElement + Send + Sync + 'static> Mul for &Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_with(rhs, &ExecutionConfig::for_element::<T>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gmatrix_core::{Complex128, Conjugate, MatrixError};
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::ops::{AddAssign, SubAssign};

    fn one_to_nine() -> Matrix<i32> {
        Matrix::from_vec(3, 3, (1..=9).collect()).unwrap()
    }

    fn sample_4x3() -> Matrix<i32> {
        Matrix::from_vec(4, 3, vec![23, -7, 0, 0, 3, 25, -5, 94, -36, 81, 17, -42]).unwrap()
    }

    fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> Matrix<i64> {
        let cells = (0..rows * cols).map(|_| rng.gen_range(-100..100)).collect();
        Matrix::from_vec(rows, cols, cells).unwrap()
    }

    fn configs() -> [ExecutionConfig; 3] {
        [
            ExecutionConfig::sequential(),
            ExecutionConfig::parallel(),
            ExecutionConfig::parallel().with_min_rows_per_task(2),
        ]
    }

    #[test]
    fn test_add_example() {
        let m = one_to_nine();
        let expected = Matrix::from_vec(3, 3, vec![2, 4, 6, 8, 10, 12, 14, 16, 18]).unwrap();
        for config in configs() {
            assert_eq!(m.add_with(&m, &config).unwrap(), expected);
        }
        assert_eq!((&m + &m).unwrap(), expected);
        // Operands are untouched
        assert_eq!(m, one_to_nine());
    }

    #[test]
    fn test_add_matches_cellwise_sum() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = random_matrix(&mut rng, 13, 9);
        let b = random_matrix(&mut rng, 13, 9);

        let sequential = a.add_with(&b, &ExecutionConfig::sequential()).unwrap();
        for i in 0..13 {
            for j in 0..9 {
                assert_eq!(sequential[(i, j)], a[(i, j)] + b[(i, j)]);
            }
        }
        for config in configs() {
            assert_eq!(a.add_with(&b, &config).unwrap(), sequential);
        }
    }

    #[test]
    fn test_add_shape_mismatch() {
        let a: Matrix<i32> = Matrix::zeros(5, 4).unwrap();
        let b = one_to_nine();
        for config in configs() {
            assert_eq!(
                a.add_with(&b, &config).unwrap_err(),
                MatrixError::ShapeMismatch {
                    op: Operation::Add,
                    left: (5, 4),
                    right: (3, 3)
                }
            );
        }
    }

    #[test]
    fn test_sub() {
        let m = one_to_nine();
        let mut copy = m.clone();
        copy[(1, 2)] = 65;
        copy[(2, 0)] = -11;

        let diff = (&copy - &m).unwrap();
        assert_eq!(
            diff,
            Matrix::from_vec(3, 3, vec![0, 0, 0, 0, 0, 59, -18, 0, 0]).unwrap()
        );
        assert_eq!(m.sub_matrix(&m).unwrap(), Matrix::zeros(3, 3).unwrap());

        let other: Matrix<i32> = Matrix::zeros(5, 4).unwrap();
        assert!((&other - &m).unwrap_err().is_dimensions());
    }

    #[test]
    fn test_mul_shape() {
        let mut rng = StdRng::seed_from_u64(11);
        let a = random_matrix(&mut rng, 4, 6);
        let b = random_matrix(&mut rng, 6, 2);
        for config in configs() {
            let product = a.mul_with(&b, &config).unwrap();
            assert_eq!(product.dimensions(), (4, 2));
        }
    }

    #[test]
    fn test_mul_rejects_inner_mismatch() {
        let m = sample_4x3();
        for config in configs() {
            assert_eq!(
                m.mul_with(&m, &config).unwrap_err(),
                MatrixError::ShapeMismatch {
                    op: Operation::Mul,
                    left: (4, 3),
                    right: (4, 3)
                }
            );
        }
        assert!((&m * &m).unwrap_err().is_dimensions());
    }

    #[test]
    fn test_mul_by_transpose() {
        let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let expected = Matrix::from_vec(2, 2, vec![14, 32, 32, 77]).unwrap();
        for config in configs() {
            assert_eq!(m.mul_with(&m.transpose(), &config).unwrap(), expected);
        }
    }

    #[test]
    fn test_mul_modes_agree() {
        let mut rng = StdRng::seed_from_u64(42);
        let a = random_matrix(&mut rng, 17, 11);
        let b = random_matrix(&mut rng, 11, 23);

        let sequential = a.mul_with(&b, &ExecutionConfig::sequential()).unwrap();
        for i in 0..17 {
            for j in 0..23 {
                let dot: i64 = (0..11).map(|k| a[(i, k)] * b[(k, j)]).sum();
                assert_eq!(sequential[(i, j)], dot);
            }
        }
        for config in configs() {
            assert_eq!(a.mul_with(&b, &config).unwrap(), sequential);
        }
    }

    #[test]
    fn test_transpose_example() {
        let t = sample_4x3().transpose();
        assert_eq!(t.dimensions(), (3, 4));
        assert_eq!(t.row(0).unwrap(), &[23, 0, -5, 81]);
        assert_eq!(t.row(2).unwrap(), &[0, 25, -36, -42]);
    }

    #[test]
    fn test_transpose_involution() {
        let mut rng = StdRng::seed_from_u64(3);
        for (rows, cols) in [(1, 1), (4, 3), (3, 4), (8, 8), (1, 9)] {
            let m = random_matrix(&mut rng, rows, cols);
            assert_eq!(m.transpose().transpose(), m);
        }
        let m = sample_4x3();
        assert_eq!(m.trans(), m.transpose());
    }

    #[test]
    fn test_equality() {
        let m = sample_4x3();
        assert_eq!(m, m);
        assert!(m != m.transpose());

        // Asymmetric square matrix differs from its transpose
        let square = one_to_nine();
        assert_ne!(square, square.transpose());

        // Same cells, different shape
        let reshaped = Matrix::from_vec(3, 4, sample_4x3().into_vec()).unwrap();
        assert_ne!(reshaped, sample_4x3());
    }

    #[test]
    fn test_complex_transpose_conjugates() {
        let a = Matrix::from_vec(
            2,
            2,
            vec![
                Complex128::new(1.0, 1.0),
                Complex128::new(2.0, -3.0),
                Complex128::new(0.0, 4.0),
                Complex128::new(5.0, 0.0),
            ],
        )
        .unwrap();

        let t = a.transpose();
        assert_eq!(t[(0, 0)], Complex128::new(1.0, -1.0));
        assert_eq!(t[(0, 1)], Complex128::new(0.0, -4.0));
        assert_eq!(t[(1, 0)], Complex128::new(2.0, 3.0));
        assert_eq!(t[(1, 1)], Complex128::new(5.0, 0.0));
        assert_ne!(t, a);
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn test_hermitian_matrix_is_its_own_transpose() {
        let h = Matrix::from_vec(
            2,
            2,
            vec![
                Complex128::new(2.0, 0.0),
                Complex128::new(1.0, -1.0),
                Complex128::new(1.0, 1.0),
                Complex128::new(3.0, 0.0),
            ],
        )
        .unwrap();
        assert_eq!(h.transpose(), h);
    }

    #[test]
    fn test_complex_arithmetic_modes_agree() {
        let cells: Vec<Complex128> = (0..12)
            .map(|i| Complex128::new(i as f64, (i % 5) as f64 - 2.0))
            .collect();
        let a = Matrix::from_vec(3, 4, cells).unwrap();
        let h = a.transpose();

        let sequential = a.mul_with(&h, &ExecutionConfig::sequential()).unwrap();
        let parallel = a.mul_with(&h, &ExecutionConfig::parallel()).unwrap();
        assert_eq!(sequential, parallel);
        // A * A^H is Hermitian
        assert_eq!(sequential.transpose(), sequential);

        assert_eq!(
            a.add_with(&a, &ExecutionConfig::sequential()).unwrap(),
            a.add_with(&a, &ExecutionConfig::parallel()).unwrap()
        );
    }

    #[test]
    fn test_empty_matrix_operations() {
        let empty: Matrix<i32> = Matrix::empty();
        for config in configs() {
            assert_eq!(empty.add_with(&empty, &config).unwrap(), Matrix::empty());
            assert_eq!(empty.mul_with(&empty, &config).unwrap(), Matrix::empty());
        }
        assert_eq!((&empty - &empty).unwrap(), Matrix::empty());
        assert_eq!(empty.transpose(), Matrix::empty());

        let one: Matrix<i32> = Matrix::new();
        assert!((&empty + &one).unwrap_err().is_dimensions());
        assert!((&empty * &one).unwrap_err().is_dimensions());
    }

    /// Integer wrapper exercising the element contract outside the primitives
    #[derive(Debug, Clone, Default, PartialEq)]
    struct Tally(i64);

    impl Add for Tally {
        type Output = Self;
        fn add(self, rhs: Self) -> Self {
            Tally(self.0 + rhs.0)
        }
    }

    impl Sub for Tally {
        type Output = Self;
        fn sub(self, rhs: Self) -> Self {
            Tally(self.0 - rhs.0)
        }
    }

    impl Mul for Tally {
        type Output = Self;
        fn mul(self, rhs: Self) -> Self {
            Tally(self.0 * rhs.0)
        }
    }

    impl AddAssign for Tally {
        fn add_assign(&mut self, rhs: Self) {
            self.0 += rhs.0;
        }
    }

    impl SubAssign for Tally {
        fn sub_assign(&mut self, rhs: Self) {
            self.0 -= rhs.0;
        }
    }

    impl Conjugate for Tally {
        fn conjugate(&self) -> Self {
            self.clone()
        }
    }

    #[test]
    fn test_parallel_toggle_drives_operators() {
        let cells = (1..=9).map(Tally).collect();
        let m = Matrix::from_vec(3, 3, cells).unwrap();
        let sequential = (&m * &m).unwrap();

        assert!(!Matrix::<Tally>::is_parallel());
        assert!(Matrix::<Tally>::set_parallel(true));
        assert!(!Matrix::<Tally>::set_parallel(true));
        assert!(Matrix::<Tally>::is_parallel());

        assert_eq!((&m * &m).unwrap(), sequential);
        assert_eq!(
            (&m + &m).unwrap(),
            Matrix::from_vec(3, 3, (1..=9).map(|i| Tally(2 * i)).collect()).unwrap()
        );

        assert!(Matrix::<Tally>::set_parallel(false));
        assert!(!Matrix::<Tally>::set_parallel(false));
        assert!(!Matrix::<Tally>::is_parallel());
    }
}
