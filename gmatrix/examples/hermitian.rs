//! Conjugate transpose of a complex matrix and a Hermitian product

use gmatrix::{Complex128, ExecutionConfig, Matrix, Result};

fn main() -> Result<()> {
    let a = Matrix::from_rows(vec![
        vec![Complex128::new(1.0, 2.0), Complex128::new(0.0, -1.0)],
        vec![Complex128::new(3.0, 0.0), Complex128::new(2.0, 2.0)],
        vec![Complex128::new(-1.0, 1.0), Complex128::new(4.0, -3.0)],
    ])?;
    println!("A ({}x{}):\n{a}", a.rows(), a.cols());

    let a_h = a.transpose();
    println!("A^H ({}x{}):\n{a_h}", a_h.rows(), a_h.cols());

    let config = ExecutionConfig::parallel();
    let gram = a_h.mul_with(&a, &config)?;
    println!("A^H * A:\n{gram}");
    println!("Hermitian: {}", gram == gram.transpose());
    Ok(())
}
