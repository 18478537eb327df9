//! Guided tour of the gmatrix API
//!
//! Builds a few integer and complex matrices, runs every operator in both
//! execution modes and prints the results, including the errors raised by
//! mismatched shapes.

use clap::Parser;
use gmatrix::{Complex128, ExecutionConfig, Matrix, MatrixError};

const RULE: &str = "----------------------------------------------------------------------";

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "gmatrix demo - construction, arithmetic, transpose and parallel mode")]
struct Cli {
    /// Start with parallel addition and multiplication enabled
    #[arg(long)]
    parallel: bool,

    /// Minimum number of result rows per parallel task
    #[arg(long, default_value_t = 1)]
    min_rows: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    Matrix::<i32>::set_parallel(cli.parallel);
    let start_time = std::time::Instant::now();

    integer_tour(cli.min_rows)?;
    complex_tour()?;

    let elapsed = start_time.elapsed();
    println!("Tour completed in {elapsed:.2?}");
    Ok(())
}

fn report(e: MatrixError) {
    println!("An error was caught ({:?}): {e}", e.category());
}

fn integer_tour(min_rows: usize) -> Result<(), MatrixError> {
    println!("Creating a 3x3 matrix of ints from given cells...");
    let m1 = Matrix::from_vec(3, 3, (1..=9).collect::<Vec<i32>>())?;
    println!("{m1}");

    println!("Assigning the 3x3 matrix to a 4x5 matrix...");
    let mut assigned: Matrix<i32> = Matrix::zeros(4, 5)?;
    assigned.clone_from(&m1);
    println!("{assigned}");
    println!("{RULE}\n");

    println!("Creating a zero 5x4 matrix of ints...");
    let zeros: Matrix<i32> = Matrix::zeros(5, 4)?;
    println!("{zeros}");
    println!("Subtracting the 3x3 matrix from the 5x4 matrix...");
    match &zeros - &assigned {
        Ok(diff) => println!("{diff}"),
        Err(e) => report(e),
    }
    println!("{RULE}\n");

    println!("Copying the first 3x3 matrix...");
    let mut m2 = m1.clone();
    println!("{m2}");
    println!("Setting cell (1,2) to 65 and cell (2,0) to -11...");
    *m2.get_mut(1, 2)? = 65;
    m2[(2, 0)] = -11;
    println!("{m2}");
    println!("Number of rows: {}", m2.rows());

    println!("Switching to parallel mode...");
    Matrix::<i32>::set_parallel(true);
    println!("Adding the copy and the original...");
    println!("{}", (&m2 + &m1)?);
    let config = ExecutionConfig::parallel().with_min_rows_per_task(min_rows);
    println!("Same addition with {min_rows} row(s) per task...");
    println!("{}", m2.add_with(&m1, &config)?);
    println!("{RULE}\n");

    println!("Creating a 4x3 matrix of ints from given cells...");
    let m3 = Matrix::from_vec(4, 3, vec![23, -7, 0, 0, 3, 25, -5, 94, -36, 81, 17, -42])?;
    println!("{m3}");
    println!("Square matrix: {}", m3.is_square());

    println!("Moving a copy of the 4x3 matrix into a new binding...");
    let copy = m3.clone();
    let moved = copy;
    println!("{moved}");
    println!("Moved copy differs from original: {}", moved != m3);

    println!("Multiplying the 4x3 matrix by itself...");
    match &m3 * &m3 {
        Ok(product) => println!("{product}"),
        Err(e) => report(e),
    }

    println!("Transposing the 4x3 matrix...");
    println!("{}", m3.transpose());
    println!("Transpose equals original: {}", m3 == m3.transpose());

    println!("Switching to non-parallel mode...");
    Matrix::<i32>::set_parallel(false);
    println!("Switching to non-parallel mode again (no message expected)...");
    Matrix::<i32>::set_parallel(false);

    println!("Multiplying the 4x3 matrix by its transpose...");
    println!("{}", (&m3 * &m3.transpose())?);

    println!("Reading cell (4,0) of the 4x3 matrix...");
    if let Err(e) = m3.get(4, 0) {
        report(e);
    }
    println!("{RULE}\n");
    Ok(())
}

fn complex_tour() -> Result<(), MatrixError> {
    println!("Creating a 2x3 complex matrix...");
    let cells = (0..6)
        .map(|i| Complex128::new(f64::from(i), f64::from(i % 3) - 1.0))
        .collect::<Vec<_>>();
    let z = Matrix::from_vec(2, 3, cells)?;
    println!("{z}");

    println!("Conjugate transpose...");
    let h = z.transpose();
    println!("{h}");

    println!("Product with its conjugate transpose (Hermitian)...");
    let gram = z.mul_with(&h, &ExecutionConfig::parallel())?;
    println!("{gram}");
    println!("Hermitian: {}", gram.transpose() == gram);
    println!("------------------------------- END ----------------------------------\n");
    Ok(())
}
