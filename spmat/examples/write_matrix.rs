//! Write two small matrices to text files for the other examples

use spmat::{MatrixFile, Result, SparseMatrix};
use std::time::Instant;

fn main() -> Result<()> {
    println!("Writing example matrices...");

    let start = Instant::now();

    // 3x4 with a few scattered nonzeros
    let a: SparseMatrix = SparseMatrix::from_entries(
        3,
        4,
        [(0, 0, 1), (0, 2, 2), (1, 1, 3), (2, 0, 4), (2, 3, 5)],
    )?;
    // 4x2, compatible with `a` for multiplication
    let b: SparseMatrix =
        SparseMatrix::from_entries(4, 2, [(0, 0, 1), (1, 1, 2), (2, 0, 3), (3, 1, 4)])?;

    MatrixFile::write_matrix("example_a.txt", &a)?;
    MatrixFile::write_matrix("example_b.txt", &b)?;

    println!("A: {} ({} nonzeros) -> example_a.txt", a.shape(), a.nnz());
    println!("B: {} ({} nonzeros) -> example_b.txt", b.shape(), b.nnz());
    println!("Written in {:?}", start.elapsed());
    println!("\nRun 'cargo run --example read_matrix' to multiply them!");
    Ok(())
}
