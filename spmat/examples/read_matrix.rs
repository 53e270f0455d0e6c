//! Read the matrices written by `write_matrix`, multiply them and print the result

use spmat::{show, MatrixFile, MatrixOp, MatrixView, Result, SparseMatrix};

fn main() -> Result<()> {
    let a: SparseMatrix = MatrixFile::read_matrix("example_a.txt")?;
    let b: SparseMatrix = MatrixFile::read_matrix("example_b.txt")?;

    println!("A: {:?} with {} nonzeros", a.dimensions(), MatrixView::nnz(&a));
    println!("B: {:?} with {} nonzeros", b.dimensions(), MatrixView::nnz(&b));

    let product = MatrixOp::Multiply.apply(&a, &b)?;
    println!("\nA * B:");
    show(&product, &mut std::io::stdout().lock()).map_err(spmat::Error::Terminal)?;

    // Element access: stored values and implicit zeros
    for (row, col) in [(0, 0), (1, 0), (2, 1)] {
        match product.get_element(row, col) {
            Some(value) => println!("product[{row}, {col}] = {value}"),
            None => println!("product[{row}, {col}] is zero"),
        }
    }

    // Adding a matrix of a different shape is a recoverable error
    if let Err(err) = a.add(&b) {
        println!("\nA + B fails as expected: {err}");
    }

    // The text form is the file format
    print!("\nA * B as text:\n{product}");
    Ok(())
}
