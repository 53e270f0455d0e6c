//! Human-readable dump of a matrix

use std::io::{self, Write};

use spmat_core::{MatrixElement, SparseMatrix};

/// Heading printed before the per-row dump
pub const CONTENTS_HEADING: &str = "Sparse Matrix Contents:";

/// Print every nonzero of `matrix`, one line per row
///
/// Nonempty rows list `[r, c] = v` items with columns ascending; rows with
/// no nonzeros print `[r] Empty row`.
pub fn show<T: MatrixElement, W: Write>(matrix: &SparseMatrix<T>, out: &mut W) -> io::Result<()> {
    writeln!(out, "{CONTENTS_HEADING}")?;
    for r in 0..matrix.nrows() {
        let entries = matrix.row(r);
        if entries.is_empty() {
            writeln!(out, "[{r}] Empty row")?;
            continue;
        }
        let items: Vec<String> = entries
            .iter()
            .map(|(c, v)| format!("[{r}, {c}] = {v}"))
            .collect();
        writeln!(out, "{}", items.join(" "))?;
    }
    Ok(())
}

/// Render the dump into a string
pub fn render<T: MatrixElement>(matrix: &SparseMatrix<T>) -> String {
    let mut buffer = Vec::new();
    // Writes into a Vec cannot fail
    let _ = show(matrix, &mut buffer);
    String::from_utf8_lossy(&buffer).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_marks_empty_rows() {
        let m: SparseMatrix =
            SparseMatrix::from_entries(3, 4, vec![(0, 3, 2), (0, 1, -5), (2, 0, 9)]).unwrap();
        assert_eq!(
            render(&m),
            "Sparse Matrix Contents:\n[0, 1] = -5 [0, 3] = 2\n[1] Empty row\n[2, 0] = 9\n"
        );
    }

    #[test]
    fn test_show_no_rows() {
        let m: SparseMatrix = SparseMatrix::new(0, 3);
        assert_eq!(render(&m), "Sparse Matrix Contents:\n");
    }
}
