//! Property tests for saving and loading matrix files

use proptest::prelude::*;
use spmat::{MatrixFile, SparseMatrix};
use tempfile::TempDir;

fn matrix_strategy() -> impl Strategy<Value = SparseMatrix> {
    (1usize..10, 1usize..10).prop_flat_map(|(rows, cols)| {
        prop::collection::vec((0..rows, 0..cols, -1000i64..1000), 0..40).prop_map(move |entries| {
            SparseMatrix::from_entries(rows, cols, entries).expect("entries are in bounds")
        })
    })
}

proptest! {
    /// Property: a saved matrix loads back equal, with no temp file left over
    #[test]
    fn prop_file_round_trip(m in matrix_strategy()) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("m.txt");

        MatrixFile::write_matrix(&path, &m).unwrap();
        let loaded: SparseMatrix = MatrixFile::read_matrix(&path).unwrap();

        prop_assert_eq!(&loaded, &m);
        prop_assert!(!dir.path().join("m.txt.tmp").exists());
    }

    /// Property: the saved text is exactly the canonical encoding
    #[test]
    fn prop_saved_text_is_canonical(m in matrix_strategy()) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("m.txt");

        MatrixFile::write_matrix(&path, &m).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();

        prop_assert_eq!(text, spmat::to_text(&m));
    }
}
