//! File I/O operations for text matrix files
//!
//! This module reads and writes the `rows=` / `cols=` / `(r,c,v)` text
//! format defined in `spmat_core::format`. Reads stream line by line through
//! a [`LineDecoder`]; writes go to a sibling temp file that is renamed over
//! the target only after it has been flushed and synced.

use std::ffi::OsString;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use spmat_core::{encode, LineDecoder, MatrixElement, SparseMatrix};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Suffix appended to the target file name while a write is in progress
const TEMP_SUFFIX: &str = ".tmp";

/// Reader and writer for text matrix files
pub struct MatrixFile;

impl MatrixFile {
    /// Load a matrix from `path`
    ///
    /// Either the whole file decodes or an error is returned; no partially
    /// filled matrix escapes.
    pub fn read_matrix<T: MatrixElement, P: AsRef<Path>>(path: P) -> Result<SparseMatrix<T>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io("Failed to open", path, e))?;
        let matrix = Self::read_from(BufReader::new(file), path)?;

        debug!(
            path = %path.display(),
            rows = matrix.nrows(),
            cols = matrix.ncols(),
            nnz = matrix.nnz(),
            "loaded matrix"
        );
        Ok(matrix)
    }

    /// Decode a matrix from any buffered reader
    ///
    /// `path` is only used to label errors.
    pub fn read_from<T: MatrixElement, R: BufRead>(reader: R, path: &Path) -> Result<SparseMatrix<T>> {
        let mut decoder = LineDecoder::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| Error::io("Failed to read", path, e))?;
            decoder
                .process_line(index + 1, &line)
                .map_err(|e| Error::decode(path, e))?;
        }
        decoder.finalize().map_err(|e| Error::decode(path, e))
    }

    /// Save `matrix` to `path`, replacing any existing file
    ///
    /// On failure the target is left untouched and the temp file is removed.
    pub fn write_matrix<T: MatrixElement, P: AsRef<Path>>(path: P, matrix: &SparseMatrix<T>) -> Result<()> {
        let path = path.as_ref();
        let temp_path = temp_path_for(path).map_err(|e| Error::io("Failed to write", path, e))?;

        if let Err(e) = write_and_rename(&temp_path, path, matrix) {
            remove_leftover(&temp_path);
            return Err(Error::io("Failed to write", path, e));
        }

        debug!(
            path = %path.display(),
            rows = matrix.nrows(),
            cols = matrix.ncols(),
            nnz = matrix.nnz(),
            "saved matrix"
        );
        Ok(())
    }

    /// Encode `matrix` into any writer
    pub fn write_to<T: MatrixElement, W: Write>(writer: &mut W, matrix: &SparseMatrix<T>) -> io::Result<()> {
        let mut adapter = FmtAdapter {
            inner: writer,
            error: None,
        };
        match encode(matrix, &mut adapter) {
            Ok(()) => Ok(()),
            Err(fmt::Error) => Err(adapter
                .error
                .take()
                .unwrap_or_else(|| io::Error::other("formatter error"))),
        }
    }

    /// Load a matrix stored as JSON (`{"rows", "cols", "entries"}`)
    #[cfg(feature = "serde")]
    pub fn read_json<T, P>(path: P) -> Result<SparseMatrix<T>>
    where
        T: MatrixElement + serde::de::DeserializeOwned,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io("Failed to open", path, e))?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save a matrix as pretty-printed JSON, with the same temp-file rename
    #[cfg(feature = "serde")]
    pub fn write_json<T, P>(path: P, matrix: &SparseMatrix<T>) -> Result<()>
    where
        T: MatrixElement + serde::Serialize,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let temp_path = temp_path_for(path).map_err(|e| Error::io("Failed to write", path, e))?;

        let outcome = (|| -> io::Result<()> {
            let mut writer = BufWriter::new(File::create(&temp_path)?);
            serde_json::to_writer_pretty(&mut writer, matrix)?;
            writer.write_all(b"\n")?;
            finish(writer, &temp_path, path)
        })();

        outcome.map_err(|e| {
            remove_leftover(&temp_path);
            Error::io("Failed to write", path, e)
        })
    }
}

/// `dir/name` -> `dir/name.tmp`
fn temp_path_for(path: &Path) -> io::Result<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "path does not name a file")
    })?;
    let mut temp_name = OsString::from(name);
    temp_name.push(TEMP_SUFFIX);
    Ok(path.with_file_name(temp_name))
}

fn write_and_rename<T: MatrixElement>(temp_path: &Path, path: &Path, matrix: &SparseMatrix<T>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(temp_path)?);
    MatrixFile::write_to(&mut writer, matrix)?;
    finish(writer, temp_path, path)
}

/// Flush and sync the temp file, then move it into place
fn finish(writer: BufWriter<File>, temp_path: &Path, path: &Path) -> io::Result<()> {
    let file = writer.into_inner().map_err(io::IntoInnerError::into_error)?;
    file.sync_all()?;
    drop(file);
    fs::rename(temp_path, path)
}

fn remove_leftover(temp_path: &Path) {
    if let Err(e) = fs::remove_file(temp_path) {
        if e.kind() != io::ErrorKind::NotFound {
            warn!(path = %temp_path.display(), error = %e, "could not remove temp file");
        }
    }
}

/// Bridges `core::fmt::Write` (used by the codec) onto `io::Write`
struct FmtAdapter<'a, W: Write> {
    inner: &'a mut W,
    error: Option<io::Error>,
}

impl<W: Write> fmt::Write for FmtAdapter<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample() -> SparseMatrix {
        SparseMatrix::from_entries(3, 3, vec![(2, 0, 4), (0, 2, -1), (0, 0, 7)]).unwrap()
    }

    #[test]
    fn test_write_to_is_sorted() {
        let mut buffer = Vec::new();
        MatrixFile::write_to(&mut buffer, &sample()).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "rows=3\ncols=3\n(0,0,7)\n(0,2,-1)\n(2,0,4)\n"
        );
    }

    #[test]
    fn test_read_from_cursor() {
        let input = Cursor::new("rows=2\ncols=2\n\n(1,0,3)\n");
        let m: SparseMatrix = MatrixFile::read_from(input, Path::new("mem")).unwrap();
        assert_eq!(m.get_value(1, 0), 3);
    }

    #[test]
    fn test_read_from_reports_path_and_line() {
        let input = Cursor::new("rows=2\ncols=2\n(1,2)\n");
        let err = MatrixFile::read_from::<i64, _>(input, Path::new("bad.txt")).unwrap_err();
        assert!(matches!(err, Error::Decode { ref path, error } if path == Path::new("bad.txt") && error.line == 3));
    }

    #[test]
    fn test_temp_path_for() {
        assert_eq!(
            temp_path_for(Path::new("out/result.txt")).unwrap(),
            PathBuf::from("out/result.txt.tmp")
        );
        assert!(temp_path_for(Path::new("..")).is_err());
    }

    #[test]
    fn test_write_to_propagates_io_error() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }
        let err = MatrixFile::write_to(&mut Broken, &sample()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
