//! File-based record source.

use crate::model::error::InputError;
use std::path::{Path, PathBuf};

/// Record file read in full at construction.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    contents: String,
}

impl FileSource {
    /// Read the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    /// Returns `InputError::Io` for other I/O errors.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = std::fs::read_to_string(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            contents,
        })
    }

    /// Path the records were read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw file contents.
    pub fn contents(&self) -> &str {
        &self.contents
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn new_reads_whole_file() {
        let test_file = std::env::temp_dir().join("pagewin_file_source_reads.jsonl");
        fs::write(&test_file, "{\"a\":1}\n{\"a\":2}\n").unwrap();

        let source = FileSource::new(&test_file).unwrap();
        let _ = fs::remove_file(&test_file);

        assert_eq!(source.contents(), "{\"a\":1}\n{\"a\":2}\n");
        assert_eq!(source.path(), test_file.as_path());
    }

    #[test]
    fn new_reports_missing_file() {
        let result = FileSource::new("/nonexistent/pagewin.json");
        assert!(matches!(result, Err(InputError::FileNotFound { .. })));
    }
}
