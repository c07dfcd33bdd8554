//! Dataset files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DataError, Result};
use crate::sources::DatasetSource;

/// A dataset stored in a TOML file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for `path`; the file is read lazily
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the dataset file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSource for FileSource {
    fn read(&self) -> Result<String> {
        if !self.path.exists() {
            return Err(DataError::FileNotFound(self.path.display().to_string()));
        }
        Ok(fs::read_to_string(&self.path)?)
    }

    fn origin(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file() {
        let source = FileSource::new("/nonexistent/audit.toml");
        assert!(matches!(source.read(), Err(DataError::FileNotFound(_))));
        assert_eq!(source.origin(), "/nonexistent/audit.toml");
    }
}
