//! Writing rendered reports to disk.

use crate::report::Report;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while writing a report.
#[derive(Debug, Error)]
pub enum WriteError {
    /// IO error.
    #[error("Failed to write {path}: {source}")]
    Io {
        /// Destination path.
        path: String,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

/// Write `text` to `path`, truncating any previous content.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_text(path: &Path, text: &str) -> Result<(), WriteError> {
    let io_error = |source| WriteError::Io {
        path: path.display().to_string(),
        source,
    };

    let mut file = File::create(path).map_err(io_error)?;
    file.write_all(text.as_bytes()).map_err(io_error)?;
    file.flush().map_err(io_error)?;

    info!(path = %path.display(), bytes = text.len(), "report written");
    Ok(())
}

impl Report {
    /// Render the report and write it to `path`, truncating any previous content.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn write_to(&self, path: &Path) -> Result<(), WriteError> {
        write_text(path, &self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_write_truncates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.txt");
        fs::write(&path, "a much longer previous report body\n").unwrap();

        write_text(&path, "short\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "short\n");
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent").join("report.txt");

        let err = write_text(&path, "text").unwrap_err();
        assert!(err.to_string().contains("report.txt"));
    }
}
