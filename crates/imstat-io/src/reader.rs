//! Line reader and common I/O types

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

/// Errors that can occur while reading input
#[derive(Debug, Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to open file: {0}")]
    OpenFailed(String),

    #[error("Failed to read line {line}: {message}")]
    Read { line: usize, message: String },
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;

/// Read every line of a file
///
/// Line terminators (`\n` or `\r\n`) are stripped. A file ending in a
/// newline does not produce a trailing empty line.
pub fn read_lines(path: impl AsRef<Path>) -> IoResult<Vec<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(IoError::FileNotFound(path.display().to_string()));
    }

    let file = File::open(path)
        .map_err(|e| IoError::OpenFailed(format!("{}: {}", path.display(), e)))?;
    let lines = read_lines_from(BufReader::new(file))?;

    tracing::debug!(path = %path.display(), lines = lines.len(), "read input");
    Ok(lines)
}

/// Read every line from a buffered reader
pub fn read_lines_from<R: BufRead>(reader: R) -> IoResult<Vec<String>> {
    reader
        .lines()
        .enumerate()
        .map(|(idx, line)| {
            line.map_err(|e| IoError::Read {
                line: idx + 1,
                message: e.to_string(),
            })
        })
        .collect()
}
