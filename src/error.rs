//! Error types for wordlist processing

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Exit status for a user interrupt (128 + SIGINT)
pub const EXIT_INTERRUPTED: i32 = 130;

/// Errors raised while reading, filtering or writing wordlists.
#[derive(Error, Debug)]
pub enum CrunchError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid UTF-8 in {} at line {line}", path.display())]
    Decode { path: PathBuf, line: usize },

    #[error("Failed to open zip archive {}: {source}", path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("Entry '{entry}' not found in zip archive {}", path.display())]
    EntryNotFound { path: PathBuf, entry: String },

    #[error("Invalid regex pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Failed to write {target}: {source}")]
    Write {
        target: String,
        #[source]
        source: io::Error,
    },

    #[error("Operation interrupted by user")]
    Interrupted,

    #[error("Failed to install interrupt handler: {0}")]
    Signal(#[from] ctrlc::Error),
}

pub type Result<T> = std::result::Result<T, CrunchError>;

impl CrunchError {
    /// Wrap an I/O error raised while reading `path`
    pub fn read(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            io::ErrorKind::Interrupted => Self::Interrupted,
            _ => Self::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }

    /// Wrap an I/O error raised while writing to `target`
    pub fn write(target: impl Into<String>, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::Interrupted {
            return Self::Interrupted;
        }
        Self::Write {
            target: target.into(),
            source,
        }
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Interrupted => EXIT_INTERRUPTED,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_maps_error_kinds() {
        let path = Path::new("missing.txt");

        let err = CrunchError::read(path, io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, CrunchError::NotFound(_)));

        let err = CrunchError::read(path, io::Error::from(io::ErrorKind::Interrupted));
        assert!(matches!(err, CrunchError::Interrupted));

        let err = CrunchError::read(path, io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, CrunchError::Io { .. }));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(CrunchError::NotFound(PathBuf::from("x")).exit_code(), 1);
        assert_eq!(CrunchError::Interrupted.exit_code(), EXIT_INTERRUPTED);
    }

    #[test]
    fn test_not_found_message() {
        let err = CrunchError::NotFound(PathBuf::from("words.txt"));
        assert_eq!(err.to_string(), "File not found: words.txt");
    }
}
