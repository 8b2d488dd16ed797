//! Core error types for preview generation
//!
//! Every failure in the pipeline is fatal to the current invocation. Each
//! variant maps to a distinct process exit status via [`PreviewError::exit_code`].

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T, E = PreviewError> = std::result::Result<T, E>;

/// Core error types for preview generation
#[derive(Error, Debug)]
pub enum PreviewError {
    #[error(
        "Could not determine which .md file to use.\n\
         Specify a markdown file explicitly, e.g.:\n  \
         mermview <path/to/file.md> <diagram_number>"
    )]
    NoDefaultFile,

    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("No ```mermaid``` code blocks found in {}", .path.display())]
    NoBlocks { path: PathBuf },

    #[error(
        "Requested diagram {requested} is out of range. This file contains {available} diagram(s)."
    )]
    OrdinalOutOfRange { requested: usize, available: usize },

    #[error("Unexpected argument '{argument}': a markdown file was already given with --file")]
    UnexpectedArgument { argument: String },

    #[error("Failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list markdown files in '{}': {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl PreviewError {
    /// Create a new file-not-found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a new no-blocks error
    pub fn no_blocks(path: impl Into<PathBuf>) -> Self {
        Self::NoBlocks { path: path.into() }
    }

    /// Create a new out-of-range error
    pub fn out_of_range(requested: usize, available: usize) -> Self {
        Self::OrdinalOutOfRange {
            requested,
            available,
        }
    }

    /// Create a new read error
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a new directory listing error
    pub fn read_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadDir {
            path: path.into(),
            source,
        }
    }

    /// Create a new write error
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PreviewError::NoBlocks { .. } => 2,
            PreviewError::OrdinalOutOfRange { .. } => 3,
            PreviewError::FileNotFound { .. } => 4,
            PreviewError::NoDefaultFile => 5,
            PreviewError::UnexpectedArgument { .. } => 6,
            PreviewError::Read { .. }
            | PreviewError::ReadDir { .. }
            | PreviewError::Write { .. }
            | PreviewError::IoError { .. } => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io;

    #[test]
    fn test_out_of_range_reports_available_count() {
        let error = PreviewError::out_of_range(5, 2);
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Requested diagram 5"));
        assert!(error_msg.contains("contains 2 diagram(s)"));
    }

    #[test]
    fn test_no_default_file_guidance() {
        let error_msg = PreviewError::NoDefaultFile.to_string();
        assert!(error_msg.contains("Could not determine which .md file to use"));
        assert!(error_msg.contains("Specify a markdown file explicitly"));
    }

    #[test]
    fn test_write_error_keeps_path() {
        let error = PreviewError::write(
            "out/diagram_1.html",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let error_msg = error.to_string();
        assert!(error_msg.contains("out/diagram_1.html"));
        assert!(error_msg.contains("denied"));
    }

    #[test]
    fn test_read_dir_error_names_directory() {
        let error = PreviewError::read_dir(
            "stale/home",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        let error_msg = error.to_string();
        assert!(error_msg.contains("stale/home"));
        assert!(error_msg.contains("No such file or directory"));
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_exit_codes_are_distinct() {
        let errors = [
            PreviewError::NoDefaultFile,
            PreviewError::file_not_found("a.md"),
            PreviewError::no_blocks("a.md"),
            PreviewError::out_of_range(5, 2),
            PreviewError::UnexpectedArgument {
                argument: "b.md".to_string(),
            },
        ];
        let codes: HashSet<i32> = errors.iter().map(PreviewError::exit_code).collect();
        assert_eq!(codes.len(), errors.len());
        assert!(!codes.contains(&0));
        assert!(!codes.contains(&1));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: PreviewError = io_err.into();
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("IO error"));
        assert_eq!(error.exit_code(), 1);
    }
}
