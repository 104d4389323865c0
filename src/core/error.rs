//! Error types for FastFaidx
//!
//! Defines all error types used throughout the library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for FastFaidx operations
///
/// Every variant that reports a structural problem carries the path of the
/// offending FASTA file and, where one exists, the offending sequence name.
/// No error is retried: a partially valid index is worse than no index, so
/// the first violation aborts the whole-file operation before anything is
/// written.
#[derive(Debug, Error)]
pub enum FaidxError {
    /// Input matches a compressed-container signature; indexing requires
    /// uncompressed input because byte offsets must address the raw file.
    #[error("{path}: input is compressed ({format}); indexing of compressed files is not supported", path = .path.display())]
    UnsupportedCompressedInput {
        path: PathBuf,
        /// Human-readable name of the detected container ("gzip", "bzip2")
        format: &'static str,
    },

    /// The same sequence name introduced two records in one file
    #[error("{path}: duplicate sequence name '{name}'", path = .path.display())]
    DuplicateSequenceName { path: PathBuf, name: String },

    /// A data line followed a record that already saw its final (short or
    /// blank-terminated) line, breaking the fixed-width layout
    #[error("{path}: different line length in '{name}'", path = .path.display())]
    InconsistentLineLength { path: PathBuf, name: String },

    /// A data line appeared before any header line
    #[error("{path}: sequence data found before any '>' header", path = .path.display())]
    MissingHeader { path: PathBuf },

    /// A line of an existing index file could not be parsed
    #[error("{path}: invalid index line {line}: {message}", path = .path.display())]
    InvalidIndexLine {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// Underlying read/write failure, propagated unchanged with path context
    #[error("{path}: I/O error: {source}", path = .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FaidxError {
    /// Attach path context to an I/O error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FaidxError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for FastFaidx operations
pub type Result<T> = std::result::Result<T, FaidxError>;
