//! Compression guard
//!
//! The index stores byte offsets into the raw file, so compressed input can
//! never be indexed. Before scanning starts, the lead bytes are sniffed on a
//! fresh, short-lived file handle; the scan stream itself is neither
//! consumed nor rewound.

use crate::core::error::{FaidxError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Compression container detected from a file's magic bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionFormat {
    /// Plain text (uncompressed)
    Plain,
    /// Gzip container (magic 1f 8b)
    Gzip,
    /// Bzip2 container (magic "BZh")
    Bzip2,
}

impl CompressionFormat {
    pub fn name(&self) -> &'static str {
        match self {
            CompressionFormat::Plain => "plain",
            CompressionFormat::Gzip => "gzip",
            CompressionFormat::Bzip2 => "bzip2",
        }
    }
}

/// Detect a compression container by magic bytes
///
/// Opens its own handle and reads at most 3 bytes; files shorter than a
/// magic sequence are plain.
pub fn detect_compression(path: &Path) -> std::io::Result<CompressionFormat> {
    let mut file = File::open(path)?;
    let mut magic = [0u8; 3];
    let bytes_read = file.read(&mut magic)?;

    if bytes_read >= 2 && magic[0] == 0x1f && magic[1] == 0x8b {
        return Ok(CompressionFormat::Gzip);
    }
    if bytes_read >= 3 && magic[0] == 0x42 && magic[1] == 0x5a && magic[2] == 0x68 {
        return Ok(CompressionFormat::Bzip2);
    }
    Ok(CompressionFormat::Plain)
}

/// Gate into the scanner: fail fast on compressed input
pub fn ensure_uncompressed(path: &Path) -> Result<()> {
    match detect_compression(path).map_err(|e| FaidxError::io(path, e))? {
        CompressionFormat::Plain => Ok(()),
        format => Err(FaidxError::UnsupportedCompressedInput {
            path: path.to_path_buf(),
            format: format.name(),
        }),
    }
}
