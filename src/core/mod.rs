//! Core indexing functionality
//!
//! This module contains the offset-tracking line scanner, the record
//! accumulator that enforces the fixed-width layout invariants, and the
//! index writer.

mod accumulator;
mod compression;
mod error;
mod faidx;
mod record;
pub mod scanner;
mod writer;

pub use accumulator::RecordAccumulator;
pub use compression::{detect_compression, ensure_uncompressed, CompressionFormat};
pub use error::{FaidxError, Result};
pub use faidx::{build_records, index_fasta, read_index};
pub use record::{FaiRecord, RecordBuilder};
pub use scanner::{LineScanner, ScannedLine, DEFAULT_CHUNK_SIZE};
pub use writer::{index_path, write_index, INDEX_SUFFIX};
