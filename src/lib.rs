//! FastFaidx - High-performance FASTA random-access indexing
//!
//! Builds samtools-compatible `.fai` side-indexes in a single streaming
//! pass, so any later reader can seek directly to an arbitrary subsequence
//! without scanning the file.
//!
//! # Features
//!
//! - Bounded memory: chunked scanning independent of file size
//! - Exact byte-offset bookkeeping for O(1) random access
//! - Strict layout validation: the whole file indexes, or nothing is written
//! - Parallel indexing of multiple files with rayon
//!
//! # Example
//!
//! ```ignore
//! use fast_faidx::{index_fasta, read_index};
//!
//! // Build genome.fa.fai
//! let records = index_fasta(Path::new("genome.fa"))?;
//!
//! // O(1) offset of any base (0-based)
//! let byte = records[0].offset_of(120).unwrap();
//! ```

pub mod core;

// Re-export commonly used types
pub use core::{
    build_records, detect_compression, ensure_uncompressed, index_fasta, index_path, read_index,
    write_index, CompressionFormat, FaiRecord, FaidxError, LineScanner, RecordAccumulator,
    RecordBuilder, Result, ScannedLine, DEFAULT_CHUNK_SIZE, INDEX_SUFFIX,
};
