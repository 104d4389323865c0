//! Indexing pipeline driver
//!
//! One call per file: compression guard, then a single sequential pass of
//! scanner into accumulator, then exactly one writer invocation with the
//! complete record list. All-or-nothing: on any failure nothing is written
//! and any previous index is left untouched.
//!
//! Each call owns a fresh scanner and accumulator, so independent files may
//! be indexed from independent threads with no shared state.

use crate::core::accumulator::RecordAccumulator;
use crate::core::compression::ensure_uncompressed;
use crate::core::error::{FaidxError, Result};
use crate::core::record::FaiRecord;
use crate::core::scanner::LineScanner;
use crate::core::writer::{index_path, write_index};
use log::info;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Run the scan pipeline over any byte source
///
/// `path` is used only for error context; nothing is written. This is the
/// in-memory entry point the file-level driver and the tests share.
pub fn build_records<R: Read>(reader: R, path: &Path) -> Result<Vec<FaiRecord>> {
    let mut scanner = LineScanner::new(reader);
    let mut accumulator = RecordAccumulator::new(path);

    while let Some(line) = scanner.next_line() {
        let line = line.map_err(|e| FaidxError::io(path, e))?;
        accumulator.push_line(&line)?;
    }
    Ok(accumulator.finish())
}

/// Index one FASTA file and write `<path>.fai` next to it
///
/// Returns the records that were written, in file-appearance order.
pub fn index_fasta(path: &Path) -> Result<Vec<FaiRecord>> {
    ensure_uncompressed(path)?;

    let file = File::open(path).map_err(|e| FaidxError::io(path, e))?;
    let records = build_records(file, path)?;

    let out = index_path(path);
    write_index(&records, &out)?;
    info!(
        "{}: indexed {} sequences -> {}",
        path.display(),
        records.len(),
        out.display()
    );
    Ok(records)
}

/// Read an existing index file back into memory
pub fn read_index(path: &Path) -> Result<Vec<FaiRecord>> {
    let file = File::open(path).map_err(|e| FaidxError::io(path, e))?;
    let reader = BufReader::new(file);
    let mut records = Vec::new();

    for (line_number, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| FaidxError::io(path, e))?;
        if line.is_empty() {
            continue;
        }
        let record = FaiRecord::parse(&line).map_err(|message| FaidxError::InvalidIndexLine {
            path: path.to_path_buf(),
            line: line_number + 1,
            message,
        })?;
        records.push(record);
    }
    Ok(records)
}
