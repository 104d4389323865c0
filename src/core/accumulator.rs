//! Record accumulator
//!
//! Consumes the scanner's line stream sequentially and produces the ordered
//! list of closed records, or fails on the first structural violation. All
//! layout invariants live here:
//!
//! - sequence names are unique per file (case-sensitive);
//! - every data line of a record matches the first line's base count,
//!   except for one legitimately shorter final line;
//! - once a short or blank line has been seen for a record, no further data
//!   line may follow it (`expect_end`);
//! - data before any header is an error.
//!
//! The "accept one short line, then forbid more" rule is the minimal check
//! that confirms uniform wrapping while tolerating the final short line of
//! each record, which is exactly what keeps the O(1) offset arithmetic
//! valid for every non-final position.
//!
//! Failures are plain error values; the pipeline driver halts on the first
//! one and discards buffered work, so a closed-but-invalid record can never
//! reach the writer.

use crate::core::error::{FaidxError, Result};
use crate::core::record::{FaiRecord, RecordBuilder};
use crate::core::scanner::ScannedLine;
use log::debug;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Per-file scan state, owned by exactly one indexing pipeline
pub struct RecordAccumulator {
    path: PathBuf,
    current: Option<RecordBuilder>,
    seen_names: HashSet<String>,
    /// True once a short or blank line marked the current record's end
    expect_end: bool,
    first_data_line: bool,
    records: Vec<FaiRecord>,
}

impl RecordAccumulator {
    /// Fresh state for one file; `path` is carried into error reports
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            current: None,
            seen_names: HashSet::new(),
            expect_end: false,
            first_data_line: false,
            records: Vec::new(),
        }
    }

    /// Consume one scanned line
    pub fn push_line(&mut self, line: &ScannedLine) -> Result<()> {
        if line.is_blank() {
            // A blank line may only sit at the end of a record's data
            if self.current.is_some() {
                self.expect_end = true;
            }
            return Ok(());
        }

        if line.is_header() {
            self.close_current();
            let name = header_name(line);
            if !self.seen_names.insert(name.clone()) {
                return Err(FaidxError::DuplicateSequenceName {
                    path: self.path.clone(),
                    name,
                });
            }
            // Sequence data starts right past the header's terminator
            self.current = Some(RecordBuilder::new(name, line.end));
            self.first_data_line = true;
            self.expect_end = false;
            return Ok(());
        }

        // Data line
        let Some(builder) = self.current.as_mut() else {
            return Err(FaidxError::MissingHeader {
                path: self.path.clone(),
            });
        };
        if self.expect_end {
            return Err(FaidxError::InconsistentLineLength {
                path: self.path.clone(),
                name: builder.name().to_string(),
            });
        }

        let bases = line.stripped_len();
        if self.first_data_line {
            builder.record_first_line(bases, line.width());
            self.first_data_line = false;
        } else {
            builder.add_bases(bases);
            if builder.line_bases() != Some(bases) {
                // Accepted as the final, shorter line; anything after it fails
                self.expect_end = true;
            }
        }
        Ok(())
    }

    /// End of stream: close any open record and return the result
    ///
    /// This is the normal termination path; closing at EOF is unconditional.
    pub fn finish(mut self) -> Vec<FaiRecord> {
        self.close_current();
        self.records
    }

    fn close_current(&mut self) {
        if let Some(builder) = self.current.take() {
            let record = builder.finish();
            debug!(
                "{}: closed record '{}' ({} bases)",
                self.path.display(),
                record.name,
                record.length
            );
            self.records.push(record);
        }
    }
}

/// Name token of a header line: text after `>` up to the first whitespace
fn header_name(line: &ScannedLine) -> String {
    let after = &line.bytes[1..];
    let end = after
        .iter()
        .position(|b| b.is_ascii_whitespace())
        .unwrap_or(after.len());
    String::from_utf8_lossy(&after[..end]).into_owned()
}
