//! Offset-tracking line scanner
//!
//! Streams a byte source in bounded-size chunks and reassembles logical
//! lines across chunk boundaries, reporting each line together with its
//! exact starting and ending byte offset in the source. The offsets are
//! what makes the index arithmetic possible, so the scanner is the only
//! place in the pipeline that touches raw bytes.
//!
//! The scanner classifies nothing beyond header/blank and performs no
//! validation; structural rules live in the accumulator.

use memchr::memchr;
use std::io::{self, Read};

/// Default chunk size for scanning (128KB)
pub const DEFAULT_CHUNK_SIZE: usize = 128 * 1024;

/// One logical line of the input, with its absolute byte span
///
/// `bytes` holds the line content without the trailing `\n`; a `\r` before
/// the terminator is kept, since it belongs to the raw byte span and is
/// stripped as whitespace wherever base counts matter. `end` is exclusive
/// and includes the terminator byte when one was present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedLine {
    /// Line content, terminator stripped
    pub bytes: Vec<u8>,
    /// Absolute offset of the line's first byte
    pub start: u64,
    /// Absolute offset just past the line's terminator (or EOF)
    pub end: u64,
}

impl ScannedLine {
    /// True iff the line introduces a new record
    pub fn is_header(&self) -> bool {
        self.bytes.first() == Some(&b'>')
    }

    /// True iff the line is empty after trimming all whitespace
    pub fn is_blank(&self) -> bool {
        self.bytes.iter().all(u8::is_ascii_whitespace)
    }

    /// Number of non-whitespace bytes on the line
    pub fn stripped_len(&self) -> u64 {
        self.bytes.iter().filter(|b| !b.is_ascii_whitespace()).count() as u64
    }

    /// Raw byte span of the line including its terminator
    pub fn width(&self) -> u64 {
        self.end - self.start
    }
}

/// Lazy, finite, non-restartable line stream over any `Read` source
///
/// Memory use is bounded by one chunk buffer plus one in-flight line,
/// independent of input size.
pub struct LineScanner<R: Read> {
    reader: R,
    chunk: Vec<u8>,
    chunk_len: usize,
    chunk_pos: usize,
    /// Partial line carried across chunk boundaries
    partial: Vec<u8>,
    /// Absolute offset of the next unconsumed byte
    next_offset: u64,
    /// Absolute offset where the line currently being assembled started
    line_start: u64,
    done: bool,
}

impl<R: Read> LineScanner<R> {
    /// Create a scanner with the default chunk size
    pub fn new(reader: R) -> Self {
        Self::with_chunk_size(reader, DEFAULT_CHUNK_SIZE)
    }

    /// Create a scanner reading `chunk_size` bytes per I/O call
    pub fn with_chunk_size(reader: R, chunk_size: usize) -> Self {
        Self {
            reader,
            chunk: vec![0u8; chunk_size.max(1)],
            chunk_len: 0,
            chunk_pos: 0,
            partial: Vec::with_capacity(256),
            next_offset: 0,
            line_start: 0,
            done: false,
        }
    }

    /// Read the next line, or `None` at end of input
    ///
    /// I/O errors are surfaced unchanged; after an error or EOF the scanner
    /// yields nothing further.
    pub fn next_line(&mut self) -> Option<io::Result<ScannedLine>> {
        if self.done {
            return None;
        }
        loop {
            if self.chunk_pos >= self.chunk_len {
                match self.reader.read(&mut self.chunk) {
                    Ok(0) => {
                        self.done = true;
                        if self.partial.is_empty() {
                            return None;
                        }
                        // Final line without a terminator
                        let bytes = std::mem::take(&mut self.partial);
                        return Some(Ok(ScannedLine {
                            bytes,
                            start: self.line_start,
                            end: self.next_offset,
                        }));
                    }
                    Ok(n) => {
                        self.chunk_len = n;
                        self.chunk_pos = 0;
                    }
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => {
                        self.done = true;
                        return Some(Err(e));
                    }
                }
                continue;
            }

            let rest = &self.chunk[self.chunk_pos..self.chunk_len];
            match memchr(b'\n', rest) {
                Some(i) => {
                    self.partial.extend_from_slice(&rest[..i]);
                    self.chunk_pos += i + 1;
                    self.next_offset += (i + 1) as u64;
                    let bytes = std::mem::take(&mut self.partial);
                    let line = ScannedLine {
                        bytes,
                        start: self.line_start,
                        end: self.next_offset,
                    };
                    self.line_start = self.next_offset;
                    return Some(Ok(line));
                }
                None => {
                    self.partial.extend_from_slice(rest);
                    self.next_offset += rest.len() as u64;
                    self.chunk_pos = self.chunk_len;
                }
            }
        }
    }
}

impl<R: Read> Iterator for LineScanner<R> {
    type Item = io::Result<ScannedLine>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line()
    }
}
