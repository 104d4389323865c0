//! Index records
//!
//! `FaiRecord` is one line of a samtools-style `.fai` index: the metadata
//! needed to seek to any base of one named sequence in O(1). Records are
//! immutable once built; the mutable in-progress form is `RecordBuilder`,
//! which only the accumulator drives.
//!
//! # Index line format
//!
//! Five tab-separated fields, no header row:
//!
//! ```text
//! NAME  LENGTH  OFFSET  LINEBASES  LINEWIDTH
//! ```
//!
//! - `NAME`: sequence name (first word after `>`)
//! - `LENGTH`: total bases in the sequence
//! - `OFFSET`: byte offset of the first base, just past the header line
//! - `LINEBASES`: bases per full data line
//! - `LINEWIDTH`: raw bytes per full data line including the terminator

/// One closed entry of a FASTA index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaiRecord {
    /// Sequence name (text after `>` up to the first whitespace)
    pub name: String,
    /// Total sequence length in bases
    pub length: u64,
    /// Absolute byte offset of the first sequence byte
    pub offset: u64,
    /// Bases per full data line
    pub line_bases: u64,
    /// Bytes per full data line, terminator included
    pub line_width: u64,
}

impl FaiRecord {
    /// Serialize as one index line (no terminator)
    pub fn to_line(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}",
            self.name, self.length, self.offset, self.line_bases, self.line_width
        )
    }

    /// Parse one index line
    ///
    /// Returns a message describing the problem on failure; the caller adds
    /// file and line-number context.
    pub fn parse(line: &str) -> Result<Self, String> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 5 {
            return Err(format!("expected 5 tab-separated fields, got {}", fields.len()));
        }

        let parse_num = |field: &str, value: &str| -> Result<u64, String> {
            value
                .parse::<u64>()
                .map_err(|_| format!("invalid {} value '{}'", field, value))
        };

        Ok(Self {
            name: fields[0].to_string(),
            length: parse_num("LENGTH", fields[1])?,
            offset: parse_num("OFFSET", fields[2])?,
            line_bases: parse_num("LINEBASES", fields[3])?,
            line_width: parse_num("LINEWIDTH", fields[4])?,
        })
    }

    /// Absolute byte offset of the base at `position` (0-based)
    ///
    /// Accounts for line wrapping: full lines occupy `line_width` bytes but
    /// carry `line_bases` bases. Returns `None` when `position` falls outside
    /// the sequence.
    pub fn offset_of(&self, position: u64) -> Option<u64> {
        if position >= self.length || self.line_bases == 0 {
            return None;
        }
        Some(
            self.offset
                + (position / self.line_bases) * self.line_width
                + (position % self.line_bases),
        )
    }
}

/// Mutable in-progress record, finalized into an immutable [`FaiRecord`]
///
/// A builder is opened when a header line is seen and closed when the next
/// header or end of input arrives; a half-built record can therefore never
/// reach the index writer.
#[derive(Debug)]
pub struct RecordBuilder {
    name: String,
    offset: u64,
    length: u64,
    line_bases: Option<u64>,
    line_width: Option<u64>,
}

impl RecordBuilder {
    /// Open a record for `name` whose data starts at `offset`
    pub fn new(name: impl Into<String>, offset: u64) -> Self {
        Self {
            name: name.into(),
            offset,
            length: 0,
            line_bases: None,
            line_width: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bases per full line, once the first data line has fixed it
    pub fn line_bases(&self) -> Option<u64> {
        self.line_bases
    }

    /// Record the first data line, which establishes the line geometry
    pub fn record_first_line(&mut self, bases: u64, width: u64) {
        self.length += bases;
        self.line_bases = Some(bases);
        self.line_width = Some(width);
    }

    /// Accumulate bases from a subsequent data line
    pub fn add_bases(&mut self, bases: u64) {
        self.length += bases;
    }

    /// Close into an immutable record
    ///
    /// A record that never saw a data line reports zero geometry.
    pub fn finish(self) -> FaiRecord {
        FaiRecord {
            name: self.name,
            length: self.length,
            offset: self.offset,
            line_bases: self.line_bases.unwrap_or(0),
            line_width: self.line_width.unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_line_round_trip() {
        let rec = FaiRecord {
            name: "chr1".to_string(),
            length: 248956422,
            offset: 112,
            line_bases: 70,
            line_width: 71,
        };
        let line = rec.to_line();
        assert_eq!(line, "chr1\t248956422\t112\t70\t71");
        assert_eq!(FaiRecord::parse(&line).unwrap(), rec);
    }

    #[test]
    fn test_parse_rejects_wrong_field_count() {
        let err = FaiRecord::parse("chr1\t100\t6").unwrap_err();
        assert!(err.contains("5"));
    }

    #[test]
    fn test_parse_rejects_bad_number() {
        let err = FaiRecord::parse("chr1\tabc\t6\t70\t71").unwrap_err();
        assert!(err.contains("LENGTH"));
        assert!(err.contains("abc"));
    }

    #[test]
    fn test_offset_of_walks_wrapped_lines() {
        let rec = FaiRecord {
            name: "test".to_string(),
            length: 100,
            offset: 10,
            line_bases: 20,
            line_width: 21,
        };
        // First base of the first line
        assert_eq!(rec.offset_of(0), Some(10));
        // Last base of the first line
        assert_eq!(rec.offset_of(19), Some(29));
        // First base of the second line, past one terminator
        assert_eq!(rec.offset_of(20), Some(31));
        // First base of the third line
        assert_eq!(rec.offset_of(40), Some(52));
        // Out of range
        assert_eq!(rec.offset_of(100), None);
    }

    #[test]
    fn test_offset_of_empty_record() {
        let rec = FaiRecord {
            name: "empty".to_string(),
            length: 0,
            offset: 6,
            line_bases: 0,
            line_width: 0,
        };
        assert_eq!(rec.offset_of(0), None);
    }

    #[test]
    fn test_builder_fixes_geometry_on_first_line() {
        let mut builder = RecordBuilder::new("chr1", 6);
        builder.record_first_line(60, 61);
        builder.add_bases(60);
        builder.add_bases(40);
        let rec = builder.finish();

        assert_eq!(rec.length, 160);
        assert_eq!(rec.offset, 6);
        assert_eq!(rec.line_bases, 60);
        assert_eq!(rec.line_width, 61);
    }

    #[test]
    fn test_builder_without_data_lines() {
        let rec = RecordBuilder::new("empty", 7).finish();
        assert_eq!(rec.length, 0);
        assert_eq!(rec.line_bases, 0);
        assert_eq!(rec.line_width, 0);
    }
}
