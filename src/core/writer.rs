//! Index writer
//!
//! Serializes a complete, validated record list to the on-disk index. The
//! writer runs at most once per file, after the scan finished cleanly; on
//! upstream failure the artifact is never touched.

use crate::core::error::{FaidxError, Result};
use crate::core::record::FaiRecord;
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Suffix appended to the input path to name its index
pub const INDEX_SUFFIX: &str = "fai";

/// Index path for an input file: the full input path with `.fai` appended
pub fn index_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(".");
    name.push(INDEX_SUFFIX);
    PathBuf::from(name)
}

/// Write every record as one tab-separated line, in file-appearance order
///
/// Overwrites any previous index in full.
pub fn write_index(records: &[FaiRecord], path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| FaidxError::io(path, e))?;
    let mut writer = BufWriter::with_capacity(64 * 1024, file);

    for record in records {
        writeln!(writer, "{}", record.to_line()).map_err(|e| FaidxError::io(path, e))?;
    }
    writer.flush().map_err(|e| FaidxError::io(path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_index_path_appends_suffix() {
        assert_eq!(
            index_path(Path::new("genome.fa")),
            PathBuf::from("genome.fa.fai")
        );
        // Full file name is kept, not the stem
        assert_eq!(
            index_path(Path::new("/data/hg38.fasta")),
            PathBuf::from("/data/hg38.fasta.fai")
        );
    }

    #[test]
    fn test_write_index_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("genome.fa.fai");
        let records = vec![
            FaiRecord {
                name: "seq1".to_string(),
                length: 160,
                offset: 6,
                line_bases: 60,
                line_width: 61,
            },
            FaiRecord {
                name: "seq2".to_string(),
                length: 10,
                offset: 175,
                line_bases: 10,
                line_width: 11,
            },
        ];

        write_index(&records, &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "seq1\t160\t6\t60\t61\nseq2\t10\t175\t10\t11\n");
    }

    #[test]
    fn test_empty_record_list_writes_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.fa.fai");
        write_index(&[], &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_rewrite_overwrites_in_full() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("genome.fa.fai");
        let long = vec![FaiRecord {
            name: "a_rather_long_sequence_name".to_string(),
            length: 1000,
            offset: 30,
            line_bases: 80,
            line_width: 81,
        }];
        let short = vec![FaiRecord {
            name: "s".to_string(),
            length: 4,
            offset: 3,
            line_bases: 4,
            line_width: 5,
        }];

        write_index(&long, &path).unwrap();
        write_index(&short, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "s\t4\t3\t4\t5\n");
    }
}
