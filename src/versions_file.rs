use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::entry::VersionEntry;
use crate::error::{BatchTagError, Result};

/// The versions file: a fixed-size header followed by one release entry per
/// line, `<product>-<major>.<minor>.<patch> <commit>`.
///
/// Loading reads the raw lines and verifies the header is present; entry
/// parsing happens lazily via [VersionsFile::entries] so that a malformed
/// line aborts the batch exactly at its position. Entries before it have
/// already been handed out, entries after it never are.
#[derive(Debug)]
pub struct VersionsFile {
    lines: Vec<String>,
    header_lines: usize,
}

impl VersionsFile {
    /// Read the versions file at `path`, discarding the first `header_lines`
    /// lines unconditionally.
    pub fn load(path: impl AsRef<Path>, header_lines: usize) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BatchTagError::InputNotFound(path.to_path_buf())
            } else {
                BatchTagError::Io(e)
            }
        })?;

        let lines = BufReader::new(file)
            .lines()
            .collect::<std::io::Result<Vec<String>>>()?;

        if lines.len() < header_lines {
            return Err(BatchTagError::InputTooShort {
                found: lines.len(),
                expected: header_lines,
            });
        }

        Ok(VersionsFile {
            lines,
            header_lines,
        })
    }

    /// Parsed entries in file order, one parse attempt per remaining line.
    /// Errors carry the 1-based file line number.
    pub fn entries(&self) -> impl Iterator<Item = Result<VersionEntry>> + '_ {
        self.lines
            .iter()
            .enumerate()
            .skip(self.header_lines)
            .map(|(idx, line)| VersionEntry::parse(line, idx + 1))
    }

    /// Number of lines after the header.
    pub fn entry_line_count(&self) -> usize {
        self.lines.len() - self.header_lines
    }
}
