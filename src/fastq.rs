use crate::codec::{Pull, RecordCodec};
use crate::error::{DecodeError, FormatError};
use crate::record::{SeqRecord, TextRecord};
use crate::text::LineReader;

use std::io::{self, BufRead};
use std::path::Path;

/// Streaming FASTQ reader (plain/.gz).
///
/// Every record is exactly four lines: header, sequence, `+` separator,
/// quality. Lines are taken as they come; only a record cut short by the
/// end of input is an error.
pub struct FastqReader {
    lines: LineReader,
    records: u64,
}

impl FastqReader {
    /// Open from a file path. Auto-detect `.gz` by extension or magic bytes.
    pub fn from_path<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self {
            lines: LineReader::from_path(path.as_ref())?,
            records: 0,
        })
    }

    /// Wrap an arbitrary `BufRead` (stdin, etc.).
    pub fn from_bufread<R: BufRead + Send + 'static>(reader: R) -> Self {
        Self {
            lines: LineReader::from_bufread(reader),
            records: 0,
        }
    }

    /// Next record, or `None` at end of input.
    pub fn next_record(&mut self) -> Result<Option<TextRecord>, DecodeError> {
        // header: first non-empty line
        let mut line = String::with_capacity(128);
        let found = self
            .lines
            .read_nonblank(&mut line)
            .map_err(|e| DecodeError::io_err(e, self.lines.ctx()))?;
        if !found {
            return Ok(None);
        }
        let trimmed = line.trim();
        let header = trimmed.strip_prefix('@').unwrap_or(trimmed).trim().to_string();
        if header.is_empty() {
            return Err(DecodeError::fmt_err(FormatError::EmptyId, self.lines.ctx()));
        }

        let seq = self.read_field(&mut line)?;
        // separator line carries nothing we keep
        self.read_field(&mut line)?;
        let qual = self.read_field(&mut line)?;

        self.records += 1;
        Ok(Some(TextRecord {
            header,
            seq,
            qual: Some(qual),
        }))
    }

    fn read_field(&mut self, line: &mut String) -> Result<Vec<u8>, DecodeError> {
        let n = self
            .lines
            .read_line(line)
            .map_err(|e| DecodeError::io_err(e, self.lines.ctx()))?;
        if n == 0 {
            return Err(DecodeError::fmt_err(
                FormatError::UnexpectedEof,
                self.lines.ctx(),
            ));
        }
        Ok(line.trim().as_bytes().to_vec())
    }
}

impl RecordCodec for FastqReader {
    fn read_one(&mut self) -> Result<Pull, DecodeError> {
        Ok(match self.next_record()? {
            Some(rec) => Pull::Record(SeqRecord::Text(rec)),
            None => Pull::EndMarker,
        })
    }

    fn records_read(&self) -> u64 {
        self.records
    }

    fn close(&mut self) {
        self.lines = LineReader::from_bufread(io::empty());
    }
}

impl Iterator for FastqReader {
    type Item = Result<TextRecord, DecodeError>;
    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}
