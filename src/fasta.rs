use crate::codec::{Pull, RecordCodec};
use crate::error::{DecodeError, FormatError};
use crate::record::{SeqRecord, TextRecord};
use crate::text::LineReader;

use std::io::{self, BufRead};
use std::path::Path;

/// Streaming FASTA reader (plain/.gz).
///
/// A `>` line starts a record; the trimmed body lines up to the next header,
/// a blank line, or end of input form its sequence.
pub struct FastaReader {
    lines: LineReader,
    records: u64,
}

impl FastaReader {
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
        let mut line = String::with_capacity(128);
        let found = self
            .lines
            .read_nonblank(&mut line)
            .map_err(|e| DecodeError::io_err(e, self.lines.ctx()))?;
        if !found {
            return Ok(None);
        }

        let header = match line.trim().strip_prefix('>') {
            Some(h) => h.trim().to_string(),
            None => {
                return Err(DecodeError::fmt_err(
                    FormatError::MissingHeader,
                    self.lines.ctx(),
                ));
            }
        };
        if header.is_empty() {
            return Err(DecodeError::fmt_err(FormatError::EmptyId, self.lines.ctx()));
        }

        let mut seq = Vec::<u8>::with_capacity(1024);
        loop {
            let n = self
                .lines
                .read_line(&mut line)
                .map_err(|e| DecodeError::io_err(e, self.lines.ctx()))?;
            if n == 0 {
                break;
            }
            let body = line.trim();
            if body.is_empty() {
                break;
            }
            if body.starts_with('>') {
                self.lines.unread(std::mem::take(&mut line));
                break;
            }
            seq.extend_from_slice(body.as_bytes());
        }

        self.records += 1;
        Ok(Some(TextRecord {
            header,
            seq,
            qual: None,
        }))
    }
}

impl RecordCodec for FastaReader {
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

impl Iterator for FastaReader {
    type Item = Result<TextRecord, DecodeError>;
    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}
