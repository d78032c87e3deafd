use crate::error::IoContext;
use crate::util::{has_gz_suffix, looks_like_gzip, open_file};

#[cfg(feature = "gzip")]
use flate2::read::MultiGzDecoder;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Line cursor shared by the FASTA and FASTQ codecs.
pub(crate) struct LineReader {
    rdr: Box<dyn BufRead + Send>,
    line_num: u64,
    byte_pos: u64,
    // A line read ahead of its record (next FASTA header).
    pending: Option<String>,
}

impl LineReader {
    /// Open a text file. Detect `.gz` by extension or magic bytes.
    pub(crate) fn from_path(path: &Path) -> io::Result<Self> {
        let f = open_file(path)?;
        let is_gz = has_gz_suffix(path) || looks_like_gzip(&f).unwrap_or(false);

        let rdr: Box<dyn BufRead + Send> = if is_gz {
            #[cfg(feature = "gzip")]
            {
                let dec = MultiGzDecoder::new(f);
                Box::new(BufReader::with_capacity(256 * 1024, dec))
            }
            #[cfg(not(feature = "gzip"))]
            {
                return Err(io::Error::new(
                    io::ErrorKind::Unsupported,
                    "gzip input requires the `gzip` feature",
                ));
            }
        } else {
            #[cfg(feature = "mmap")]
            {
                use memmap2::Mmap;
                use std::io::Cursor;
                // Own the Mmap inside Cursor to avoid self-ref problems
                let mmap = unsafe { Mmap::map(&f) }?;
                Box::new(BufReader::with_capacity(512 * 1024, Cursor::new(mmap)))
            }
            #[cfg(not(feature = "mmap"))]
            {
                Box::new(BufReader::with_capacity(256 * 1024, f))
            }
        };
        Ok(Self::from_bufread(rdr))
    }

    pub(crate) fn from_bufread<R: BufRead + Send + 'static>(reader: R) -> Self {
        Self {
            rdr: Box::new(reader),
            line_num: 0,
            byte_pos: 0,
            pending: None,
        }
    }

    /// Read one line into `buf` without its line terminator.
    /// Returns 0 at end of input.
    pub(crate) fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        buf.clear();
        if let Some(line) = self.pending.take() {
            let n = line.len() + 1;
            buf.push_str(&line);
            return Ok(n);
        }
        let n = self.rdr.read_line(buf)?;
        if n > 0 {
            self.line_num += 1;
            self.byte_pos += n as u64;
            if buf.ends_with('\n') {
                buf.pop();
            }
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(n)
    }

    /// Read the next line that is not blank after trimming.
    /// Returns `false` at end of input.
    pub(crate) fn read_nonblank(&mut self, buf: &mut String) -> io::Result<bool> {
        loop {
            if self.read_line(buf)? == 0 {
                return Ok(false);
            }
            if !buf.trim().is_empty() {
                return Ok(true);
            }
        }
    }

    /// Hand `line` back so the next `read_line` returns it.
    pub(crate) fn unread(&mut self, line: String) {
        self.pending = Some(line);
    }

    #[inline]
    pub(crate) fn ctx(&self) -> IoContext {
        IoContext {
            byte_pos: self.byte_pos,
            line_num: self.line_num,
        }
    }
}
