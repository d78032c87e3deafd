use crate::codec::{Codec, Pull, RecordCodec};
use crate::cursor::RecordSource;
use crate::error::StreamError;
use crate::format::FileFormat;
use crate::signal::SignalBackends;
use crate::skip::SkipRegistry;

use std::path::{Path, PathBuf};

/// Walks the input files in order with at most one codec open at a time.
pub struct FileSequencer {
    paths: Vec<PathBuf>,
    index: usize,
    format: FileFormat,
    backends: SignalBackends,
    skips: SkipRegistry,
    codec: Option<Codec>,
}

impl FileSequencer {
    pub fn new(
        paths: Vec<PathBuf>,
        format: FileFormat,
        backends: SignalBackends,
        skips: SkipRegistry,
    ) -> Self {
        Self {
            paths,
            index: 0,
            format,
            backends,
            skips,
            codec: None,
        }
    }

    /// Open the first file that still has records after its skip.
    /// Returns `false` if no file has any.
    pub fn open_first(&mut self) -> Result<bool, StreamError> {
        self.close();
        self.position_from(0)
    }

    /// Close the active file and open the next one with records left.
    /// Returns `false` once the list is exhausted.
    pub fn advance(&mut self) -> Result<bool, StreamError> {
        self.close();
        self.position_from(self.index + 1)
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.codec.as_ref().map(|_| self.paths[self.index].as_path())
    }

    /// Release the active codec, if any.
    pub fn close(&mut self) {
        if let Some(mut codec) = self.codec.take() {
            log::debug!("closing `{}`", self.paths[self.index].display());
            codec.close();
        }
    }

    fn position_from(&mut self, start: usize) -> Result<bool, StreamError> {
        for i in start..self.paths.len() {
            self.index = i;
            let path = &self.paths[i];
            log::debug!("opening {} input `{}`", self.format, path.display());
            let mut codec = Codec::open(self.format, path, &self.backends)?;

            let skip = self.skips.skip_count(path);
            if skip_leading(&mut codec, path, skip)? {
                self.codec = Some(codec);
                return Ok(true);
            }
            log::debug!(
                "skip of {skip} exhausts `{}`; moving to the next file",
                path.display()
            );
            codec.close();
        }
        self.index = self.paths.len();
        Ok(false)
    }
}

/// Discard the first `n` records. Returns `false` if the file ended first.
fn skip_leading(codec: &mut Codec, path: &Path, n: u64) -> Result<bool, StreamError> {
    if n > 0 {
        log::debug!("skipping {n} leading records of `{}`", path.display());
    }
    for _ in 0..n {
        let pull = read_one(codec, path)?;
        if pull.is_end() {
            return Ok(false);
        }
    }
    Ok(true)
}

fn read_one(codec: &mut Codec, path: &Path) -> Result<Pull, StreamError> {
    match codec.read_one() {
        Ok(pull) => Ok(pull),
        Err(source) => Err(StreamError::Decode {
            path: path.to_path_buf(),
            record: codec.records_read(),
            source,
        }),
    }
}

impl RecordSource for FileSequencer {
    fn pull(&mut self) -> Result<Pull, StreamError> {
        match self.codec.as_mut() {
            Some(codec) => read_one(codec, &self.paths[self.index]),
            None => Ok(Pull::Exhausted),
        }
    }
}

impl Drop for FileSequencer {
    fn drop(&mut self) {
        self.close();
    }
}
