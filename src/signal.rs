//! Binary nanopore-signal inputs (FAST5, POD5).
//!
//! Container decoding lives in a [`SignalBackend`] registered per format.
//! A backend hands back an iterator of reads; the end of that iteration is
//! how a signal file reports exhaustion.

use crate::codec::{Pull, RecordCodec};
use crate::error::{DecodeError, FormatError};
use crate::format::FileFormat;
use crate::record::{SeqRecord, SignalRecord};

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::io;
use std::path::Path;
use std::sync::Arc;

pub type SignalError = Box<dyn Error + Send + Sync>;

/// Reads of one open signal file, in file order.
pub type SignalReads = Box<dyn Iterator<Item = Result<SignalRecord, SignalError>> + Send>;

pub trait SignalBackend: Send + Sync {
    fn open(&self, path: &Path) -> io::Result<SignalReads>;
}

impl<F> SignalBackend for F
where
    F: Fn(&Path) -> io::Result<SignalReads> + Send + Sync,
{
    fn open(&self, path: &Path) -> io::Result<SignalReads> {
        self(path)
    }
}

/// Signal backends by format.
#[derive(Clone, Default)]
pub struct SignalBackends {
    by_format: HashMap<FileFormat, Arc<dyn SignalBackend>>,
}

impl SignalBackends {
    pub fn register<B: SignalBackend + 'static>(&mut self, format: FileFormat, backend: B) {
        debug_assert!(format.is_signal(), "{format} is not a signal format");
        self.by_format.insert(format, Arc::new(backend));
    }

    pub fn get(&self, format: FileFormat) -> Option<&Arc<dyn SignalBackend>> {
        self.by_format.get(&format)
    }
}

impl fmt::Debug for SignalBackends {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.by_format.keys()).finish()
    }
}

/// Codec over one open signal file.
pub struct SignalReader {
    reads: Option<SignalReads>,
    records: u64,
}

impl SignalReader {
    pub fn open(backend: &dyn SignalBackend, path: &Path) -> io::Result<Self> {
        Ok(Self::from_reads(backend.open(path)?))
    }

    pub fn from_reads(reads: SignalReads) -> Self {
        Self {
            reads: Some(reads),
            records: 0,
        }
    }
}

impl RecordCodec for SignalReader {
    fn read_one(&mut self) -> Result<Pull, DecodeError> {
        let Some(reads) = self.reads.as_mut() else {
            return Ok(Pull::Exhausted);
        };
        match reads.next() {
            None => Ok(Pull::Exhausted),
            Some(Err(e)) => Err(DecodeError::Signal(e)),
            Some(Ok(rec)) if rec.read_id.is_empty() => Err(DecodeError::SignalFormat {
                source: FormatError::EmptyId,
                index: self.records,
            }),
            Some(Ok(rec)) => {
                self.records += 1;
                Ok(Pull::Record(SeqRecord::Signal(rec)))
            }
        }
    }

    fn records_read(&self) -> u64 {
        self.records
    }

    fn close(&mut self) {
        self.reads = None;
    }
}
