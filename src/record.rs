use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A FASTA or FASTQ record. `qual` is present only for FASTQ input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRecord {
    /// Header line without the leading `>`/`@`.
    pub header: String,
    pub seq: Vec<u8>,
    pub qual: Option<Vec<u8>>,
}

impl TextRecord {
    /// First whitespace-delimited token of the header.
    pub fn id(&self) -> &str {
        self.header.split_whitespace().next().unwrap_or("")
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.seq.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
}

/// A raw-signal read decoded from a binary container.
///
/// The payload is whatever the signal backend produced; consumers downcast it.
#[derive(Clone)]
pub struct SignalRecord {
    pub read_id: String,
    pub payload: Arc<dyn Any + Send + Sync>,
}

impl SignalRecord {
    pub fn new<T: Any + Send + Sync>(read_id: impl Into<String>, payload: T) -> Self {
        Self {
            read_id: read_id.into(),
            payload: Arc::new(payload),
        }
    }

    pub fn payload<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }
}

impl fmt::Debug for SignalRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignalRecord")
            .field("read_id", &self.read_id)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub enum SeqRecord {
    Text(TextRecord),
    Signal(SignalRecord),
}

impl SeqRecord {
    pub fn id(&self) -> &str {
        match self {
            SeqRecord::Text(r) => r.id(),
            SeqRecord::Signal(r) => &r.read_id,
        }
    }

    /// Sequence length; `None` for signal reads, which carry no sequence.
    pub fn seq_len(&self) -> Option<usize> {
        match self {
            SeqRecord::Text(r) => Some(r.len()),
            SeqRecord::Signal(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextRecord> {
        match self {
            SeqRecord::Text(r) => Some(r),
            SeqRecord::Signal(_) => None,
        }
    }

    pub fn as_signal(&self) -> Option<&SignalRecord> {
        match self {
            SeqRecord::Signal(r) => Some(r),
            SeqRecord::Text(_) => None,
        }
    }
}

/// One packet: records in file order, never spanning two files.
pub type Packet = Vec<SeqRecord>;
