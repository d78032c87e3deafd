use crate::error::{ConfigError, DecodeError, StreamError};
use crate::fasta::FastaReader;
use crate::fastq::FastqReader;
use crate::format::FileFormat;
use crate::record::SeqRecord;
use crate::signal::{SignalBackends, SignalReader};

use std::path::Path;

/// Outcome of one read from a codec.
#[derive(Debug)]
pub enum Pull {
    Record(SeqRecord),
    /// Text input ran out: the read past the last record came back empty.
    EndMarker,
    /// Signal input ran out: the backend's read iteration ended.
    Exhausted,
}

impl Pull {
    /// True for either end-of-file signal.
    #[inline]
    pub fn is_end(&self) -> bool {
        !matches!(self, Pull::Record(_))
    }

    #[inline]
    pub fn is_end_marker(&self) -> bool {
        matches!(self, Pull::EndMarker)
    }
}

/// One decoder over one open file.
pub trait RecordCodec {
    /// Next record, or the end signal of this codec: text codecs answer
    /// `EndMarker`, signal codecs `Exhausted`.
    fn read_one(&mut self) -> Result<Pull, DecodeError>;
    /// Records decoded so far from this file.
    fn records_read(&self) -> u64;
    /// Release the underlying file. Later reads report end of input.
    fn close(&mut self);
}

pub enum Codec {
    Fasta(FastaReader),
    Fastq(FastqReader),
    Fast5(SignalReader),
    Pod5(SignalReader),
}

impl Codec {
    pub fn open(
        format: FileFormat,
        path: &Path,
        backends: &SignalBackends,
    ) -> Result<Self, StreamError> {
        let open_err = |source| StreamError::Open {
            path: path.to_path_buf(),
            source,
        };
        Ok(match format {
            FileFormat::Fasta => Codec::Fasta(FastaReader::from_path(path).map_err(open_err)?),
            FileFormat::Fastq => Codec::Fastq(FastqReader::from_path(path).map_err(open_err)?),
            FileFormat::Fast5 | FileFormat::Pod5 => {
                let backend = backends.get(format).ok_or(ConfigError::NoSignalBackend {
                    format: format.name(),
                })?;
                let rdr = SignalReader::open(backend.as_ref(), path).map_err(open_err)?;
                if format == FileFormat::Fast5 {
                    Codec::Fast5(rdr)
                } else {
                    Codec::Pod5(rdr)
                }
            }
        })
    }

    pub fn format(&self) -> FileFormat {
        match self {
            Codec::Fasta(_) => FileFormat::Fasta,
            Codec::Fastq(_) => FileFormat::Fastq,
            Codec::Fast5(_) => FileFormat::Fast5,
            Codec::Pod5(_) => FileFormat::Pod5,
        }
    }

    fn inner(&mut self) -> &mut dyn RecordCodec {
        match self {
            Codec::Fasta(r) => r,
            Codec::Fastq(r) => r,
            Codec::Fast5(r) | Codec::Pod5(r) => r,
        }
    }

    fn inner_ref(&self) -> &dyn RecordCodec {
        match self {
            Codec::Fasta(r) => r,
            Codec::Fastq(r) => r,
            Codec::Fast5(r) | Codec::Pod5(r) => r,
        }
    }
}

impl RecordCodec for Codec {
    fn read_one(&mut self) -> Result<Pull, DecodeError> {
        self.inner().read_one()
    }

    fn records_read(&self) -> u64 {
        self.inner_ref().records_read()
    }

    fn close(&mut self) {
        self.inner().close()
    }
}
