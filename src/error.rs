use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IoContext {
    pub byte_pos: u64,
    pub line_num: u64,
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("expected header '>' at start of record")]
    MissingHeader,
    #[error("unexpected EOF inside record")]
    UnexpectedEof,
    #[error("record header carries no identifier")]
    EmptyId,
}

/// Fault raised by a single codec while decoding one file.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("I/O error at {ctx:?}: {source}")]
    Io {
        #[source]
        source: io::Error,
        ctx: IoContext,
    },
    #[error("format error at {ctx:?}: {source}")]
    Format {
        #[source]
        source: FormatError,
        ctx: IoContext,
    },
    #[error("format error in signal read #{index}: {source}")]
    SignalFormat {
        #[source]
        source: FormatError,
        index: u64,
    },
    #[error("signal decoder error: {0}")]
    Signal(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl DecodeError {
    pub(crate) fn io_err(source: io::Error, ctx: IoContext) -> Self {
        Self::Io { source, ctx }
    }
    pub(crate) fn fmt_err(source: FormatError, ctx: IoContext) -> Self {
        Self::Format { source, ctx }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("`{name}` must be a positive integer. Received `{name}`=`{value}`")]
    NotPositive { name: &'static str, value: u64 },
    #[error("no input files given")]
    NoInputFiles,
    #[error("invalid file type (extension): `{found}`. Allowed types: {}", .allowed.join(", "))]
    UnsupportedExtension {
        found: String,
        allowed: Vec<&'static str>,
    },
    #[error("input `{}` is {found}, but the stream was opened as {expected}", .path.display())]
    MixedFormats {
        path: PathBuf,
        expected: &'static str,
        found: &'static str,
    },
    #[error("`sum_seq_len` packets need sequence lengths, which {format} records do not have. Allowed modes for {format}: `seq_count`")]
    LengthPolicyOnSignal { format: &'static str },
    #[error("no signal decoder registered for {format}")]
    NoSignalBackend { format: &'static str },
}

/// Caller-facing error of a packet stream.
#[derive(Debug, Error)]
pub enum StreamError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("cannot open `{}`: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("`{}`, record #{record}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        record: u64,
        #[source]
        source: DecodeError,
    },
}
