use crate::cursor::{Assembled, CursorState, StreamCursor};
use crate::error::{ConfigError, StreamError};
use crate::format::FileFormat;
use crate::policy::{StreamOptions, StreamPlan};
use crate::record::Packet;
use crate::sequencer::FileSequencer;
use crate::signal::{SignalBackend, SignalBackends};

use std::path::{Path, PathBuf};

/// Builder for [`PacketStream`]; needed only to register signal backends.
#[derive(Debug, Default)]
pub struct PacketStreamBuilder {
    paths: Vec<PathBuf>,
    opts: StreamOptions,
    backends: SignalBackends,
}

impl PacketStreamBuilder {
    pub fn options(mut self, opts: StreamOptions) -> Self {
        self.opts = opts;
        self
    }

    pub fn signal_backend<B: SignalBackend + 'static>(
        mut self,
        format: FileFormat,
        backend: B,
    ) -> Self {
        self.backends.register(format, backend);
        self
    }

    pub fn open(self) -> Result<PacketStream, StreamError> {
        PacketStream::open_with(self.paths, self.opts, self.backends)
    }
}

/// Pull-based stream of packets over an ordered list of input files.
///
/// Single consumer, single pass. The codec of the file being read is the
/// only resource held; it is released when the stream ends, on
/// [`PacketStream::close`], or on drop.
pub struct PacketStream {
    plan: StreamPlan,
    format: FileFormat,
    cursor: StreamCursor,
    files: FileSequencer,
}

impl PacketStream {
    pub fn builder<I, P>(paths: I) -> PacketStreamBuilder
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        PacketStreamBuilder {
            paths: paths.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Open a stream over text inputs (FASTA/FASTQ, plain or `.gz`).
    pub fn open<I, P>(paths: I, opts: StreamOptions) -> Result<Self, StreamError>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self::builder(paths).options(opts).open()
    }

    fn open_with(
        paths: Vec<PathBuf>,
        opts: StreamOptions,
        backends: SignalBackends,
    ) -> Result<Self, StreamError> {
        let plan = opts.validate()?;
        let format = detect_format(&paths)?;

        if format.is_signal() {
            if plan.policy.is_length_based() {
                return Err(ConfigError::LengthPolicyOnSignal {
                    format: format.name(),
                }
                .into());
            }
            if backends.get(format).is_none() {
                return Err(ConfigError::NoSignalBackend {
                    format: format.name(),
                }
                .into());
            }
        }

        let mut files = FileSequencer::new(paths, format, backends, opts.n_first_skip);
        let mut cursor = StreamCursor::new();
        if !files.open_first()? {
            cursor.exhaust();
        }

        Ok(Self {
            plan,
            format,
            cursor,
            files,
        })
    }

    /// Next packet, or `None` once every file is consumed or the probing
    /// cap is reached.
    pub fn next_packet(&mut self) -> Result<Option<Packet>, StreamError> {
        if self.cursor.state() == CursorState::StreamExhausted {
            return Ok(None);
        }
        if self.cursor.cap_reached(self.plan.probing_cap) {
            log::info!(
                "probing cap reached after {} records",
                self.cursor.emitted()
            );
            self.close();
            return Ok(None);
        }
        if self.cursor.state() == CursorState::FileBoundaryPending && !self.files.advance()? {
            self.close();
            return Ok(None);
        }

        loop {
            match self.cursor.assemble(&self.plan, &mut self.files)? {
                Assembled::Packet(p) => {
                    debug_assert!(!p.is_empty());
                    return Ok(Some(p));
                }
                Assembled::FileDrained => {
                    if !self.files.advance()? {
                        self.close();
                        return Ok(None);
                    }
                }
            }
        }
    }

    /// End the stream and release the open file.
    pub fn close(&mut self) {
        self.files.close();
        self.cursor.exhaust();
    }

    pub fn format(&self) -> FileFormat {
        self.format
    }

    pub fn plan(&self) -> &StreamPlan {
        &self.plan
    }

    /// Records handed out so far.
    pub fn records_emitted(&self) -> u64 {
        self.cursor.emitted()
    }

    /// File currently open, if any.
    pub fn current_path(&self) -> Option<&Path> {
        self.files.current_path()
    }
}

impl Iterator for PacketStream {
    type Item = Result<Packet, StreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_packet() {
            Ok(p) => p.map(Ok),
            Err(e) => {
                self.close();
                Some(Err(e))
            }
        }
    }
}

impl std::iter::FusedIterator for PacketStream {}

/// Category of the first path decides the codec; the rest must agree.
fn detect_format(paths: &[PathBuf]) -> Result<FileFormat, ConfigError> {
    let (first, rest) = paths.split_first().ok_or(ConfigError::NoInputFiles)?;
    let format = FileFormat::from_path(first)?;
    for path in rest {
        let found = FileFormat::from_path(path)?;
        if found != format {
            return Err(ConfigError::MixedFormats {
                path: path.clone(),
                expected: format.name(),
                found: found.name(),
            });
        }
    }
    Ok(format)
}
