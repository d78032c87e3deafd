//! Streams sequencing inputs as bounded-size packets of records.
//!
//! - FASTA/FASTQ, plain and `.gz` (auto-detect); FAST5/POD5 via pluggable
//!   signal backends.
//! - Packets bounded by record count (`seq_count`) or by summed sequence
//!   length with an optional per-record cap (`sum_seq_len`).
//! - Packets never span two files; a per-basename skip registry resumes
//!   interrupted runs; a probing cap limits the total number of records.
//! - Single pass, pull-based, one open file at a time.
//! - Optional `mmap` for plain files; `zlib` feature for system-zlib parity.

pub mod codec;
pub mod cursor;
pub mod error;
pub mod fasta;
pub mod fastq;
pub mod format;
pub mod policy;
pub mod record;
pub mod sequencer;
pub mod signal;
pub mod skip;
pub mod stream;
mod text;
mod util;

pub use crate::codec::{Codec, Pull, RecordCodec};
pub use crate::cursor::{Assembled, CursorState, RecordSource, StreamCursor};
pub use crate::error::{ConfigError, DecodeError, FormatError, IoContext, StreamError};
pub use crate::fasta::FastaReader;
pub use crate::fastq::FastqReader;
pub use crate::format::FileFormat;
pub use crate::policy::{BatchingPolicy, Limit, StreamOptions, StreamPlan, SEQ_COUNT, SUM_SEQ_LEN};
pub use crate::record::{Packet, SeqRecord, SignalRecord, TextRecord};
pub use crate::signal::{SignalBackend, SignalBackends, SignalError, SignalReader, SignalReads};
pub use crate::skip::SkipRegistry;
pub use crate::stream::{PacketStream, PacketStreamBuilder};
