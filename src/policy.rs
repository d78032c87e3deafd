use crate::error::ConfigError;
use crate::skip::SkipRegistry;
use std::fmt;
use std::num::NonZeroU64;

/// Packet mode name for count-bounded packets.
pub const SEQ_COUNT: &str = "seq_count";
/// Packet mode name for packets bounded by summed sequence length.
pub const SUM_SEQ_LEN: &str = "sum_seq_len";

/// An optional ceiling. `Unbounded` is its own state; `At(0)` is a
/// configuration error, never "no limit".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Limit {
    #[default]
    Unbounded,
    At(u64),
}

impl Limit {
    fn validate(self, name: &'static str) -> Result<Option<NonZeroU64>, ConfigError> {
        match self {
            Limit::Unbounded => Ok(None),
            Limit::At(value) => NonZeroU64::new(value)
                .map(Some)
                .ok_or(ConfigError::NotPositive { name, value }),
        }
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::Unbounded => f.write_str("unbounded"),
            Limit::At(n) => write!(f, "{n}"),
        }
    }
}

/// How records are grouped into packets. Fixed for the life of a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchingPolicy {
    /// At most `n` records per packet.
    ByCount(NonZeroU64),
    /// Records are added until the summed sequence length reaches
    /// `threshold`; each record contributes at most `per_record_cap`.
    ByTotalLength {
        threshold: NonZeroU64,
        per_record_cap: Option<NonZeroU64>,
    },
}

impl BatchingPolicy {
    /// Length a record of `seq_len` adds to the running sum.
    #[inline]
    pub fn length_increment(&self, seq_len: usize) -> u64 {
        let len = seq_len as u64;
        match self {
            BatchingPolicy::ByTotalLength {
                per_record_cap: Some(cap),
                ..
            } => len.min(cap.get()),
            _ => len,
        }
    }

    /// True while a packet holding `count` records of summed length `sum`
    /// may still grow.
    #[inline]
    pub fn wants_more(&self, count: usize, sum: u64) -> bool {
        match self {
            BatchingPolicy::ByCount(n) => (count as u64) < n.get(),
            BatchingPolicy::ByTotalLength { threshold, .. } => sum < threshold.get(),
        }
    }

    pub fn is_length_based(&self) -> bool {
        matches!(self, BatchingPolicy::ByTotalLength { .. })
    }
}

/// Validated stream parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamPlan {
    pub policy: BatchingPolicy,
    pub probing_cap: Option<NonZeroU64>,
}

#[derive(Debug, Clone)]
pub struct StreamOptions {
    /// `seq_count` or `sum_seq_len`; anything else falls back to `seq_count`.
    pub packet_mode: String,
    /// Records per packet (`seq_count`) or length threshold (`sum_seq_len`).
    pub packet_size: u64,
    /// Hard ceiling on records emitted across all files.
    pub probing_batch_size: Limit,
    /// Per-record cap on the length added in `sum_seq_len` mode.
    pub max_seq_len: Limit,
    /// Leading records to drop per input file basename.
    pub n_first_skip: SkipRegistry,
}

impl Default for StreamOptions {
    fn default() -> Self {
        Self {
            packet_mode: SEQ_COUNT.to_string(),
            packet_size: 1,
            probing_batch_size: Limit::Unbounded,
            max_seq_len: Limit::Unbounded,
            n_first_skip: SkipRegistry::default(),
        }
    }
}

impl StreamOptions {
    pub fn validate(&self) -> Result<StreamPlan, ConfigError> {
        let packet_size =
            NonZeroU64::new(self.packet_size).ok_or(ConfigError::NotPositive {
                name: "packet_size",
                value: self.packet_size,
            })?;
        let probing_cap = self.probing_batch_size.validate("probing_batch_size")?;
        let mut max_seq_len = self.max_seq_len.validate("max_seq_len")?;

        let mode = match self.packet_mode.as_str() {
            SEQ_COUNT | SUM_SEQ_LEN => self.packet_mode.as_str(),
            other => {
                log::warn!("invalid mode: `{other}`; setting mode to `{SEQ_COUNT}`");
                SEQ_COUNT
            }
        };

        if mode == SEQ_COUNT && max_seq_len.is_some() {
            log::warn!(
                "`max_seq_len` is available only in `{SUM_SEQ_LEN}` mode; ignoring `max_seq_len`={}",
                self.max_seq_len
            );
            max_seq_len = None;
        }

        let policy = if mode == SUM_SEQ_LEN {
            BatchingPolicy::ByTotalLength {
                threshold: packet_size,
                per_record_cap: max_seq_len,
            }
        } else {
            BatchingPolicy::ByCount(packet_size)
        };

        Ok(StreamPlan {
            policy,
            probing_cap,
        })
    }
}
