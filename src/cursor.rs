//! Packet assembly over an explicit cursor.
//!
//! The cursor holds everything that survives between two packet requests:
//! the accumulator, its length sum, the emitted-record count and the
//! boundary state. Records come from any [`RecordSource`], so the
//! assembler runs the same against open files and in-memory fakes.

use crate::codec::Pull;
use crate::error::StreamError;
use crate::policy::StreamPlan;
use crate::record::Packet;

use std::num::NonZeroU64;

/// Where records are pulled from; end of the active file is a `Pull` end signal.
pub trait RecordSource {
    fn pull(&mut self) -> Result<Pull, StreamError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    Accumulating,
    /// The active file ended; the next request must move to the next file.
    FileBoundaryPending,
    StreamExhausted,
}

/// Result of one assembly pass.
#[derive(Debug)]
pub enum Assembled {
    Packet(Packet),
    /// The active file ended before any record was taken. The caller
    /// advances to the next file and assembles again.
    FileDrained,
}

#[derive(Debug)]
pub struct StreamCursor {
    packet: Packet,
    sum_len: u64,
    emitted: u64,
    state: CursorState,
}

impl Default for StreamCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamCursor {
    pub fn new() -> Self {
        Self {
            packet: Vec::new(),
            sum_len: 0,
            emitted: 0,
            state: CursorState::Accumulating,
        }
    }

    #[inline]
    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Records handed out so far, across all files.
    #[inline]
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    #[inline]
    pub fn cap_reached(&self, cap: Option<NonZeroU64>) -> bool {
        cap.is_some_and(|cap| self.emitted >= cap.get())
    }

    pub fn exhaust(&mut self) {
        self.reset_packet();
        self.state = CursorState::StreamExhausted;
    }

    /// Pull records from `src` until the policy is satisfied, the probing
    /// cap is hit, or the active file ends. A packet never spans two files
    /// and a record is never split: the one that crosses the length
    /// threshold goes in whole.
    pub fn assemble<S: RecordSource + ?Sized>(
        &mut self,
        plan: &StreamPlan,
        src: &mut S,
    ) -> Result<Assembled, StreamError> {
        debug_assert_ne!(self.state, CursorState::StreamExhausted);
        self.state = CursorState::Accumulating;

        while plan.policy.wants_more(self.packet.len(), self.sum_len)
            && !self.cap_reached_with_packet(plan.probing_cap)
        {
            let rec = match src.pull() {
                Ok(Pull::Record(rec)) => rec,
                Ok(Pull::EndMarker | Pull::Exhausted) => {
                    self.state = CursorState::FileBoundaryPending;
                    if self.packet.is_empty() {
                        return Ok(Assembled::FileDrained);
                    }
                    break;
                }
                Err(e) => {
                    self.reset_packet();
                    return Err(e);
                }
            };

            if plan.policy.is_length_based() {
                self.sum_len += plan.policy.length_increment(rec.seq_len().unwrap_or(0));
            }
            self.packet.push(rec);
        }

        Ok(Assembled::Packet(self.take_packet()))
    }

    // Records in the accumulator count toward the cap only while assembling;
    // `emitted` grows when a packet is handed out.
    #[inline]
    fn cap_reached_with_packet(&self, cap: Option<NonZeroU64>) -> bool {
        cap.is_some_and(|cap| self.emitted + self.packet.len() as u64 >= cap.get())
    }

    fn take_packet(&mut self) -> Packet {
        self.sum_len = 0;
        self.emitted += self.packet.len() as u64;
        std::mem::take(&mut self.packet)
    }

    fn reset_packet(&mut self) {
        self.packet.clear();
        self.sum_len = 0;
    }
}
