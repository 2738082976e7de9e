use tracing::{debug, trace};

use crate::checksum::checksum;
use crate::codec::{FrameHeader, HEADER_SIZE, MAGIC, MAX_FRAME_SIZE, MIN_FRAME_SIZE};

/// Reassembly phase, as observed between pushes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeframerState {
    /// No candidate frame start; scanning for the magic byte.
    Searching,
    /// Candidate start found; waiting for a full header.
    HeaderWait,
    /// Header validated; waiting for the declared frame size.
    BodyWait,
}

/// Receive-path counters.
///
/// Integrity failures never surface as errors, so these are the only
/// programmatic way to observe drop behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeframerStats {
    /// Validated datagrams handed to the consumer.
    pub datagrams: u64,
    /// Candidates abandoned at header validation.
    pub header_drops: u64,
    /// Complete frames dropped on the whole-frame checksum.
    pub checksum_drops: u64,
}

/// Incremental frame reassembler over a fixed ring buffer.
///
/// Bytes are pushed as they arrive — one at a time or in batches — and
/// validated datagrams come out through a consumer closure. The machine
/// tolerates arbitrary byte loss and corruption: a failed candidate
/// just moves the magic-byte search one position past its start.
///
/// Memory is fixed at construction; the ring holds the most recent
/// [`MAX_FRAME_SIZE`] bytes and pathological input costs O(1) amortized
/// work per byte, since no byte is rescanned within the same candidate
/// window.
///
/// Datagrams are emitted as borrowed views into an internal buffer,
/// valid only for the duration of the callback.
#[derive(Debug)]
pub struct Deframer {
    ring: [u8; MAX_FRAME_SIZE],
    /// Next write slot.
    push_pos: usize,
    /// Candidate frame start, when one is in flight.
    start_pos: Option<usize>,
    /// Where the next magic-byte scan resumes.
    lookup_pos: usize,
    /// Validated header of the in-flight candidate.
    header: Option<FrameHeader>,
    /// Linearization target for wrapped frames.
    scratch: [u8; MAX_FRAME_SIZE],
    stats: DeframerStats,
}

impl Default for Deframer {
    fn default() -> Self {
        Self::new()
    }
}

impl Deframer {
    /// Create a deframer in the `Searching` state.
    pub fn new() -> Self {
        Self {
            ring: [0; MAX_FRAME_SIZE],
            push_pos: 0,
            start_pos: None,
            lookup_pos: 0,
            header: None,
            scratch: [0; MAX_FRAME_SIZE],
            stats: DeframerStats::default(),
        }
    }

    /// Current reassembly phase.
    pub fn state(&self) -> DeframerState {
        match (self.start_pos, self.header) {
            (None, _) => DeframerState::Searching,
            (Some(_), None) => DeframerState::HeaderWait,
            (Some(_), Some(_)) => DeframerState::BodyWait,
        }
    }

    /// Receive-path counters since construction.
    pub fn stats(&self) -> DeframerStats {
        self.stats
    }

    /// Push a batch of received bytes.
    ///
    /// Equivalent to pushing each byte individually: frame boundaries
    /// need not line up with delivery boundaries in any way.
    pub fn push_bytes<F>(&mut self, data: &[u8], mut on_datagram: F)
    where
        F: FnMut(&[u8]),
    {
        for &byte in data {
            self.push_byte(byte, &mut on_datagram);
        }
    }

    /// Push one received byte, emitting any datagrams it completes.
    ///
    /// Processing is exhaustive: completing or abandoning one frame may
    /// reveal that another frame already sits in buffered bytes, so a
    /// single push can emit more than one datagram.
    pub fn push_byte<F>(&mut self, byte: u8, mut on_datagram: F)
    where
        F: FnMut(&[u8]),
    {
        self.ring[self.push_pos] = byte;
        self.push_pos = (self.push_pos + 1) % MAX_FRAME_SIZE;

        loop {
            let start = match self.start_pos {
                Some(start) => start,
                None => match self.find_magic() {
                    Some(start) => {
                        trace!(start, "candidate frame start");
                        self.start_pos = Some(start);
                        // A failed candidate must never re-match the
                        // same magic byte.
                        self.lookup_pos = (start + 1) % MAX_FRAME_SIZE;
                        start
                    }
                    None => {
                        self.lookup_pos = self.push_pos;
                        return;
                    }
                },
            };

            if self.header.is_none() {
                if self.available(start) < HEADER_SIZE {
                    return;
                }
                self.linearize(start, HEADER_SIZE);
                let mut header_bytes = [0u8; HEADER_SIZE];
                header_bytes.copy_from_slice(&self.scratch[..HEADER_SIZE]);
                match FrameHeader::from_bytes(&header_bytes) {
                    Some(header) => self.header = Some(header),
                    None => {
                        debug!("header validation failed, resuming search");
                        self.stats.header_drops += 1;
                        self.start_pos = None;
                        continue;
                    }
                }
            }

            let Some(header) = self.header else { return };
            let frame_size = header.frame_size();
            if self.available(start) < frame_size {
                return;
            }

            // The size field passed the header checksum, but re-check
            // the bounds before indexing with it.
            if !(MIN_FRAME_SIZE..=MAX_FRAME_SIZE).contains(&frame_size) {
                debug!(frame_size, "declared size out of bounds at completion");
                self.stats.header_drops += 1;
                self.reset_candidate(start);
                return;
            }

            self.linearize(start, frame_size);
            let frame = &self.scratch[..frame_size];
            let received = frame[frame_size - 1];
            let computed = checksum(&frame[..frame_size - 1], frame[HEADER_SIZE - 1]);

            self.start_pos = None;
            self.header = None;
            self.lookup_pos = (start + 1) % MAX_FRAME_SIZE;

            if computed == received {
                self.stats.datagrams += 1;
                on_datagram(&frame[HEADER_SIZE..frame_size - 1]);
            } else {
                debug!(frame_size, "whole-frame checksum mismatch, frame dropped");
                self.stats.checksum_drops += 1;
            }
        }
    }

    /// Bytes buffered from `start` up to the write position.
    fn available(&self, start: usize) -> usize {
        if self.push_pos > start {
            self.push_pos - start
        } else {
            self.push_pos + MAX_FRAME_SIZE - start
        }
    }

    /// Scan for the magic byte between `lookup_pos` and the write
    /// position.
    fn find_magic(&self) -> Option<usize> {
        let mut pos = self.lookup_pos;
        while pos != self.push_pos {
            if self.ring[pos] == MAGIC {
                return Some(pos);
            }
            pos = (pos + 1) % MAX_FRAME_SIZE;
        }
        None
    }

    /// Copy `len` ring bytes starting at `start` into the scratch
    /// buffer, handling wraparound in this one place.
    fn linearize(&mut self, start: usize, len: usize) {
        if start + len <= MAX_FRAME_SIZE {
            self.scratch[..len].copy_from_slice(&self.ring[start..start + len]);
        } else {
            let first = MAX_FRAME_SIZE - start;
            self.scratch[..first].copy_from_slice(&self.ring[start..]);
            self.scratch[first..len].copy_from_slice(&self.ring[..len - first]);
        }
    }

    fn reset_candidate(&mut self, start: usize) {
        self.start_pos = None;
        self.header = None;
        self.lookup_pos = (start + 1) % MAX_FRAME_SIZE;
    }
}
