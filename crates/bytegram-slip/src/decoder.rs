use tracing::{debug, trace};

use crate::{END, ESC, ESC_END, ESC_ESC, MAX_MESSAGE_SIZE};

/// Incremental SLIP decoder with single-byte lookback.
///
/// Feed it bytes as they arrive — there is no requirement that a whole
/// packet shows up in one call. A completed message is returned as a
/// borrowed view into the internal buffer, valid until the next push;
/// readiness is one-shot.
///
/// The accumulation buffer is fixed at [`MAX_MESSAGE_SIZE`] and never
/// grows. When an unterminated run of bytes overflows it, accumulation
/// restarts from empty (policy: restart-on-overflow) — the in-progress
/// message is lost, subsequent packets decode normally.
#[derive(Debug)]
pub struct SlipDecoder {
    buf: [u8; MAX_MESSAGE_SIZE],
    len: usize,
    last: u8,
}

impl Default for SlipDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl SlipDecoder {
    /// Create a decoder in the idle state.
    pub fn new() -> Self {
        Self {
            buf: [0; MAX_MESSAGE_SIZE],
            len: 0,
            last: END,
        }
    }

    /// Push one received byte.
    ///
    /// Returns the decoded message when `byte` terminates a non-empty
    /// packet. The slice borrows the decoder's internal buffer; it is
    /// reused by the next push.
    pub fn push_byte(&mut self, byte: u8) -> Option<&[u8]> {
        if byte == END {
            let len = self.len;
            self.len = 0;
            self.last = byte;
            if len > 0 {
                return Some(&self.buf[..len]);
            }
            return None;
        }

        if self.len >= MAX_MESSAGE_SIZE {
            debug!(
                dropped = self.len,
                "slip accumulation overflow, restarting"
            );
            self.len = 0;
        }

        if self.last == ESC {
            match byte {
                ESC_END => {
                    self.buf[self.len] = END;
                    self.len += 1;
                }
                ESC_ESC => {
                    self.buf[self.len] = ESC;
                    self.len += 1;
                }
                other => {
                    // Malformed escape sequence: drop the byte, keep going.
                    trace!(byte = other, "invalid escape follower dropped");
                }
            }
            self.last = byte;
            return None;
        }

        if byte != ESC {
            self.buf[self.len] = byte;
            self.len += 1;
        }
        self.last = byte;
        None
    }

    /// Push a batch of received bytes, invoking `on_message` for each
    /// completed packet.
    pub fn push_bytes<F>(&mut self, data: &[u8], mut on_message: F)
    where
        F: FnMut(&[u8]),
    {
        for &byte in data {
            if let Some(message) = self.push_byte(byte) {
                on_message(message);
            }
        }
    }

    /// Bytes accumulated toward the packet currently being decoded.
    pub fn pending(&self) -> usize {
        self.len
    }
}
