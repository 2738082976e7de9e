//! SLIP-style delimiter framing with byte stuffing.
//!
//! Encodes arbitrary byte sequences into delimiter-safe packets and
//! decodes them back, one byte at a time. Every packet is wrapped in
//! [`END`] bytes; occurrences of [`END`] and [`ESC`] inside the body
//! are escaped as two-byte sequences so the terminator can never
//! appear as data.
//!
//! Usable standalone, or layered underneath the length-prefixed frame
//! format from `bytegram-frame` (see `SlipLayer` in `bytegram-stream`).
//!
//! Corruption on the wire is an expected steady-state condition here:
//! a malformed escape drops one byte, a missing terminator merges into
//! the next packet, and accumulation overflow restarts the buffer.
//! None of these raise errors — the decoder just keeps going.

pub mod decoder;
pub mod encode;
pub mod error;

pub use decoder::SlipDecoder;
pub use encode::{encode_packet, encode_packet_vec, encoded_upper_bound};
pub use error::{Result, SlipError};

/// Packet terminator.
pub const END: u8 = 0xC0;

/// Escape marker.
pub const ESC: u8 = 0xDB;

/// `ESC ESC_END` stands for a literal [`END`] data byte.
pub const ESC_END: u8 = 0xDC;

/// `ESC ESC_ESC` stands for a literal [`ESC`] data byte.
///
/// 0xDE rather than RFC 1055's 0xDD, for compatibility with deployed
/// peers.
pub const ESC_ESC: u8 = 0xDE;

/// Maximum decoded message size, in bytes.
///
/// Matches `MAX_FRAME_SIZE` in `bytegram-frame` so either encoding can
/// carry the other's largest unit.
pub const MAX_MESSAGE_SIZE: usize = 64;
