//! Length-prefixed message framing for unreliable byte streams.
//!
//! This is the core value-add layer of bytegram. Every datagram is
//! framed with:
//! - A 1-byte magic number (0x55) for stream resynchronization
//! - A 1-byte total frame size (header + payload + trailer)
//! - A 1-byte header checksum over magic and size
//! - A trailing checksum byte chained over every other frame byte
//!
//! The [`Deframer`] turns an arbitrarily fragmented, possibly corrupted
//! byte stream back into validated datagrams using fixed, bounded
//! memory. Corrupted frames are dropped silently and the magic-byte
//! search resumes past the failed candidate — loss is an expected
//! steady-state condition on the target links.

pub mod checksum;
pub mod codec;
pub mod deframer;
pub mod error;

pub use checksum::checksum;
pub use codec::{
    encode_frame, encode_frame_into, wire_size, FrameHeader, HEADER_SIZE, MAGIC, MAX_FRAME_SIZE,
    MAX_PAYLOAD, MIN_FRAME_SIZE,
};
pub use deframer::{Deframer, DeframerState, DeframerStats};
pub use error::{FrameError, Result};
