use bytes::{BufMut, BytesMut};

use crate::checksum::checksum;
use crate::error::{FrameError, Result};

/// Frame header: magic (1) + total size (1) + header checksum (1).
pub const HEADER_SIZE: usize = 3;

/// Magic byte marking a candidate frame start.
pub const MAGIC: u8 = 0x55;

/// Maximum total frame size, shared by both encodings.
///
/// Small enough that the one-byte size field can always represent it
/// and that a frame fits the fixed reassembly buffers.
pub const MAX_FRAME_SIZE: usize = 64;

/// Smallest well-formed frame: header plus the trailing checksum byte.
pub const MIN_FRAME_SIZE: usize = HEADER_SIZE + 1;

/// Maximum payload a single frame can carry.
pub const MAX_PAYLOAD: usize = MAX_FRAME_SIZE - MIN_FRAME_SIZE;

/// Frame header as an explicit value type.
///
/// The magic and the header checksum are derived, never stored: the
/// checksum is recomputed on every serialization so it can never go
/// stale, and deserialization validates it together with the size
/// bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    frame_size: u8,
}

impl FrameHeader {
    /// Build the header for a payload of `payload_len` bytes.
    pub fn for_payload(payload_len: usize) -> Result<Self> {
        if payload_len > MAX_PAYLOAD {
            return Err(FrameError::PayloadTooLarge {
                size: payload_len,
                max: MAX_PAYLOAD,
            });
        }
        Ok(Self {
            frame_size: (HEADER_SIZE + payload_len + 1) as u8,
        })
    }

    /// Total frame size declared by this header.
    pub fn frame_size(&self) -> usize {
        self.frame_size as usize
    }

    /// Payload bytes between the header and the trailing checksum.
    pub fn payload_len(&self) -> usize {
        self.frame_size as usize - MIN_FRAME_SIZE
    }

    /// Checksum over the magic and size fields, seeded at 0.
    pub fn header_checksum(&self) -> u8 {
        checksum(&[MAGIC, self.frame_size], 0)
    }

    /// Serialize to the 3-byte wire layout.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        [MAGIC, self.frame_size, self.header_checksum()]
    }

    /// Parse and validate a 3-byte wire header.
    ///
    /// Returns `None` when the magic is wrong, the stored checksum
    /// does not match, or the declared size falls outside
    /// `MIN_FRAME_SIZE..=MAX_FRAME_SIZE`.
    pub fn from_bytes(bytes: &[u8; HEADER_SIZE]) -> Option<Self> {
        let [magic, frame_size, stored_checksum] = *bytes;
        if magic != MAGIC {
            return None;
        }
        if checksum(&[magic, frame_size], 0) != stored_checksum {
            return None;
        }
        let size = frame_size as usize;
        if !(MIN_FRAME_SIZE..=MAX_FRAME_SIZE).contains(&size) {
            return None;
        }
        Some(Self { frame_size })
    }
}

/// Total wire size of a frame carrying `payload_len` bytes.
pub const fn wire_size(payload_len: usize) -> usize {
    HEADER_SIZE + payload_len + 1
}

/// Encode a payload into the wire format.
///
/// Wire format:
/// ```text
/// ┌───────────┬──────────┬───────────┬──────────────┬───────────┐
/// │ Magic     │ Size     │ Header CS │ Payload      │ Frame CS  │
/// │ 0x55      │ 4..=64   │           │              │           │
/// └───────────┴──────────┴───────────┴──────────────┴───────────┘
/// ```
///
/// The trailing checksum continues the header checksum chain over the
/// header bytes and then the payload, so every transmitted byte except
/// the trailer itself is covered by one comparison on receive.
///
/// Returns the number of bytes appended to `dst`.
pub fn encode_frame(payload: &[u8], dst: &mut BytesMut) -> Result<usize> {
    let header = FrameHeader::for_payload(payload.len())?;
    let header_bytes = header.to_bytes();
    let frame_checksum = checksum(payload, checksum(&header_bytes, header.header_checksum()));

    dst.reserve(wire_size(payload.len()));
    dst.put_slice(&header_bytes);
    dst.put_slice(payload);
    dst.put_u8(frame_checksum);
    Ok(wire_size(payload.len()))
}

/// Encode a payload into a caller-provided fixed buffer.
///
/// For callers that cannot allocate. Fails with
/// [`FrameError::BufferTooSmall`] — writing nothing — when the frame
/// does not fit. Returns the number of bytes written.
pub fn encode_frame_into(payload: &[u8], dst: &mut [u8]) -> Result<usize> {
    let header = FrameHeader::for_payload(payload.len())?;
    let needed = wire_size(payload.len());
    if dst.len() < needed {
        return Err(FrameError::BufferTooSmall {
            needed,
            capacity: dst.len(),
        });
    }

    let header_bytes = header.to_bytes();
    dst[..HEADER_SIZE].copy_from_slice(&header_bytes);
    dst[HEADER_SIZE..HEADER_SIZE + payload.len()].copy_from_slice(payload);
    dst[needed - 1] = checksum(payload, checksum(&header_bytes, header.header_checksum()));
    Ok(needed)
}
