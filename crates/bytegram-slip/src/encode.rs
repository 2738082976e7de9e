use crate::error::{Result, SlipError};
use crate::{END, ESC, ESC_END, ESC_ESC};

/// Worst-case encoded size for a payload of `len` bytes.
///
/// Every byte may need escaping (×2) plus the two wrapping [`END`]
/// bytes. Actual expansion is data-dependent, but callers on fixed
/// buffers cannot reallocate mid-encode, so the bound is checked up
/// front.
pub const fn encoded_upper_bound(len: usize) -> usize {
    2 * len + 2
}

/// Encode a payload into a delimiter-safe packet.
///
/// Wire format:
/// ```text
/// ┌──────┬──────────────────────────────────────┬──────┐
/// │ END  │ payload, END → ESC ESC_END,          │ END  │
/// │ 0xC0 │          ESC → ESC ESC_ESC           │ 0xC0 │
/// └──────┴──────────────────────────────────────┴──────┘
/// ```
///
/// Returns the number of bytes written. Fails with
/// [`SlipError::BufferTooSmall`] — writing nothing — unless `dst` can
/// hold the worst case [`encoded_upper_bound`]`(src.len())`.
pub fn encode_packet(src: &[u8], dst: &mut [u8]) -> Result<usize> {
    let needed = encoded_upper_bound(src.len());
    if dst.len() < needed {
        return Err(SlipError::BufferTooSmall {
            needed,
            capacity: dst.len(),
        });
    }

    let mut pos = 0;
    dst[pos] = END;
    pos += 1;

    for &byte in src {
        match byte {
            END => {
                dst[pos] = ESC;
                dst[pos + 1] = ESC_END;
                pos += 2;
            }
            ESC => {
                dst[pos] = ESC;
                dst[pos + 1] = ESC_ESC;
                pos += 2;
            }
            _ => {
                dst[pos] = byte;
                pos += 1;
            }
        }
    }

    dst[pos] = END;
    pos += 1;
    Ok(pos)
}

/// Encode a payload into a freshly allocated packet.
///
/// Allocating convenience over [`encode_packet`] for callers that are
/// not buffer-constrained.
pub fn encode_packet_vec(src: &[u8]) -> Vec<u8> {
    let mut dst = vec![0u8; encoded_upper_bound(src.len())];
    // The destination is sized to the worst case, so this cannot fail.
    let written = encode_packet(src, &mut dst).unwrap_or(0);
    dst.truncate(written);
    dst
}
