use bytegram_slip::{encode_packet_vec, SlipDecoder};
use bytegram_transport::{ByteStream, Result};
use bytes::BytesMut;
use tracing::trace;

/// Byte-stuffing transport layer.
///
/// Wraps any [`ByteStream`] and applies SLIP framing on top of it:
/// outbound byte blocks are escaped and wrapped in `END` delimiters,
/// inbound bytes are run through a [`SlipDecoder`] before the layers
/// above see them. Used to carry the length-prefixed frame format over
/// links where hard delimiters speed up recovery, or on its own.
///
/// `data()` exposes the decoded packets concatenated back to back;
/// boundaries between them are not preserved, which is exactly what a
/// byte-stream consumer such as the
/// [`Deframer`](bytegram_frame::Deframer) expects. Consumers that need
/// per-packet boundaries should use [`SlipDecoder`] directly instead.
#[derive(Debug)]
pub struct SlipLayer<T> {
    inner: T,
    decoder: SlipDecoder,
    decoded: BytesMut,
}

impl<T: ByteStream> SlipLayer<T> {
    /// Wrap a transport in the byte-stuffing layer.
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            decoder: SlipDecoder::new(),
            decoded: BytesMut::new(),
        }
    }

    /// Borrow the wrapped transport.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the wrapped transport.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Unwrap the layer, discarding decode state.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: ByteStream> ByteStream for SlipLayer<T> {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        let packet = encode_packet_vec(data);
        trace!(raw = data.len(), encoded = packet.len(), "slip send");
        self.inner.send(&packet)
    }

    fn data(&mut self) -> &[u8] {
        // Drain whatever raw bytes the inner transport holds through
        // the decoder before exposing the result.
        let raw = self.inner.data();
        let decoder = &mut self.decoder;
        let decoded = &mut self.decoded;
        decoder.push_bytes(raw, |packet| decoded.extend_from_slice(packet));
        self.inner.clear_data();
        &self.decoded
    }

    fn clear_data(&mut self) {
        self.decoded.clear();
    }

    fn is_connected(&self) -> bool {
        self.inner.is_connected()
    }
}
