use bytes::BytesMut;
use tracing::trace;

use crate::error::{Result, TransportError};
use crate::traits::ByteStream;

/// In-memory transport for tests, demos and local wiring.
///
/// Bytes sent through it are captured in an outbound log; inbound bytes
/// are injected with [`push_incoming`](LoopbackStream::push_incoming).
/// Connection state is settable, so disconnect handling can be
/// exercised without a device.
#[derive(Debug, Default)]
pub struct LoopbackStream {
    rx: BytesMut,
    tx: BytesMut,
    connected: bool,
}

impl LoopbackStream {
    /// Create a connected loopback transport.
    pub fn new() -> Self {
        Self {
            rx: BytesMut::new(),
            tx: BytesMut::new(),
            connected: true,
        }
    }

    /// Simulate bytes arriving from the device.
    pub fn push_incoming(&mut self, data: &[u8]) {
        self.rx.extend_from_slice(data);
    }

    /// Everything sent since the last [`take_sent`](Self::take_sent).
    pub fn sent(&self) -> &[u8] {
        &self.tx
    }

    /// Drain and return the outbound log.
    pub fn take_sent(&mut self) -> Vec<u8> {
        let out = self.tx.to_vec();
        self.tx.clear();
        out
    }

    /// Flip the simulated connection state.
    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }
}

impl ByteStream for LoopbackStream {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        if !self.connected {
            return Err(TransportError::NotConnected);
        }
        trace!(len = data.len(), "loopback send");
        self.tx.extend_from_slice(data);
        Ok(())
    }

    fn data(&mut self) -> &[u8] {
        &self.rx
    }

    fn clear_data(&mut self) {
        self.rx.clear();
    }

    fn is_connected(&self) -> bool {
        self.connected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_captures_bytes() {
        let mut stream = LoopbackStream::new();
        stream.send(b"abc").unwrap();
        stream.send(b"def").unwrap();
        assert_eq!(stream.sent(), b"abcdef");
    }

    #[test]
    fn take_sent_drains() {
        let mut stream = LoopbackStream::new();
        stream.send(b"xyz").unwrap();
        assert_eq!(stream.take_sent(), b"xyz");
        assert!(stream.sent().is_empty());
    }

    #[test]
    fn incoming_bytes_visible_until_cleared() {
        let mut stream = LoopbackStream::new();
        stream.push_incoming(&[1, 2]);
        stream.push_incoming(&[3]);
        assert_eq!(stream.data(), &[1, 2, 3]);

        stream.clear_data();
        assert!(stream.data().is_empty());
    }

    #[test]
    fn send_fails_when_disconnected() {
        let mut stream = LoopbackStream::new();
        stream.set_connected(false);
        let err = stream.send(b"lost").unwrap_err();
        assert!(matches!(err, TransportError::NotConnected));
        assert!(stream.sent().is_empty());
    }
}
