use crate::error::Result;

/// A byte-oriented transport with no message boundaries.
///
/// Implementations buffer whatever bytes have arrived since the last
/// [`clear_data`](ByteStream::clear_data) and deliver them as one
/// contiguous slice. Bytes may arrive a few at a time; nothing about a
/// `data()` slice lines up with any framing the layers above apply.
pub trait ByteStream {
    /// Queue raw bytes for transmission.
    ///
    /// Fails with [`TransportError::NotConnected`] when the device is
    /// not open.
    ///
    /// [`TransportError::NotConnected`]: crate::TransportError::NotConnected
    fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Bytes received since the last `clear_data` call.
    ///
    /// Takes `&mut self` so layered transports may decode lazily on
    /// access.
    fn data(&mut self) -> &[u8];

    /// Discard the received bytes after the caller has consumed them.
    fn clear_data(&mut self);

    /// Whether the underlying device is currently open.
    fn is_connected(&self) -> bool;
}

/// Callbacks a transport consumer implements to be driven by transport
/// events.
///
/// The host environment (poll loop, interrupt trampoline, reactor)
/// delivers events by calling these methods on whoever is wired to the
/// transport. `bytes_arrived` is the only mandatory one; connection
/// state changes default to no-ops.
pub trait StreamListener {
    /// New bytes are available via [`ByteStream::data`].
    fn bytes_arrived(&mut self);

    /// The underlying device transitioned to connected.
    fn device_opened(&mut self) {}

    /// The underlying device transitioned to disconnected.
    fn device_closed(&mut self) {}
}
