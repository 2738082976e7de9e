use bytegram_frame::{encode_frame, Deframer, DeframerStats};
use bytegram_transport::{ByteStream, StreamListener};
use bytes::BytesMut;
use tracing::{debug, trace};

use crate::error::{Result, StreamError};

/// Consumer of validated datagrams and connection-state changes.
///
/// `datagram_arrived` receives a view into the deframer's internal
/// buffer; it must not be retained past the call. The state callbacks
/// default to no-ops.
pub trait DatagramSink {
    /// A validated datagram was reassembled from the transport.
    fn datagram_arrived(&mut self, datagram: &[u8]);

    /// The attached transport became connected.
    fn stream_opened(&mut self) {}

    /// The attached transport disconnected.
    fn stream_closed(&mut self) {}
}

/// Adapter between a byte transport and the datagram framing.
///
/// Owns the transport, a [`Deframer`] and the consumer sink. Transport
/// events are delivered through its [`StreamListener`] implementation
/// by whatever drives the transport (poll loop, reactor, interrupt
/// trampoline); everything runs synchronously inside those calls.
pub struct DatagramStream<T, S> {
    transport: Option<T>,
    deframer: Deframer,
    sink: S,
    tx_buf: BytesMut,
}

impl<T: ByteStream, S: DatagramSink> DatagramStream<T, S> {
    /// Create an adapter with no transport attached.
    ///
    /// [`send`](Self::send) fails with [`StreamError::NotAttached`]
    /// until [`attach`](Self::attach) is called.
    pub fn new(sink: S) -> Self {
        Self {
            transport: None,
            deframer: Deframer::new(),
            sink,
            tx_buf: BytesMut::new(),
        }
    }

    /// Create an adapter wired to `transport`.
    pub fn with_transport(transport: T, sink: S) -> Self {
        let mut stream = Self::new(sink);
        stream.attach(transport);
        stream
    }

    /// Attach a transport, replacing and returning any previous one.
    ///
    /// If the transport is already connected, the sink is notified of
    /// `stream_opened` retroactively — it never misses the transition.
    pub fn attach(&mut self, transport: T) -> Option<T> {
        let previous = self.transport.take();
        let connected = transport.is_connected();
        self.transport = Some(transport);
        if connected {
            self.sink.stream_opened();
        }
        previous
    }

    /// Detach and return the transport, if any.
    pub fn detach(&mut self) -> Option<T> {
        self.transport.take()
    }

    /// Whether a transport is currently attached.
    pub fn is_attached(&self) -> bool {
        self.transport.is_some()
    }

    /// Borrow the attached transport.
    pub fn transport(&self) -> Option<&T> {
        self.transport.as_ref()
    }

    /// Mutably borrow the attached transport.
    pub fn transport_mut(&mut self) -> Option<&mut T> {
        self.transport.as_mut()
    }

    /// Frame a datagram and hand it to the transport.
    pub fn send(&mut self, payload: &[u8]) -> Result<()> {
        let transport = self.transport.as_mut().ok_or(StreamError::NotAttached)?;

        self.tx_buf.clear();
        let written = encode_frame(payload, &mut self.tx_buf)?;
        trace!(payload = payload.len(), frame = written, "sending datagram");
        transport.send(&self.tx_buf)?;
        Ok(())
    }

    /// Receive-path counters of the underlying deframer.
    pub fn stats(&self) -> DeframerStats {
        self.deframer.stats()
    }

    /// Borrow the consumer sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutably borrow the consumer sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the adapter, returning the transport and sink.
    pub fn into_parts(self) -> (Option<T>, S) {
        (self.transport, self.sink)
    }
}

impl<T: ByteStream, S: DatagramSink> StreamListener for DatagramStream<T, S> {
    fn bytes_arrived(&mut self) {
        let Some(transport) = self.transport.as_mut() else {
            debug!("bytes_arrived with no transport attached");
            return;
        };

        let raw = transport.data();
        let sink = &mut self.sink;
        self.deframer
            .push_bytes(raw, |datagram| sink.datagram_arrived(datagram));
        transport.clear_data();
    }

    fn device_opened(&mut self) {
        self.sink.stream_opened();
    }

    fn device_closed(&mut self) {
        self.sink.stream_closed();
    }
}
