//! Datagram streams over unreliable byte transports.
//!
//! This is the wiring layer. [`DatagramStream`] composes a
//! [`ByteStream`](bytegram_transport::ByteStream) transport with the
//! frame codec and [`Deframer`](bytegram_frame::Deframer) from
//! `bytegram-frame`: outbound datagrams are framed and handed to the
//! transport, inbound transport bytes are reassembled and dispatched
//! to a [`DatagramSink`]. No framing logic lives here.
//!
//! [`SlipLayer`] optionally slots between the transport and the
//! adapter to byte-stuff the framed stream for links where hard
//! delimiters help recovery.

pub mod error;
pub mod slip_layer;
pub mod stream;

pub use error::{Result, StreamError};
pub use slip_layer::SlipLayer;
pub use stream::{DatagramSink, DatagramStream};
