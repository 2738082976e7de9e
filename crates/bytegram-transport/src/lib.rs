//! Byte-stream transport abstraction for unreliable links.
//!
//! Provides the capability interface the rest of bytegram is written
//! against: a transport that can push raw bytes out, buffer raw bytes
//! that arrived, and report connection state. Serial ports, radio
//! modems and sockets all fit behind it.
//!
//! This is the lowest layer of bytegram. Everything else builds on the
//! [`ByteStream`] trait defined here.

pub mod error;
pub mod loopback;
pub mod traits;

pub use error::{Result, TransportError};
pub use loopback::LoopbackStream;
pub use traits::{ByteStream, StreamListener};
