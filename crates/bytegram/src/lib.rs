//! Datagram framing and reassembly for unreliable byte streams.
//!
//! bytegram turns a continuous, possibly corrupted byte stream —
//! serial links, radio modems, anything that delivers bytes a few at a
//! time with no message boundaries — into validated, length-bounded
//! datagrams, and the inverse. Corrupted frames are dropped silently
//! and the stream resynchronizes on the next magic byte; memory use is
//! fixed and bounded throughout.
//!
//! # Crate Structure
//!
//! - [`transport`] — The byte-stream capability interface and a
//!   loopback reference transport
//! - [`slip`] — SLIP-style delimiter framing with byte stuffing
//! - [`frame`] — Length-prefixed checksummed frames and the stream
//!   reassembler
//! - [`stream`] — The datagram adapter wiring a transport to the frame
//!   layer, with optional SLIP underneath

/// Re-export transport types.
pub mod transport {
    pub use bytegram_transport::*;
}

/// Re-export SLIP codec types.
pub mod slip {
    pub use bytegram_slip::*;
}

/// Re-export frame types.
pub mod frame {
    pub use bytegram_frame::*;
}

/// Re-export stream adapter types.
pub mod stream {
    pub use bytegram_stream::*;
}
