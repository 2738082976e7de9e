/// Errors that can occur during frame encoding.
///
/// Decoding has no error surface: integrity failures on the receive
/// path are silent drops by design, visible only through
/// [`DeframerStats`](crate::DeframerStats) and `tracing` output.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The payload exceeds what a single frame can carry.
    #[error("payload too large ({size} bytes, max {max})")]
    PayloadTooLarge { size: usize, max: usize },

    /// The destination buffer cannot hold the encoded frame.
    #[error("destination buffer too small ({capacity} bytes, frame needs {needed})")]
    BufferTooSmall { needed: usize, capacity: usize },
}

pub type Result<T> = std::result::Result<T, FrameError>;
