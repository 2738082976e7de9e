/// Errors that can occur during SLIP encoding.
///
/// Decoding never fails — corrupted input is dropped and the decoder
/// resynchronizes on the next terminator.
#[derive(Debug, thiserror::Error)]
pub enum SlipError {
    /// The destination buffer cannot hold the worst-case encoding.
    #[error("destination buffer too small ({capacity} bytes, worst case needs {needed})")]
    BufferTooSmall { needed: usize, capacity: usize },
}

pub type Result<T> = std::result::Result<T, SlipError>;
