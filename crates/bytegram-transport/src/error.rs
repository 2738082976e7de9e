/// Errors that can occur in byte-stream transport operations.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The transport is not connected to a device.
    #[error("transport not connected")]
    NotConnected,

    /// An I/O error occurred on the underlying device.
    #[error("transport I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TransportError>;
