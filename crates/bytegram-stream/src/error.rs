/// Errors that can occur on a datagram stream.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// No transport is attached to the stream.
    #[error("no transport attached")]
    NotAttached,

    /// The outbound datagram could not be framed.
    #[error(transparent)]
    Frame(#[from] bytegram_frame::FrameError),

    /// The transport rejected the framed bytes.
    #[error(transparent)]
    Transport(#[from] bytegram_transport::TransportError),
}

pub type Result<T> = std::result::Result<T, StreamError>;
