//! Error types for the udap library.
//!
//! All fallible operations across the library return [`Result<T>`], which
//! uses [`Error`] as the error type. Socket-layer, HTTP-layer, and
//! protocol-layer failures are all captured here.

/// The error type for all udap operations.
///
/// Variants cover the failure modes encountered when talking to a
/// television: transport failures, rejected requests, malformed discovery
/// traffic, and timeouts.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A transport-level failure (UDP socket or HTTP request I/O).
    #[error("transport error: {0}")]
    Transport(String),

    /// A protocol-level error (malformed reply, unexpected payload).
    #[error("protocol error: {0}")]
    Protocol(String),

    /// The television answered a well-formed request with a non-200 status.
    ///
    /// During command dispatch this usually means the pairing was dropped
    /// (televisions forget it across power cycles) and triggers the
    /// one-shot re-pair-and-retry.
    #[error("request rejected with HTTP status {0}")]
    Rejected(u16),

    /// A zero-length datagram arrived on the discovery socket.
    #[error("blank datagram received")]
    BlankMessage,

    /// Timed out waiting for a response.
    ///
    /// During discovery this means no television answered the broadcast
    /// query within the caller's deadline.
    #[error("timeout waiting for response")]
    Timeout,

    /// An operation needed the television's network address before
    /// discovery resolved it.
    #[error("television not yet discovered")]
    NotDiscovered,

    /// A pairing operation needed a pin but none is configured.
    #[error("no pairing pin configured")]
    MissingPin,

    /// An underlying I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenience `Result` alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;
