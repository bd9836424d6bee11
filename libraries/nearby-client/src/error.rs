//! Error types for the Nearby client.

use crate::transport::{FailureKind, TransportError};
use nearby_storage::StorageError;
use thiserror::Error;

/// Errors a caller of the resource services can observe.
///
/// Transport failures never surface directly: each operation converts them
/// into its offline fallback. Only bookings, which have no safe offline
/// substitute, report them, wrapped as [`ClientError::Booking`]. A call
/// that succeeded with an unreadable body is [`ClientError::Response`].
#[derive(Error, Debug)]
pub enum ClientError {
    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// The HTTP client could not be built
    #[error("HTTP client setup failed: {0}")]
    Setup(#[from] reqwest::Error),

    /// An offline record could not be derived from the request
    #[error("Cannot build offline record: {0}")]
    Synthesis(String),

    /// A booking action failed; `message` is fit for display
    #[error("{message}")]
    Booking {
        kind: FailureKind,
        message: String,
        #[source]
        source: TransportError,
    },

    /// The API accepted the call but its response could not be read
    #[error("Unreadable response from the API: {0}")]
    Response(#[source] TransportError),

    /// Durable storage could not be read or written
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ClientError {
    pub(crate) fn response(source: TransportError) -> Self {
        Self::Response(source)
    }

    pub(crate) fn booking(source: TransportError) -> Self {
        let kind = source.kind();
        Self::Booking {
            kind,
            message: kind.user_message().to_string(),
            source,
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
