/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// A stored value could not be decoded
    #[error("Malformed value under '{key}': {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Serialization error while encoding a value
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// A writer panicked while holding the store lock
    #[error("Storage lock poisoned")]
    Poisoned,

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl StorageError {
    /// Create a malformed-value error
    pub fn malformed(key: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Malformed {
            key: key.into(),
            source,
        }
    }
}
