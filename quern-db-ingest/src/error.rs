//! Ingestion error types

use thiserror::Error;

/// Store-level failure raised by a connection during add/commit/begin
///
/// Always fatal to the ongoing load. The committer wraps it (never swallows
/// it) and propagates immediately; there is no retry or rollback-and-continue.
#[derive(Debug, Error)]
#[error("store failure: {message}")]
pub struct StoreError {
    message: String,
}

impl StoreError {
    /// Create a store error with the given message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure message reported by the store
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Ingestion errors
#[derive(Debug, Error)]
pub enum IngestError {
    /// Store-level failure during add/commit/begin
    #[error("{0}")]
    Store(#[from] StoreError),

    /// Chunk size must be a positive integer
    #[error("chunk size must be at least 1")]
    InvalidChunkSize,
}

/// Result type for ingestion operations
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::new("disk full");
        assert_eq!(err.message(), "disk full");
        assert_eq!(err.to_string(), "store failure: disk full");
    }

    #[test]
    fn test_store_error_wraps_into_ingest_error() {
        let err = IngestError::from(StoreError::new("disk full"));
        assert!(matches!(err, IngestError::Store(_)));
        assert_eq!(err.to_string(), "store failure: disk full");
    }

    #[test]
    fn test_invalid_chunk_size_display() {
        assert_eq!(
            IngestError::InvalidChunkSize.to_string(),
            "chunk size must be at least 1"
        );
    }
}
