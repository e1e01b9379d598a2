//! Store-level error type.

use thiserror::Error;

/// Error surfaced by a [`MistakeStore`](crate::MistakeStore) implementation.
///
/// The engine never inspects the message; it propagates the error to the
/// caller unchanged. Implementations map their backend failures (connection
/// loss, constraint violations, serialization trouble) into [`Backend`]
/// with a human-readable description.
///
/// [`Backend`]: StoreError::Backend
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store failed to execute an operation.
    #[error("storage backend error: {0}")]
    Backend(String),
}
