//! Engine-level errors.

use thiserror::Error;

use mn_store::StoreError;

/// Error returned by engine operations.
///
/// Invalid review outcomes never show up here: outcome strings are parsed
/// (and rejected) at the API boundary before the engine is invoked, so the
/// only failure mode left is the backing store.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The backing store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
