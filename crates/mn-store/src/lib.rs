//! Data model and store abstraction for the mistake notebook.
//!
//! The review engine does not own storage: it reads and writes mistakes and
//! their review history through the [`MistakeStore`] trait, which the
//! embedding application implements against its database of choice. This
//! crate defines the models transferred across that boundary and ships
//! [`MemoryStore`], an in-memory implementation that doubles as the reference
//! semantics for the trait contract and as the substrate for tests.

pub mod error;
pub mod memory;
pub mod models;
pub mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use models::{ErrorReason, Mistake, MistakeUpdate, NewReviewRecord, ReviewRecord};
pub use store::MistakeStore;
