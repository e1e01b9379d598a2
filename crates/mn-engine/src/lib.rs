//! Review scheduling and recommendation engine for the mistake notebook.
//!
//! This crate orchestrates the pure primitives from `mn-srs` over the store
//! abstraction from `mn-store`:
//!
//! * [`review`] records one review outcome: it derives the item's new review
//!   count from its history, schedules the next visit, appends the immutable
//!   review record, and writes the updated mastery state back onto the item.
//! * [`recommendation`] turns a learner's outstanding mistakes into a
//!   prioritized study queue and answers "how much is due today".
//! * [`report`] aggregates notebook-wide and trailing-window study numbers.
//!
//! Every operation takes the current instant as an argument, so behavior is
//! a deterministic function of the store contents and the caller's clock.

pub mod error;
pub mod recommendation;
pub mod report;
pub mod review;

pub use error::EngineError;
pub use review::ReviewSubmission;
