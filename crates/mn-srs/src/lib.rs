//! SRS (Spaced Repetition System) library for the mistake notebook.
//!
//! This crate provides the pure scheduling and mastery-tracking primitives
//! used to decide when a recorded mistake should be revisited and how well it
//! has been learned. Everything here is a total function of its arguments:
//! the current instant is always passed in, never read from the system clock,
//! so callers and tests get deterministic results.

pub mod mastery;
pub mod outcome;
pub mod schedule;

pub use mastery::MasteryStatus;
pub use outcome::{Outcome, ParseOutcomeError};
