//! Letter permutation engine.
//!
//! Given a word and a minimum length, the engine enumerates every
//! position-preserving subset of the letters within the length range,
//! expands each subset into all of its orderings, classifies the distinct
//! strings against a dictionary, and builds sorted reports.
//!
//! # Architecture
//!
//! - [`generator`] -- Subset enumeration and arrangement expansion
//! - [`classifier`] -- Dictionary membership partitioning
//! - [`report`] -- Sorted and length-grouped report construction
//! - [`dictionary`] -- Word set, providers and the shared snapshot store
//! - [`control`] -- Cancellation and size limits
//! - [`pipeline`] -- One full invocation, wiring the stages together
//! - [`handle`] -- Long-lived entry point owning the dictionary store
//! - [`worker`] -- Running an invocation on a background thread

use std::fmt;

use reworded_core::InputError;

pub mod classifier;
pub mod control;
pub mod dictionary;
pub mod generator;
pub mod handle;
pub mod pipeline;
pub mod report;
pub mod worker;

/// Which configured limit stopped a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    /// Input word longer than `GenerationLimits::max_letters`.
    Letters,
    /// More distinct strings than `GenerationLimits::max_generated`.
    Generated,
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LimitKind::Letters => f.write_str("letter count"),
            LimitKind::Generated => f.write_str("generated string"),
        }
    }
}

/// Error type for a single generation run.
///
/// Every failure returns the caller to its idle state; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
    #[error("no dictionary loaded")]
    DictionaryUnavailable,
    #[error("generation cancelled")]
    Cancelled,
    #[error("{kind} limit of {limit} exceeded")]
    LimitExceeded { kind: LimitKind, limit: usize },
    #[error("generation worker exited without a result")]
    WorkerDisconnected,
}
