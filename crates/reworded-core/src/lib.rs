//! Shared types for the Re:Worded permutation engine.
//!
//! This crate holds everything the engine and its front ends agree on but
//! that carries no algorithmic content of its own.
//!
//! # Architecture
//!
//! - [`character`] -- ASCII letter classification and lowercasing
//! - [`letters`] -- Validated, lowercased letter slots of one input word
//! - [`threshold`] -- Minimum-length threshold parsing and clamping
//! - [`report`] -- Report shapes handed to the presentation layer

pub mod character;
pub mod letters;
pub mod report;
pub mod threshold;

/// Error type for rejected input words.
///
/// Raised before any enumeration starts, so no partial result exists when
/// one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("input word is empty")]
    Empty,
    #[error("invalid character {ch:?} at position {position}: letters only")]
    NonAlphabetic { ch: char, position: usize },
}
