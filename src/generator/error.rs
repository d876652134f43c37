//! Error types for sequence generation.

use thiserror::Error;

use crate::pictograph::{Location, Position};

/// An error raised while generating or permuting a sequence.
///
/// Errors propagate to the caller as soon as they are detected. Beats already
/// appended stay appended: generation is not atomic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    /// No candidate for the last beat of a word ends on the closing position.
    #[error("no option for beat {beat_number} ends on required position {required}")]
    NoMatchingOption { beat_number: u32, required: Position },

    /// The option picker returned nothing at all.
    #[error("option picker returned no candidates for beat {beat_number}")]
    EmptyOptions { beat_number: u32 },

    #[error("invalid rotation type: {0}")]
    InvalidRotationType(String),

    #[error("invalid permutation type: {0}")]
    InvalidPermutationType(String),

    #[error("invalid prop continuity: {0}")]
    InvalidPropContinuity(String),

    #[error("invalid level: {0} (expected 1, 2 or 3)")]
    InvalidLevel(String),

    /// The word's (start, end) pair does not close under the permutation.
    #[error("word {start} -> {end} is not eligible for permutation")]
    IneligibleForPermutation { start: Position, end: Position },

    /// The requested length does not split into whole words.
    #[error("length {length} is not a positive multiple of {divisor}")]
    IndivisibleLength { length: usize, divisor: usize },

    #[error("sequence has no start position")]
    MissingStartPosition,

    #[error("no position for blue at {blue}, red at {red}")]
    UnknownPosition { blue: Location, red: Location },

    #[error("hand path {start} -> {end} is not a quarter, half, or static move")]
    InvalidHandTransition { start: Location, end: Location },
}
