//! Sequences: metadata, a start-position beat, and numbered beats.
//!
//! The start-position beat is a distinct field rather than the first list
//! element, so beat `k` always lives at `beats[k - 1]` and nothing ever has to
//! be popped and reinserted to keep indices straight.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::beat::Beat;
use crate::generator::GenerationError;

/// Which half of the 8-point grid a sequence moves on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridMode {
    /// Cardinal points only.
    #[default]
    Diamond,
    /// Intercardinal points only.
    Box,
}

/// Difficulty level: 1 has no turns, 2 whole turns, 3 half turns and floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Level {
    #[default]
    One,
    Two,
    Three,
}

impl Level {
    /// Levels 2 and 3 carry turns; level 1 never does.
    pub fn has_turns(self) -> bool {
        self != Level::One
    }
}

impl TryFrom<u8> for Level {
    type Error = GenerationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Level::One),
            2 => Ok(Level::Two),
            3 => Ok(Level::Three),
            other => Err(GenerationError::InvalidLevel(other.to_string())),
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> u8 {
        match level {
            Level::One => 1,
            Level::Two => 2,
            Level::Three => 3,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

impl FromStr for Level {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GenerationError::InvalidLevel(s.to_string());
        let n: u8 = s.trim().parse().map_err(|_| invalid())?;
        Level::try_from(n).map_err(|_| invalid())
    }
}

/// Descriptive data carried alongside the beats.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SequenceMetadata {
    /// Concatenated beat letters.
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub level: Level,
    #[serde(default)]
    pub grid_mode: GridMode,
    /// The sequence ends where it started.
    #[serde(default)]
    pub is_circular: bool,
    /// The sequence was extended by a permutation of its opening word. Says
    /// nothing about whether it returns home; see `is_circular`.
    #[serde(default)]
    pub can_be_cap: bool,
}

/// An ordered sequence of beats under construction or finished.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sequence {
    pub metadata: SequenceMetadata,
    start: Option<Beat>,
    beats: Vec<Beat>,
}

impl Sequence {
    /// An empty sequence with no start position yet.
    pub fn new(metadata: SequenceMetadata) -> Self {
        Self {
            metadata,
            start: None,
            beats: Vec::new(),
        }
    }

    /// A sequence that opens with the given start-position beat.
    pub fn with_start(metadata: SequenceMetadata, start: Beat) -> Self {
        let mut sequence = Self::new(metadata);
        sequence.set_start(start);
        sequence
    }

    /// Install the start-position beat, forcing its beat number to 0.
    pub fn set_start(&mut self, mut start: Beat) {
        start.beat_number = 0;
        self.start = Some(start);
    }

    pub fn start(&self) -> Option<&Beat> {
        self.start.as_ref()
    }

    pub fn has_start(&self) -> bool {
        self.start.is_some()
    }

    /// The start-position beat, or `MissingStartPosition`.
    pub fn require_start(&self) -> Result<&Beat, GenerationError> {
        self.start.as_ref().ok_or(GenerationError::MissingStartPosition)
    }

    /// Numbered beats, excluding the start position.
    pub fn beats(&self) -> &[Beat] {
        &self.beats
    }

    /// Number of numbered beats.
    pub fn len(&self) -> usize {
        self.beats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beats.is_empty()
    }

    /// Beat by 1-based beat number.
    pub fn beat(&self, number: usize) -> Option<&Beat> {
        number.checked_sub(1).and_then(|i| self.beats.get(i))
    }

    /// The most recent beat, falling back to the start position.
    pub fn last(&self) -> Option<&Beat> {
        self.beats.last().or(self.start.as_ref())
    }

    /// Number the next appended beat will carry.
    pub fn next_beat_number(&self) -> u32 {
        self.beats.len() as u32 + 1
    }

    /// Append a beat, renumbering it as the next beat.
    pub fn push(&mut self, mut beat: Beat) {
        beat.beat_number = self.next_beat_number();
        self.beats.push(beat);
    }

    /// Letters of all numbered beats in order.
    pub fn letters(&self) -> String {
        self.beats.iter().map(|b| b.letter.as_str()).collect()
    }

    /// Rewrite `metadata.word` from the current beats.
    pub fn refresh_word(&mut self) {
        self.metadata.word = self.letters();
    }

    /// Whether the last beat ends on the start position.
    pub fn ends_where_it_started(&self) -> bool {
        match (self.start.as_ref(), self.beats.last()) {
            (Some(start), Some(last)) => start.end_position == last.end_position,
            _ => false,
        }
    }
}
