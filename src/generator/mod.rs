//! Sequence generation engine: base-word construction and symmetric closure.
//!
//! [`CircularSequenceBuilder`] builds a base word one beat at a time from
//! candidates supplied by an [`OptionPicker`], shaping each pick with the
//! [`BaseSequenceBuilder`] primitives. Once the word is complete and eligible,
//! it hands the sequence to a [`RotatedPermutationExecutor`] or
//! [`MirroredPermutationExecutor`], which replay the word under a rotation or
//! reflection until the requested length is reached.
//!
//! The engine owns no collaborator logic: option enumeration, orientation
//! rules, start-position choice, and turn allocation arrive through the traits
//! below. Deterministic implementations live in [`crate::reference`].

pub mod base;
pub mod circular;
pub mod config;
pub mod error;
pub mod mirrored;
pub mod rotated;

pub use base::BaseSequenceBuilder;
pub use circular::CircularSequenceBuilder;
pub use config::GeneratorConfig;
pub use error::GenerationError;
pub use mirrored::MirroredPermutationExecutor;
pub use rotated::RotatedPermutationExecutor;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::pictograph::{Beat, Color, Level, MirrorAxis, Orientation, Sequence, Turns};

/// Enumerates legal next beats for the current tail of a sequence.
///
/// Candidates carry start/end positions and locations, motion types, letters,
/// and the rotation sense of shift hands. Orientations and the spin of
/// dash/static hands are filled in by the engine.
pub trait OptionPicker {
    fn next_options(&self, sequence: &Sequence) -> Vec<Beat>;
}

/// Derives a hand's end orientation from its motion, turns, and start orientation.
pub trait OrientationCalculator {
    fn end_orientation(&self, beat: &Beat, color: Color) -> Orientation;
}

/// Installs a start-position beat on a sequence that has none.
pub trait StartPositionSelector {
    fn add_start_position(&mut self, sequence: &mut Sequence);
}

/// Distributes turn counts over the beats of a base word.
pub trait TurnIntensityAllocator {
    /// One value per word beat for each hand, numeric or [`Turns::Float`].
    fn allocate(
        &mut self,
        word_length: usize,
        level: Level,
        intensity: f64,
    ) -> (Vec<Turns>, Vec<Turns>);
}

/// Degree of rotation a rotated permutation applies per word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationType {
    /// Four words, each a quarter turn on from the last.
    #[default]
    Quartered,
    /// Two words, the second a half turn on from the first.
    Halved,
}

impl RotationType {
    /// How many words make up the full sequence.
    pub fn words_per_sequence(self) -> usize {
        match self {
            RotationType::Quartered => 4,
            RotationType::Halved => 2,
        }
    }
}

impl FromStr for RotationType {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quartered" => Ok(RotationType::Quartered),
            "halved" => Ok(RotationType::Halved),
            _ => Err(GenerationError::InvalidRotationType(s.to_string())),
        }
    }
}

impl fmt::Display for RotationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RotationType::Quartered => f.write_str("quartered"),
            RotationType::Halved => f.write_str("halved"),
        }
    }
}

/// Which symmetry closes the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermutationType {
    #[default]
    Rotated,
    Mirrored,
}

impl FromStr for PermutationType {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rotated" => Ok(PermutationType::Rotated),
            "mirrored" => Ok(PermutationType::Mirrored),
            _ => Err(GenerationError::InvalidPermutationType(s.to_string())),
        }
    }
}

impl fmt::Display for PermutationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PermutationType::Rotated => f.write_str("rotated"),
            PermutationType::Mirrored => f.write_str("mirrored"),
        }
    }
}

/// How dash/static prop spin is chosen while building a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropContinuity {
    /// One spin per hand for the whole word; options are filtered to match.
    #[default]
    Continuous,
    /// Every dash/static hand with turns gets its own random spin.
    Random,
}

impl FromStr for PropContinuity {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "continuous" => Ok(PropContinuity::Continuous),
            "random" => Ok(PropContinuity::Random),
            _ => Err(GenerationError::InvalidPropContinuity(s.to_string())),
        }
    }
}

/// Parameters for one `build_sequence` call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Total beats in the finished sequence, excluding the start position.
    pub length: usize,
    /// Upper bound on turns handed to the allocator.
    pub turn_intensity: f64,
    pub level: Level,
    pub rotation_type: RotationType,
    pub permutation_type: PermutationType,
    pub prop_continuity: PropContinuity,
    /// Reflection axis for mirrored permutations.
    pub mirror_axis: MirrorAxis,
    /// Exchange hands in mirrored permutations.
    pub color_swap: bool,
}

impl GenerationRequest {
    /// Number of beats in the base word.
    ///
    /// Rejects lengths that do not split into whole words.
    pub fn word_length(&self) -> Result<usize, GenerationError> {
        let divisor = match self.permutation_type {
            PermutationType::Mirrored => 2,
            PermutationType::Rotated => self.rotation_type.words_per_sequence(),
        };
        if self.length == 0 || self.length % divisor != 0 {
            return Err(GenerationError::IndivisibleLength {
                length: self.length,
                divisor,
            });
        }
        Ok(self.length / divisor)
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: 16,
            turn_intensity: 1.0,
            level: Level::One,
            rotation_type: RotationType::Quartered,
            permutation_type: PermutationType::Rotated,
            prop_continuity: PropContinuity::Continuous,
            mirror_axis: MirrorAxis::Vertical,
            color_swap: false,
        }
    }
}

/// What `build_sequence` did after the base word was finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// The word was permuted and `added` beats were appended.
    Extended { added: usize },
    /// The word did not close under the requested symmetry; only the word was built.
    WordOnly,
}
