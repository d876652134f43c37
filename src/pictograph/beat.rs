//! Beats: one discrete two-handed movement unit.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::location::Location;
use super::motion::{MotionType, Orientation, RotationSense, Turns};
use super::position::Position;

/// Letters whose hands mix a pro and an anti motion. Float turns are never
/// assigned to these letters.
pub const TYPE1_HYBRID_LETTERS: [&str; 8] = ["C", "F", "I", "L", "O", "R", "U", "V"];

/// Whether `letter` belongs to the type-1 hybrid family.
pub fn is_type1_hybrid(letter: &str) -> bool {
    TYPE1_HYBRID_LETTERS.contains(&letter)
}

/// One of the two independently tracked hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Red,
}

impl Color {
    pub const BOTH: [Color; 2] = [Color::Blue, Color::Red];

    /// The other hand.
    pub fn other(self) -> Self {
        match self {
            Color::Blue => Color::Red,
            Color::Red => Color::Blue,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Blue => f.write_str("blue"),
            Color::Red => f.write_str("red"),
        }
    }
}

/// Everything the engine tracks about one hand within a beat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandAttributes {
    pub motion_type: MotionType,
    pub start_orientation: Orientation,
    pub end_orientation: Orientation,
    pub rotation_sense: RotationSense,
    pub start_location: Location,
    pub end_location: Location,
    pub turns: Turns,
    /// Motion type held before the hand was turned into a float.
    #[serde(default)]
    pub prefloat_motion_type: Option<MotionType>,
    /// Prop spin held before the hand was turned into a float.
    #[serde(default)]
    pub prefloat_rotation_sense: Option<RotationSense>,
}

impl HandAttributes {
    /// A hand that moves from `start` to `end` with zero turns and default orientation.
    pub fn new(motion_type: MotionType, start: Location, end: Location) -> Self {
        Self {
            motion_type,
            start_orientation: Orientation::default(),
            end_orientation: Orientation::default(),
            rotation_sense: RotationSense::NoRotation,
            start_location: start,
            end_location: end,
            turns: Turns::ZERO,
            prefloat_motion_type: None,
            prefloat_rotation_sense: None,
        }
    }

    /// A static hand resting at `location`.
    pub fn resting(location: Location) -> Self {
        Self::new(MotionType::Static, location, location)
    }

    pub fn with_rotation_sense(mut self, sense: RotationSense) -> Self {
        self.rotation_sense = sense;
        self
    }

    pub fn with_turns(mut self, turns: impl Into<Turns>) -> Self {
        self.turns = turns.into();
        self
    }
}

/// Relative timing of the two hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timing {
    Split,
    Together,
    #[default]
    None,
}

/// Whether the two hands travel the same or opposite way around the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Same,
    Opp,
    #[default]
    None,
}

/// One movement unit with attributes for both hands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beat {
    /// 0 for the start-position beat, then 1, 2, ... in sequence order.
    pub beat_number: u32,
    pub letter: String,
    pub start_position: Position,
    pub end_position: Position,
    #[serde(default)]
    pub timing: Timing,
    #[serde(default)]
    pub direction: Direction,
    pub blue: HandAttributes,
    pub red: HandAttributes,
}

impl Beat {
    /// A start-position beat: both hands resting at `position`.
    pub fn start_position(letter: &str, position: Position) -> Self {
        let (blue, red) = position.locations();
        Self {
            beat_number: 0,
            letter: letter.to_string(),
            start_position: position,
            end_position: position,
            timing: Timing::None,
            direction: Direction::None,
            blue: HandAttributes::resting(blue),
            red: HandAttributes::resting(red),
        }
    }

    pub fn hand(&self, color: Color) -> &HandAttributes {
        match color {
            Color::Blue => &self.blue,
            Color::Red => &self.red,
        }
    }

    pub fn hand_mut(&mut self, color: Color) -> &mut HandAttributes {
        match color {
            Color::Blue => &mut self.blue,
            Color::Red => &mut self.red,
        }
    }

    /// Exchange the blue and red hand attributes.
    pub fn swap_colors(&mut self) {
        std::mem::swap(&mut self.blue, &mut self.red);
    }
}
