//! Hand locations on the 8-point compass grid and the path a hand takes between them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::generator::GenerationError;

/// One of the eight compass points a hand can occupy.
///
/// Variants are ordered clockwise from north, so `index()` steps by one per
/// eighth of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Location {
    /// All locations, clockwise from north.
    pub const ALL: [Location; 8] = [
        Location::N,
        Location::NE,
        Location::E,
        Location::SE,
        Location::S,
        Location::SW,
        Location::W,
        Location::NW,
    ];

    /// The four cardinal points used by the diamond grid.
    pub const DIAMOND: [Location; 4] = [Location::N, Location::E, Location::S, Location::W];

    /// The four intercardinal points used by the box grid.
    pub const BOX: [Location; 4] = [Location::NE, Location::SE, Location::SW, Location::NW];

    /// Clockwise index from north (0..8).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Location at the given clockwise index, wrapping modulo 8.
    pub fn from_index(index: u8) -> Self {
        Self::ALL[(index % 8) as usize]
    }

    /// Step this location clockwise by `eighths` eighths of a turn.
    pub fn step(self, eighths: u8) -> Self {
        Self::from_index(self.index() + eighths % 8)
    }

    /// Whether this location sits on a cardinal point.
    pub fn is_cardinal(self) -> bool {
        self.index() % 2 == 0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Location::N => "n",
            Location::NE => "ne",
            Location::E => "e",
            Location::SE => "se",
            Location::S => "s",
            Location::SW => "sw",
            Location::W => "w",
            Location::NW => "nw",
        };
        f.write_str(s)
    }
}

impl FromStr for Location {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|loc| loc.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown location: {s}"))
    }
}

/// The axis a mirror reflection is taken across.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MirrorAxis {
    /// North-south axis: east and west trade places.
    #[default]
    Vertical,
    /// East-west axis: north and south trade places.
    Horizontal,
}

/// How a hand's location changed across one beat.
///
/// Derived from a template beat's start/end locations and then replayed
/// against a different starting location by the rotated executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandRotationDirection {
    Clockwise,
    CounterClockwise,
    Dash,
    Static,
}

impl HandRotationDirection {
    /// Classify the hand path from `start` to `end`.
    ///
    /// Quarter steps are clockwise or counter-clockwise, a half step is a dash,
    /// and no movement is static. Eighth-turn moves never occur within one grid.
    pub fn between(start: Location, end: Location) -> Result<Self, GenerationError> {
        let delta = (end.index() + 8 - start.index()) % 8;
        match delta {
            0 => Ok(Self::Static),
            2 => Ok(Self::Clockwise),
            4 => Ok(Self::Dash),
            6 => Ok(Self::CounterClockwise),
            _ => Err(GenerationError::InvalidHandTransition { start, end }),
        }
    }
}
