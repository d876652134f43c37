//! Positions: canonical (blue, red) location pairs.
//!
//! Alpha positions hold the hands opposite each other, beta positions hold them
//! together, and gamma positions hold them a quarter turn apart. Odd-numbered
//! alphas/betas and gammas 1,3,5,7,9,11,13,15 live on the diamond grid; the rest
//! live on the box grid.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::location::Location;
use crate::generator::GenerationError;

/// Family of a position: how far apart the two hands are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionGroup {
    Alpha,
    Beta,
    Gamma,
}

/// A symbolic position label denoting one (blue, red) location pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Alpha1,
    Alpha2,
    Alpha3,
    Alpha4,
    Alpha5,
    Alpha6,
    Alpha7,
    Alpha8,
    Beta1,
    Beta2,
    Beta3,
    Beta4,
    Beta5,
    Beta6,
    Beta7,
    Beta8,
    Gamma1,
    Gamma2,
    Gamma3,
    Gamma4,
    Gamma5,
    Gamma6,
    Gamma7,
    Gamma8,
    Gamma9,
    Gamma10,
    Gamma11,
    Gamma12,
    Gamma13,
    Gamma14,
    Gamma15,
    Gamma16,
}

use Location::{E, N, NE, NW, S, SE, SW, W};

/// (position, blue location, red location).
const POSITION_TABLE: [(Position, Location, Location); 32] = [
    (Position::Alpha1, S, N),
    (Position::Alpha2, SW, NE),
    (Position::Alpha3, W, E),
    (Position::Alpha4, NW, SE),
    (Position::Alpha5, N, S),
    (Position::Alpha6, NE, SW),
    (Position::Alpha7, E, W),
    (Position::Alpha8, SE, NW),
    (Position::Beta1, N, N),
    (Position::Beta2, NE, NE),
    (Position::Beta3, E, E),
    (Position::Beta4, SE, SE),
    (Position::Beta5, S, S),
    (Position::Beta6, SW, SW),
    (Position::Beta7, W, W),
    (Position::Beta8, NW, NW),
    (Position::Gamma1, W, N),
    (Position::Gamma2, NW, NE),
    (Position::Gamma3, N, E),
    (Position::Gamma4, NE, SE),
    (Position::Gamma5, E, S),
    (Position::Gamma6, SE, SW),
    (Position::Gamma7, S, W),
    (Position::Gamma8, SW, NW),
    (Position::Gamma9, E, N),
    (Position::Gamma10, SE, NE),
    (Position::Gamma11, S, E),
    (Position::Gamma12, SW, SE),
    (Position::Gamma13, W, S),
    (Position::Gamma14, NW, SW),
    (Position::Gamma15, N, W),
    (Position::Gamma16, NE, NW),
];

impl Position {
    /// Every position in table order.
    pub fn all() -> impl Iterator<Item = Position> {
        POSITION_TABLE.iter().map(|&(p, _, _)| p)
    }

    /// Look up the position for a (blue, red) location pair.
    pub fn from_locations(blue: Location, red: Location) -> Result<Self, GenerationError> {
        POSITION_TABLE
            .iter()
            .find(|&&(_, b, r)| b == blue && r == red)
            .map(|&(p, _, _)| p)
            .ok_or(GenerationError::UnknownPosition { blue, red })
    }

    /// The (blue, red) locations this position denotes.
    pub fn locations(self) -> (Location, Location) {
        let (_, blue, red) = POSITION_TABLE[self as usize];
        (blue, red)
    }

    pub fn group(self) -> PositionGroup {
        match self as usize {
            0..=7 => PositionGroup::Alpha,
            8..=15 => PositionGroup::Beta,
            _ => PositionGroup::Gamma,
        }
    }

    /// The same pair with the hands exchanged.
    pub fn swap_hands(self) -> Self {
        let (blue, red) = self.locations();
        // Every pair in the table has its swapped pair in the table too.
        Self::from_locations(red, blue).unwrap_or(self)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, n) = match self.group() {
            PositionGroup::Alpha => ("alpha", *self as usize + 1),
            PositionGroup::Beta => ("beta", *self as usize - 7),
            PositionGroup::Gamma => ("gamma", *self as usize - 15),
        };
        write!(f, "{name}{n}")
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .find(|p| p.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown position: {s}"))
    }
}
