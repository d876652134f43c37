//! Per-hand motion vocabulary: motion classes, prop spin, turn counts, orientation.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Manipulation class of one hand's motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionType {
    Pro,
    Anti,
    /// Transitional: the effective class is deferred. Always paired with the
    /// remembered `prefloat_*` fields on the hand.
    Float,
    Dash,
    Static,
}

impl MotionType {
    /// Pro and anti are the shift motions that move a hand a quarter turn.
    pub fn is_shift(self) -> bool {
        matches!(self, MotionType::Pro | MotionType::Anti)
    }

    /// Dash and static hands have no inherent prop spin until one is resolved.
    pub fn is_dash_or_static(self) -> bool {
        matches!(self, MotionType::Dash | MotionType::Static)
    }
}

impl fmt::Display for MotionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MotionType::Pro => "pro",
            MotionType::Anti => "anti",
            MotionType::Float => "float",
            MotionType::Dash => "dash",
            MotionType::Static => "static",
        };
        f.write_str(s)
    }
}

/// Spin direction of the prop itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationSense {
    Clockwise,
    CounterClockwise,
    #[default]
    NoRotation,
}

impl RotationSense {
    /// Pick clockwise or counter-clockwise with equal probability.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            RotationSense::Clockwise
        } else {
            RotationSense::CounterClockwise
        }
    }

    /// Reflected spin: clockwise and counter-clockwise swap, no-rotation stays.
    pub fn mirrored(self) -> Self {
        match self {
            RotationSense::Clockwise => RotationSense::CounterClockwise,
            RotationSense::CounterClockwise => RotationSense::Clockwise,
            RotationSense::NoRotation => RotationSense::NoRotation,
        }
    }
}

/// Number of turns a prop makes during a beat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Turns {
    Numeric(f64),
    /// The hand floats; only valid alongside `MotionType::Float`.
    Float,
}

impl Turns {
    pub const ZERO: Turns = Turns::Numeric(0.0);

    /// True for a numeric turn count strictly above zero.
    pub fn is_positive(self) -> bool {
        matches!(self, Turns::Numeric(t) if t > 0.0)
    }

    pub fn is_float(self) -> bool {
        matches!(self, Turns::Float)
    }

    /// Numeric value, if any.
    pub fn value(self) -> Option<f64> {
        match self {
            Turns::Numeric(t) => Some(t),
            Turns::Float => None,
        }
    }
}

impl Default for Turns {
    fn default() -> Self {
        Turns::ZERO
    }
}

impl From<f64> for Turns {
    fn from(t: f64) -> Self {
        Turns::Numeric(t)
    }
}

impl fmt::Display for Turns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Turns::Numeric(t) => write!(f, "{t}"),
            Turns::Float => f.write_str("fl"),
        }
    }
}

/// Which way the prop faces relative to the hand.
///
/// The engine never interprets orientation; it only carries it from one beat
/// to the next and asks the orientation calculator for end values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    In,
    Out,
    Clock,
    Counter,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Orientation::In => "in",
            Orientation::Out => "out",
            Orientation::Clock => "clock",
            Orientation::Counter => "counter",
        };
        f.write_str(s)
    }
}
