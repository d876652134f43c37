//! Pictograph data model: locations, positions, per-hand motion, beats, and sequences.
//!
//! A [`Beat`] carries a [`HandAttributes`] record for each [`Color`]; a
//! [`Sequence`] is a start-position beat followed by numbered beats whose start
//! position always equals the previous beat's end position.

pub mod beat;
pub mod location;
pub mod motion;
pub mod position;
pub mod sequence;

pub use beat::{
    is_type1_hybrid, Beat, Color, Direction, HandAttributes, Timing, TYPE1_HYBRID_LETTERS,
};
pub use location::{HandRotationDirection, Location, MirrorAxis};
pub use motion::{MotionType, Orientation, RotationSense, Turns};
pub use position::{Position, PositionGroup};
pub use sequence::{GridMode, Level, Sequence, SequenceMetadata};
