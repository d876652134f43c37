//! Symmetry tables: the fixed bijections the permutation executors replay beats through.
//!
//! Location maps are keyed by [`HandRotationDirection`]: a quarter map for each
//! rotational direction, the half map for dashes, and identity for static
//! hands. Position maps apply the same rotation or reflection to both hands at
//! once. The eligibility sets list the (start, end) position pairs a word must
//! span before it can be closed by quartered or halved rotation.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::generator::RotationType;
use crate::pictograph::{HandRotationDirection, Location, MirrorAxis, Position};

/// Location one quarter turn clockwise.
pub fn quarter_cw(loc: Location) -> Location {
    use Location::*;
    match loc {
        N => E,
        NE => SE,
        E => S,
        SE => SW,
        S => W,
        SW => NW,
        W => N,
        NW => NE,
    }
}

/// Location one quarter turn counter-clockwise.
pub fn quarter_ccw(loc: Location) -> Location {
    use Location::*;
    match loc {
        N => W,
        NE => NW,
        E => N,
        SE => NE,
        S => E,
        SW => SE,
        W => S,
        NW => SW,
    }
}

/// Location a half turn away.
pub fn half(loc: Location) -> Location {
    use Location::*;
    match loc {
        N => S,
        NE => SW,
        E => W,
        SE => NW,
        S => N,
        SW => NE,
        W => E,
        NW => SE,
    }
}

/// Replay a hand path of kind `direction` starting from `loc`.
pub fn rotate_location(loc: Location, direction: HandRotationDirection) -> Location {
    match direction {
        HandRotationDirection::Clockwise => quarter_cw(loc),
        HandRotationDirection::CounterClockwise => quarter_ccw(loc),
        HandRotationDirection::Dash => half(loc),
        HandRotationDirection::Static => loc,
    }
}

/// Reflect a location across `axis`.
pub fn mirror_location(loc: Location, axis: MirrorAxis) -> Location {
    use Location::*;
    match axis {
        MirrorAxis::Vertical => match loc {
            N => N,
            NE => NW,
            E => W,
            SE => SW,
            S => S,
            SW => SE,
            W => E,
            NW => NE,
        },
        MirrorAxis::Horizontal => match loc {
            N => S,
            NE => SE,
            E => E,
            SE => NE,
            S => N,
            SW => NW,
            W => W,
            NW => SW,
        },
    }
}

/// Apply a location map to both hands of a position.
fn map_position(pos: Position, f: impl Fn(Location) -> Location) -> Position {
    let (blue, red) = pos.locations();
    // Rotations and reflections keep hand separation and grid, so the image
    // pair is always in the position table.
    Position::from_locations(f(blue), f(red)).unwrap_or(pos)
}

/// Position rotated a quarter turn clockwise.
pub fn position_quarter_cw(pos: Position) -> Position {
    map_position(pos, quarter_cw)
}

/// Position rotated a quarter turn counter-clockwise.
pub fn position_quarter_ccw(pos: Position) -> Position {
    map_position(pos, quarter_ccw)
}

/// Position rotated a half turn.
pub fn position_half(pos: Position) -> Position {
    map_position(pos, half)
}

/// Position reflected across `axis`.
pub fn mirror_position(pos: Position, axis: MirrorAxis) -> Position {
    map_position(pos, |loc| mirror_location(loc, axis))
}

/// Positions a word starting at `start` may end on to close under `rotation`.
///
/// Quartered closure has two candidates (a quarter either way); halved has one.
pub fn closing_positions(start: Position, rotation: RotationType) -> Vec<Position> {
    match rotation {
        RotationType::Quartered => vec![position_quarter_cw(start), position_quarter_ccw(start)],
        RotationType::Halved => vec![position_half(start)],
    }
}

static QUARTERED_PAIRS: Lazy<HashSet<(Position, Position)>> = Lazy::new(|| {
    Position::all()
        .flat_map(|p| [(p, position_quarter_cw(p)), (p, position_quarter_ccw(p))])
        .collect()
});

static HALVED_PAIRS: Lazy<HashSet<(Position, Position)>> =
    Lazy::new(|| Position::all().map(|p| (p, position_half(p))).collect());

/// (start, end) pairs that close under four quarter rotations.
pub fn quartered_pairs() -> &'static HashSet<(Position, Position)> {
    &QUARTERED_PAIRS
}

/// (start, end) pairs that close under two half rotations.
pub fn halved_pairs() -> &'static HashSet<(Position, Position)> {
    &HALVED_PAIRS
}

/// Whether a word spanning `start` → `end` can be closed by `rotation`.
pub fn is_eligible(start: Position, end: Position, rotation: RotationType) -> bool {
    match rotation {
        RotationType::Quartered => QUARTERED_PAIRS.contains(&(start, end)),
        RotationType::Halved => HALVED_PAIRS.contains(&(start, end)),
    }
}

/// The rotation a `start` → `end` word closes under, if any.
pub fn rotation_for(start: Position, end: Position) -> Option<RotationType> {
    [RotationType::Quartered, RotationType::Halved]
        .into_iter()
        .find(|&r| is_eligible(start, end, r))
}
