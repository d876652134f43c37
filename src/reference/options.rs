//! Grid option picker: every combination of single-hand moves on the active grid.

use crate::generator::OptionPicker;
use crate::pictograph::{
    Beat, Direction, HandAttributes, HandRotationDirection, Location, MotionType, Position,
    PositionGroup, RotationSense, Sequence, Timing,
};
use crate::symmetry;

/// One hand's candidate move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HandMove {
    motion_type: MotionType,
    path: HandRotationDirection,
    rotation_sense: RotationSense,
}

/// The six moves a hand can make from any location: rest, dash across, or a
/// pro/anti quarter in either direction.
const HAND_MOVES: [HandMove; 6] = [
    HandMove {
        motion_type: MotionType::Static,
        path: HandRotationDirection::Static,
        rotation_sense: RotationSense::NoRotation,
    },
    HandMove {
        motion_type: MotionType::Dash,
        path: HandRotationDirection::Dash,
        rotation_sense: RotationSense::NoRotation,
    },
    HandMove {
        motion_type: MotionType::Pro,
        path: HandRotationDirection::Clockwise,
        rotation_sense: RotationSense::Clockwise,
    },
    HandMove {
        motion_type: MotionType::Pro,
        path: HandRotationDirection::CounterClockwise,
        rotation_sense: RotationSense::CounterClockwise,
    },
    HandMove {
        motion_type: MotionType::Anti,
        path: HandRotationDirection::Clockwise,
        rotation_sense: RotationSense::CounterClockwise,
    },
    HandMove {
        motion_type: MotionType::Anti,
        path: HandRotationDirection::CounterClockwise,
        rotation_sense: RotationSense::Clockwise,
    },
];

/// Enumerates all 36 two-handed moves from the sequence's current position.
///
/// Hands stay on the grid they start on, so every candidate's end pair is a
/// valid position. Dash and static hands are offered without spin.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridOptionPicker;

impl OptionPicker for GridOptionPicker {
    fn next_options(&self, sequence: &Sequence) -> Vec<Beat> {
        let Some(last) = sequence.last() else {
            return Vec::new();
        };
        let from = last.end_position;
        let (blue_start, red_start) = (last.blue.end_location, last.red.end_location);

        let mut options = Vec::with_capacity(HAND_MOVES.len() * HAND_MOVES.len());
        for blue in HAND_MOVES {
            for red in HAND_MOVES {
                let blue_end = symmetry::rotate_location(blue_start, blue.path);
                let red_end = symmetry::rotate_location(red_start, red.path);
                let Ok(to) = Position::from_locations(blue_end, red_end) else {
                    continue;
                };
                options.push(Beat {
                    beat_number: 0,
                    letter: letter_for(blue, red, from, to).to_string(),
                    start_position: from,
                    end_position: to,
                    timing: timing_for(from, blue, red),
                    direction: direction_for(blue, red),
                    blue: hand(blue, blue_start, blue_end),
                    red: hand(red, red_start, red_end),
                });
            }
        }
        options
    }
}

fn hand(m: HandMove, start: Location, end: Location) -> HandAttributes {
    HandAttributes::new(m.motion_type, start, end).with_rotation_sense(m.rotation_sense)
}

/// Letter for a two-handed move.
///
/// Shift pairs pick a three-letter family from the start/end position groups
/// (pro-pro, anti-anti, then the hybrid); other pairs get a fixed letter.
fn letter_for(blue: HandMove, red: HandMove, from: Position, to: Position) -> &'static str {
    use MotionType::*;
    match (blue.motion_type, red.motion_type) {
        (Pro | Anti, Pro | Anti) => {
            let family = match (from.group(), to.group()) {
                (PositionGroup::Alpha, PositionGroup::Alpha) => ["A", "B", "C"],
                (PositionGroup::Alpha, _) => ["D", "E", "F"],
                (PositionGroup::Beta, PositionGroup::Alpha) => ["G", "H", "I"],
                (PositionGroup::Beta, _) => ["J", "K", "L"],
                _ if blue.path == red.path => ["M", "N", "O"],
                _ => ["P", "Q", "R"],
            };
            match (blue.motion_type, red.motion_type) {
                (Pro, Pro) => family[0],
                (Anti, Anti) => family[1],
                _ => family[2],
            }
        }
        (Pro, Dash) | (Dash, Pro) => "W",
        (Anti, Dash) | (Dash, Anti) => "X",
        (Pro, Static) | (Static, Pro) => "Y",
        (Anti, Static) | (Static, Anti) => "Z",
        (Dash, Dash) => "Φ",
        (Dash, Static) | (Static, Dash) => "Ψ",
        _ => "Ω",
    }
}

fn timing_for(from: Position, blue: HandMove, red: HandMove) -> Timing {
    if blue.motion_type == MotionType::Static && red.motion_type == MotionType::Static {
        return Timing::None;
    }
    match from.group() {
        PositionGroup::Alpha => Timing::Split,
        PositionGroup::Beta => Timing::Together,
        PositionGroup::Gamma => Timing::None,
    }
}

fn direction_for(blue: HandMove, red: HandMove) -> Direction {
    use HandRotationDirection::*;
    match (blue.path, red.path) {
        (Static, _) | (_, Static) => Direction::None,
        (a, b) if a == b => Direction::Same,
        _ => Direction::Opp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pictograph::{is_type1_hybrid, SequenceMetadata};

    fn opening(position: Position) -> Sequence {
        Sequence::with_start(SequenceMetadata::default(), Beat::start_position("α", position))
    }

    #[test]
    fn offers_every_hand_combination() {
        let options = GridOptionPicker.next_options(&opening(Position::Alpha1));
        assert_eq!(options.len(), 36);
        assert!(options.iter().all(|o| o.start_position == Position::Alpha1));
    }

    #[test]
    fn every_diamond_position_is_reachable() {
        let options = GridOptionPicker.next_options(&opening(Position::Gamma11));
        for blue in Location::DIAMOND {
            for red in Location::DIAMOND {
                let target = Position::from_locations(blue, red).unwrap();
                assert!(options.iter().any(|o| o.end_position == target), "{target}");
            }
        }
    }

    #[test]
    fn box_grid_stays_on_box() {
        let options = GridOptionPicker.next_options(&opening(Position::Beta4));
        assert!(options
            .iter()
            .all(|o| !o.blue.end_location.is_cardinal() && !o.red.end_location.is_cardinal()));
    }

    #[test]
    fn pro_spins_with_path_and_anti_against() {
        let options = GridOptionPicker.next_options(&opening(Position::Alpha1));
        for o in &options {
            let path =
                HandRotationDirection::between(o.blue.start_location, o.blue.end_location).unwrap();
            match (o.blue.motion_type, path) {
                (MotionType::Pro, HandRotationDirection::Clockwise)
                | (MotionType::Anti, HandRotationDirection::CounterClockwise) => {
                    assert_eq!(o.blue.rotation_sense, RotationSense::Clockwise)
                }
                (MotionType::Dash | MotionType::Static, _) => {
                    assert_eq!(o.blue.rotation_sense, RotationSense::NoRotation)
                }
                _ => assert_eq!(o.blue.rotation_sense, RotationSense::CounterClockwise),
            }
        }
    }

    #[test]
    fn mixed_shifts_get_hybrid_letters() {
        let options = GridOptionPicker.next_options(&opening(Position::Alpha1));
        for o in &options {
            let mixed = o.blue.motion_type.is_shift()
                && o.red.motion_type.is_shift()
                && o.blue.motion_type != o.red.motion_type;
            assert_eq!(is_type1_hybrid(&o.letter), mixed, "{}", o.letter);
        }
    }

    #[test]
    fn alpha_pro_same_direction_is_a() {
        let options = GridOptionPicker.next_options(&opening(Position::Alpha1));
        let a = options
            .iter()
            .find(|o| {
                o.blue.motion_type == MotionType::Pro
                    && o.red.motion_type == MotionType::Pro
                    && o.end_position == Position::Alpha3
            })
            .unwrap();
        assert_eq!(a.letter, "A");
        assert_eq!(a.direction, Direction::Same);
        assert_eq!(a.timing, Timing::Split);
    }

    #[test]
    fn empty_sequence_has_no_options() {
        assert!(GridOptionPicker.next_options(&Sequence::default()).is_empty());
    }
}
