//! Rule-based orientation calculator.

use crate::generator::OrientationCalculator;
use crate::pictograph::{Beat, Color, MotionType, Orientation, RotationSense, Turns};

/// Derives end orientation from motion type, turn count, and prop spin.
///
/// - Pro and static hands keep their orientation on an even number of whole
///   turns and flip it (in/out, clock/counter) on an odd number.
/// - Anti and dash hands do the opposite.
/// - A trailing half turn steps one quarter around in → clock → out → counter,
///   with the prop's spin for pro/static and against it for anti/dash.
/// - Float hands keep their start orientation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleOrientationCalculator;

impl OrientationCalculator for RuleOrientationCalculator {
    fn end_orientation(&self, beat: &Beat, color: Color) -> Orientation {
        let hand = beat.hand(color);
        let start = hand.start_orientation;
        let turns = match hand.turns {
            Turns::Float => return start,
            Turns::Numeric(t) => t,
        };
        if hand.motion_type == MotionType::Float {
            return start;
        }

        let whole = turns.floor() as u32;
        let has_half = turns - turns.floor() >= 0.5;
        let keeps_on_even = matches!(hand.motion_type, MotionType::Pro | MotionType::Static);

        let mut end = if (whole % 2 == 0) == keeps_on_even {
            start
        } else {
            flip(start)
        };

        if has_half {
            let sense = if keeps_on_even {
                hand.rotation_sense
            } else {
                hand.rotation_sense.mirrored()
            };
            end = step(end, sense);
        }
        end
    }
}

fn flip(orientation: Orientation) -> Orientation {
    match orientation {
        Orientation::In => Orientation::Out,
        Orientation::Out => Orientation::In,
        Orientation::Clock => Orientation::Counter,
        Orientation::Counter => Orientation::Clock,
    }
}

fn step(orientation: Orientation, sense: RotationSense) -> Orientation {
    use Orientation::*;
    match sense {
        RotationSense::Clockwise => match orientation {
            In => Clock,
            Clock => Out,
            Out => Counter,
            Counter => In,
        },
        RotationSense::CounterClockwise => match orientation {
            In => Counter,
            Counter => Out,
            Out => Clock,
            Clock => In,
        },
        RotationSense::NoRotation => orientation,
    }
}
