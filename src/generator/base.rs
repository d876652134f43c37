//! Per-beat primitives shared by word construction and the permutation executors.

use log::{debug, warn};
use rand::Rng;

use crate::pictograph::{is_type1_hybrid, Beat, Color, MotionType, RotationSense, Sequence, Turns};

use super::OrientationCalculator;

/// Shapes a candidate beat before it is appended to a sequence.
///
/// Only end-orientation derivation needs a collaborator; the rest are pure
/// transformations on beats.
pub struct BaseSequenceBuilder<'a> {
    calculator: &'a dyn OrientationCalculator,
}

impl<'a> BaseSequenceBuilder<'a> {
    pub fn new(calculator: &'a dyn OrientationCalculator) -> Self {
        Self { calculator }
    }

    /// Carry each hand's end orientation from `previous` into `next`'s start orientation.
    ///
    /// Must run before [`derive_end_orientations`](Self::derive_end_orientations).
    pub fn propagate_start_orientation(next: &mut Beat, previous: &Beat) {
        for color in Color::BOTH {
            next.hand_mut(color).start_orientation = previous.hand(color).end_orientation;
        }
    }

    /// Ask the orientation calculator for both hands' end orientations.
    pub fn derive_end_orientations(&self, next: &mut Beat) {
        let blue = self.calculator.end_orientation(next, Color::Blue);
        let red = self.calculator.end_orientation(next, Color::Red);
        next.blue.end_orientation = blue;
        next.red.end_orientation = red;
    }

    /// Settle the prop spin of dash and static hands.
    ///
    /// With `continuous` spin a hand that turns takes the shared sense for its
    /// color; otherwise it gets a fresh random sense. A hand with no turns
    /// never spins. Shift and float hands are left alone.
    pub fn resolve_dash_static_rotation<R: Rng + ?Sized>(
        next: &mut Beat,
        continuous: bool,
        blue_sense: RotationSense,
        red_sense: RotationSense,
        rng: &mut R,
    ) {
        for (color, shared) in [(Color::Blue, blue_sense), (Color::Red, red_sense)] {
            let hand = next.hand_mut(color);
            if !hand.motion_type.is_dash_or_static() {
                continue;
            }
            hand.rotation_sense = match (hand.turns.is_positive(), continuous) {
                (false, _) => RotationSense::NoRotation,
                (true, true) => shared,
                (true, false) => RotationSense::random(rng),
            };
        }
    }

    /// Apply allocated turns to both hands.
    ///
    /// A float request on a type-1 hybrid letter leaves the beat untouched.
    /// Floating a pro/anti hand remembers its motion type and spin in the
    /// `prefloat_*` fields; floating any other motion falls back to zero turns.
    pub fn assign_turns(beat: &mut Beat, turns_blue: Turns, turns_red: Turns) {
        if (turns_blue.is_float() || turns_red.is_float()) && is_type1_hybrid(&beat.letter) {
            debug!("letter {} cannot float; keeping beat unchanged", beat.letter);
            return;
        }

        for (color, requested) in [(Color::Blue, turns_blue), (Color::Red, turns_red)] {
            let hand = beat.hand_mut(color);
            match requested {
                Turns::Float if hand.motion_type.is_shift() => {
                    hand.turns = Turns::Float;
                    hand.prefloat_motion_type = Some(hand.motion_type);
                    hand.prefloat_rotation_sense = Some(hand.rotation_sense);
                    hand.motion_type = MotionType::Float;
                    hand.rotation_sense = RotationSense::NoRotation;
                }
                Turns::Float => hand.turns = Turns::ZERO,
                numeric => hand.turns = numeric,
            }
        }
    }

    /// Keep options whose hands spin with the given senses (or not at all).
    ///
    /// Fails open: when nothing matches, every option is returned unchanged.
    pub fn filter_by_rotation(
        options: Vec<Beat>,
        blue_sense: RotationSense,
        red_sense: RotationSense,
    ) -> Vec<Beat> {
        let compatible = |sense: RotationSense, wanted: RotationSense| {
            sense == wanted || sense == RotationSense::NoRotation
        };
        let filtered: Vec<Beat> = options
            .iter()
            .filter(|o| {
                compatible(o.blue.rotation_sense, blue_sense)
                    && compatible(o.red.rotation_sense, red_sense)
            })
            .cloned()
            .collect();

        if filtered.is_empty() {
            warn!(
                "no option spins blue {:?} / red {:?}; using all {} options",
                blue_sense,
                red_sense,
                options.len()
            );
            options
        } else {
            filtered
        }
    }

    /// Number `beat` as the next beat of `sequence`.
    pub fn assign_beat_number(beat: &mut Beat, sequence: &Sequence) {
        beat.beat_number = sequence.next_beat_number();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pictograph::{HandAttributes, Location, Orientation, Position, SequenceMetadata};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Flips in/out on every beat regardless of motion.
    struct FlipCalculator;

    impl OrientationCalculator for FlipCalculator {
        fn end_orientation(&self, beat: &Beat, color: Color) -> Orientation {
            match beat.hand(color).start_orientation {
                Orientation::In => Orientation::Out,
                Orientation::Out => Orientation::In,
                other => other,
            }
        }
    }

    fn beat(letter: &str, blue: HandAttributes, red: HandAttributes) -> Beat {
        Beat {
            beat_number: 0,
            letter: letter.to_string(),
            start_position: Position::Alpha1,
            end_position: Position::Alpha3,
            timing: Default::default(),
            direction: Default::default(),
            blue,
            red,
        }
    }

    fn pro_cw() -> HandAttributes {
        HandAttributes::new(MotionType::Pro, Location::S, Location::W)
            .with_rotation_sense(RotationSense::Clockwise)
    }

    fn anti_ccw() -> HandAttributes {
        HandAttributes::new(MotionType::Anti, Location::N, Location::E)
            .with_rotation_sense(RotationSense::CounterClockwise)
    }

    #[test]
    fn start_orientation_follows_previous_end() {
        let mut previous = beat("A", pro_cw(), anti_ccw());
        previous.blue.end_orientation = Orientation::Clock;
        previous.red.end_orientation = Orientation::Out;
        let mut next = beat("A", pro_cw(), anti_ccw());

        BaseSequenceBuilder::propagate_start_orientation(&mut next, &previous);
        assert_eq!(next.blue.start_orientation, Orientation::Clock);
        assert_eq!(next.red.start_orientation, Orientation::Out);
    }

    #[test]
    fn end_orientations_come_from_calculator() {
        let calc = FlipCalculator;
        let builder = BaseSequenceBuilder::new(&calc);
        let mut next = beat("A", pro_cw(), anti_ccw());
        next.red.start_orientation = Orientation::Out;

        builder.derive_end_orientations(&mut next);
        assert_eq!(next.blue.end_orientation, Orientation::Out);
        assert_eq!(next.red.end_orientation, Orientation::In);
    }

    #[test]
    fn continuous_spin_uses_shared_sense() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut next = beat(
            "Φ",
            HandAttributes::new(MotionType::Dash, Location::S, Location::N).with_turns(1.0),
            HandAttributes::new(MotionType::Static, Location::N, Location::N),
        );
        BaseSequenceBuilder::resolve_dash_static_rotation(
            &mut next,
            true,
            RotationSense::CounterClockwise,
            RotationSense::Clockwise,
            &mut rng,
        );
        assert_eq!(next.blue.rotation_sense, RotationSense::CounterClockwise);
        // No turns, no spin.
        assert_eq!(next.red.rotation_sense, RotationSense::NoRotation);
    }

    #[test]
    fn random_spin_picks_a_direction_only_with_turns() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..16 {
            let mut next = beat(
                "Φ",
                HandAttributes::new(MotionType::Dash, Location::S, Location::N).with_turns(2.0),
                HandAttributes::new(MotionType::Static, Location::N, Location::N)
                    .with_rotation_sense(RotationSense::Clockwise),
            );
            BaseSequenceBuilder::resolve_dash_static_rotation(
                &mut next,
                false,
                RotationSense::NoRotation,
                RotationSense::NoRotation,
                &mut rng,
            );
            assert_ne!(next.blue.rotation_sense, RotationSense::NoRotation);
            assert_eq!(next.red.rotation_sense, RotationSense::NoRotation);
        }
    }

    #[test]
    fn shift_hands_keep_their_spin() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut next = beat("B", anti_ccw(), pro_cw());
        BaseSequenceBuilder::resolve_dash_static_rotation(
            &mut next,
            true,
            RotationSense::Clockwise,
            RotationSense::CounterClockwise,
            &mut rng,
        );
        assert_eq!(next.blue.rotation_sense, RotationSense::CounterClockwise);
        assert_eq!(next.red.rotation_sense, RotationSense::Clockwise);
    }

    #[test]
    fn float_remembers_prior_motion() {
        let mut next = beat("A", pro_cw(), anti_ccw());
        BaseSequenceBuilder::assign_turns(&mut next, Turns::Float, Turns::Numeric(1.5));

        assert_eq!(next.blue.turns, Turns::Float);
        assert_eq!(next.blue.motion_type, MotionType::Float);
        assert_eq!(next.blue.rotation_sense, RotationSense::NoRotation);
        assert_eq!(next.blue.prefloat_motion_type, Some(MotionType::Pro));
        assert_eq!(next.blue.prefloat_rotation_sense, Some(RotationSense::Clockwise));
        assert_eq!(next.red.turns, Turns::Numeric(1.5));
        assert_eq!(next.red.motion_type, MotionType::Anti);
    }

    #[test]
    fn float_on_dash_becomes_zero_turns() {
        let mut next = beat(
            "Φ",
            HandAttributes::new(MotionType::Dash, Location::S, Location::N),
            HandAttributes::new(MotionType::Static, Location::N, Location::N),
        );
        BaseSequenceBuilder::assign_turns(&mut next, Turns::Float, Turns::Float);
        assert_eq!(next.blue.turns, Turns::ZERO);
        assert_eq!(next.blue.motion_type, MotionType::Dash);
        assert_eq!(next.red.turns, Turns::ZERO);
        assert!(next.blue.prefloat_motion_type.is_none());
    }

    #[test]
    fn hybrid_letter_ignores_float_request() {
        let mut next = beat("C", pro_cw(), anti_ccw());
        let before = next.clone();
        BaseSequenceBuilder::assign_turns(&mut next, Turns::Numeric(1.0), Turns::Float);
        assert_eq!(next, before);
    }

    #[test]
    fn hybrid_letter_accepts_numeric_turns() {
        let mut next = beat("C", pro_cw(), anti_ccw());
        BaseSequenceBuilder::assign_turns(&mut next, Turns::Numeric(1.0), Turns::Numeric(2.0));
        assert_eq!(next.blue.turns, Turns::Numeric(1.0));
        assert_eq!(next.red.turns, Turns::Numeric(2.0));
    }

    #[test]
    fn filter_keeps_matching_and_non_spinning() {
        let matching = beat("A", pro_cw(), HandAttributes::resting(Location::N));
        let wrong = beat("B", anti_ccw(), HandAttributes::resting(Location::N));
        let kept = BaseSequenceBuilder::filter_by_rotation(
            vec![matching.clone(), wrong],
            RotationSense::Clockwise,
            RotationSense::Clockwise,
        );
        assert_eq!(kept, vec![matching]);
    }

    #[test]
    fn filter_fails_open() {
        let options = vec![beat("B", anti_ccw(), anti_ccw()), beat("B", anti_ccw(), anti_ccw())];
        let kept = BaseSequenceBuilder::filter_by_rotation(
            options.clone(),
            RotationSense::Clockwise,
            RotationSense::Clockwise,
        );
        assert_eq!(kept.len(), options.len());
        assert_eq!(kept, options);
    }

    #[test]
    fn beat_number_counts_past_start() {
        let mut seq = Sequence::with_start(
            SequenceMetadata::default(),
            Beat::start_position("α", Position::Alpha1),
        );
        let mut next = beat("A", pro_cw(), anti_ccw());
        BaseSequenceBuilder::assign_beat_number(&mut next, &seq);
        assert_eq!(next.beat_number, 1);
        seq.push(next.clone());

        BaseSequenceBuilder::assign_beat_number(&mut next, &seq);
        assert_eq!(next.beat_number, 2);
    }
}
