//! Circular sequence builder: grows a base word, then closes it by permutation.
//!
//! One `build_sequence` call:
//! 1. installs a start position if the sequence has none,
//! 2. sizes the word from the requested length and symmetry,
//! 3. picks word beats from the option picker, steering the last beat onto the
//!    position that lets the symmetry close,
//! 4. hands the finished word to the rotated or mirrored executor.
//!
//! A word that does not close is left as is and reported as
//! [`GenerationOutcome::WordOnly`].

use log::{debug, info, warn};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::pictograph::{Beat, Position, RotationSense, Sequence, Turns};
use crate::symmetry;

use super::base::BaseSequenceBuilder;
use super::{
    GenerationError, GenerationOutcome, GenerationRequest, MirroredPermutationExecutor,
    OptionPicker, OrientationCalculator, PermutationType, PropContinuity,
    RotatedPermutationExecutor, StartPositionSelector, TurnIntensityAllocator,
};

/// Orchestrates base-word construction and symmetric closure.
pub struct CircularSequenceBuilder {
    picker: Box<dyn OptionPicker>,
    calculator: Box<dyn OrientationCalculator>,
    start_selector: Box<dyn StartPositionSelector>,
    allocator: Box<dyn TurnIntensityAllocator>,
    rng: ChaCha8Rng,
}

impl CircularSequenceBuilder {
    /// Create a builder over the given collaborators.
    ///
    /// `seed` drives every random choice the builder makes itself (candidate
    /// picks, closing quarter, prop spin); collaborators own their randomness.
    pub fn new(
        picker: Box<dyn OptionPicker>,
        calculator: Box<dyn OrientationCalculator>,
        start_selector: Box<dyn StartPositionSelector>,
        allocator: Box<dyn TurnIntensityAllocator>,
        seed: u64,
    ) -> Self {
        Self {
            picker,
            calculator,
            start_selector,
            allocator,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Build a word on `sequence` and close it under the requested symmetry.
    ///
    /// Beats already on the sequence count toward the word. On error, beats
    /// appended before the failure remain on the sequence.
    pub fn build_sequence(
        &mut self,
        sequence: &mut Sequence,
        request: &GenerationRequest,
    ) -> Result<GenerationOutcome, GenerationError> {
        let word_length = request.word_length()?;

        if !sequence.has_start() {
            self.start_selector.add_start_position(sequence);
        }
        let start_position = sequence.require_start()?.end_position;
        sequence.metadata.level = request.level;

        if sequence.len() > word_length {
            warn!(
                "sequence already holds {} beats, more than a {word_length}-beat word",
                sequence.len()
            );
            return Ok(GenerationOutcome::WordOnly);
        }

        self.build_word(sequence, request, word_length, start_position)?;
        sequence.refresh_word();
        info!(
            "built word {} ({} beats) from {start_position}",
            sequence.metadata.word,
            sequence.len()
        );

        self.close_word(sequence, request, start_position)
    }

    fn build_word(
        &mut self,
        sequence: &mut Sequence,
        request: &GenerationRequest,
        word_length: usize,
        start_position: Position,
    ) -> Result<(), GenerationError> {
        let continuous = request.prop_continuity == PropContinuity::Continuous;
        let (blue_sense, red_sense) = if continuous {
            (
                RotationSense::random(&mut self.rng),
                RotationSense::random(&mut self.rng),
            )
        } else {
            (RotationSense::NoRotation, RotationSense::NoRotation)
        };

        let (turns_blue, turns_red) = if request.level.has_turns() {
            self.allocator
                .allocate(word_length, request.level, request.turn_intensity)
        } else {
            (Vec::new(), Vec::new())
        };

        let base = BaseSequenceBuilder::new(self.calculator.as_ref());
        let existing = sequence.len();
        let available_range = word_length - existing;

        for i in 0..available_range {
            let beat_number = sequence.next_beat_number();
            let mut options = self.picker.next_options(sequence);
            if options.is_empty() {
                return Err(GenerationError::EmptyOptions { beat_number });
            }
            if continuous {
                options = BaseSequenceBuilder::filter_by_rotation(options, blue_sense, red_sense);
            }

            if i + 1 == available_range {
                let required = closing_position(&mut self.rng, start_position, request);
                options.retain(|o| o.end_position == required);
                if options.is_empty() {
                    return Err(GenerationError::NoMatchingOption {
                        beat_number,
                        required,
                    });
                }
            }
            let mut next = take_random(&mut self.rng, options);

            if request.level.has_turns() {
                let index = existing + i;
                let blue = turns_blue.get(index).copied().unwrap_or(Turns::ZERO);
                let red = turns_red.get(index).copied().unwrap_or(Turns::ZERO);
                BaseSequenceBuilder::assign_turns(&mut next, blue, red);
            }
            BaseSequenceBuilder::resolve_dash_static_rotation(
                &mut next,
                continuous,
                blue_sense,
                red_sense,
                &mut self.rng,
            );
            let previous = sequence.last().ok_or(GenerationError::MissingStartPosition)?;
            BaseSequenceBuilder::propagate_start_orientation(&mut next, previous);
            base.derive_end_orientations(&mut next);
            BaseSequenceBuilder::assign_beat_number(&mut next, sequence);

            debug!(
                "beat {}: {} {} -> {} (blue {} {}, red {} {})",
                next.beat_number,
                next.letter,
                next.start_position,
                next.end_position,
                next.blue.motion_type,
                next.blue.turns,
                next.red.motion_type,
                next.red.turns
            );
            sequence.push(next);
        }
        Ok(())
    }

    fn close_word(
        &self,
        sequence: &mut Sequence,
        request: &GenerationRequest,
        start_position: Position,
    ) -> Result<GenerationOutcome, GenerationError> {
        let end_position = sequence
            .last()
            .map(|b| b.end_position)
            .unwrap_or(start_position);

        let added = match request.permutation_type {
            PermutationType::Rotated => {
                if !symmetry::is_eligible(start_position, end_position, request.rotation_type) {
                    warn!(
                        "word {start_position} -> {end_position} does not close {}; \
                         skipping permutation",
                        request.rotation_type
                    );
                    return Ok(GenerationOutcome::WordOnly);
                }
                RotatedPermutationExecutor::new(self.calculator.as_ref())
                    .create_permutations(sequence)?
            }
            PermutationType::Mirrored => {
                if !MirroredPermutationExecutor::is_eligible(sequence) {
                    warn!(
                        "word {start_position} -> {end_position} does not return home; \
                         skipping mirror"
                    );
                    return Ok(GenerationOutcome::WordOnly);
                }
                MirroredPermutationExecutor::new(
                    self.calculator.as_ref(),
                    request.mirror_axis,
                    request.color_swap,
                )
                .create_permutations(sequence)?
            }
        };

        info!(
            "{} permutation added {added} beats; word {}",
            request.permutation_type, sequence.metadata.word
        );
        Ok(GenerationOutcome::Extended { added })
    }
}

/// Position the last word beat must end on for the symmetry to close.
fn closing_position<R: Rng + ?Sized>(
    rng: &mut R,
    start: Position,
    request: &GenerationRequest,
) -> Position {
    match request.permutation_type {
        PermutationType::Mirrored => start,
        PermutationType::Rotated => {
            let candidates = symmetry::closing_positions(start, request.rotation_type);
            candidates[rng.gen_range(0..candidates.len())]
        }
    }
}

/// Remove and return a uniformly random element. `options` must be non-empty.
fn take_random<R: Rng + ?Sized>(rng: &mut R, mut options: Vec<Beat>) -> Beat {
    let index = rng.gen_range(0..options.len());
    options.swap_remove(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pictograph::{
        Color, HandAttributes, Level, Location, MotionType, Orientation, SequenceMetadata,
    };
    use crate::generator::RotationType;

    /// Offers one beat to each listed position from wherever the sequence
    /// currently is. Every hand is a static/dash/pro move as needed.
    struct FixedTargets(Vec<Position>);

    impl OptionPicker for FixedTargets {
        fn next_options(&self, sequence: &Sequence) -> Vec<Beat> {
            let Some(last) = sequence.last() else {
                return Vec::new();
            };
            let (bs, rs) = last.end_position.locations();
            self.0
                .iter()
                .map(|&to| {
                    let (be, re) = to.locations();
                    Beat {
                        beat_number: 0,
                        letter: "Z".to_string(),
                        start_position: last.end_position,
                        end_position: to,
                        timing: Default::default(),
                        direction: Default::default(),
                        blue: HandAttributes::new(motion(bs, be), bs, be),
                        red: HandAttributes::new(motion(rs, re), rs, re),
                    }
                })
                .collect()
        }
    }

    fn motion(from: Location, to: Location) -> MotionType {
        if from == to {
            MotionType::Static
        } else if symmetry::half(from) == to {
            MotionType::Dash
        } else {
            MotionType::Pro
        }
    }

    struct Flip;

    impl OrientationCalculator for Flip {
        fn end_orientation(&self, beat: &Beat, color: Color) -> Orientation {
            match beat.hand(color).start_orientation {
                Orientation::In => Orientation::Out,
                _ => Orientation::In,
            }
        }
    }

    struct FixedStart(Position);

    impl StartPositionSelector for FixedStart {
        fn add_start_position(&mut self, sequence: &mut Sequence) {
            sequence.set_start(Beat::start_position("α", self.0));
        }
    }

    struct NoTurns;

    impl TurnIntensityAllocator for NoTurns {
        fn allocate(&mut self, word_length: usize, _: Level, _: f64) -> (Vec<Turns>, Vec<Turns>) {
            (vec![Turns::ZERO; word_length], vec![Turns::ZERO; word_length])
        }
    }

    struct AllFloat;

    impl TurnIntensityAllocator for AllFloat {
        fn allocate(&mut self, word_length: usize, _: Level, _: f64) -> (Vec<Turns>, Vec<Turns>) {
            (vec![Turns::Float; word_length], vec![Turns::Numeric(1.0); word_length])
        }
    }

    fn builder(
        targets: Vec<Position>,
        allocator: Box<dyn TurnIntensityAllocator>,
    ) -> CircularSequenceBuilder {
        CircularSequenceBuilder::new(
            Box::new(FixedTargets(targets)),
            Box::new(Flip),
            Box::new(FixedStart(Position::Alpha1)),
            allocator,
            42,
        )
    }

    #[test]
    fn halved_rotation_reaches_full_length() {
        let mut b = builder(vec![Position::Alpha5, Position::Beta5], Box::new(NoTurns));
        let mut seq = Sequence::new(SequenceMetadata::default());
        let request = GenerationRequest {
            length: 4,
            rotation_type: RotationType::Halved,
            ..Default::default()
        };
        let outcome = b.build_sequence(&mut seq, &request).unwrap();
        assert_eq!(outcome, GenerationOutcome::Extended { added: 2 });
        assert_eq!(seq.len(), 4);
        // The second word beat must close on alpha5.
        assert_eq!(seq.beat(2).unwrap().end_position, Position::Alpha5);
        assert_eq!(seq.beat(4).unwrap().end_position, Position::Alpha1);
        assert!(seq.metadata.is_circular);
    }

    #[test]
    fn missing_closing_option_is_fatal() {
        let mut b = builder(vec![Position::Beta5], Box::new(NoTurns));
        let mut seq = Sequence::new(SequenceMetadata::default());
        let request = GenerationRequest {
            length: 2,
            rotation_type: RotationType::Halved,
            ..Default::default()
        };
        let err = b.build_sequence(&mut seq, &request).unwrap_err();
        assert_eq!(
            err,
            GenerationError::NoMatchingOption {
                beat_number: 1,
                required: Position::Alpha5
            }
        );
        assert!(seq.is_empty());
        assert!(seq.has_start());
    }

    #[test]
    fn empty_picker_is_an_error() {
        let mut b = builder(Vec::new(), Box::new(NoTurns));
        let mut seq = Sequence::new(SequenceMetadata::default());
        let err = b
            .build_sequence(&mut seq, &GenerationRequest::default())
            .unwrap_err();
        assert_eq!(err, GenerationError::EmptyOptions { beat_number: 1 });
    }

    #[test]
    fn indivisible_length_fails_before_any_work() {
        let mut b = builder(vec![Position::Alpha3], Box::new(NoTurns));
        let mut seq = Sequence::new(SequenceMetadata::default());
        let request = GenerationRequest {
            length: 6,
            ..Default::default()
        };
        assert!(matches!(
            b.build_sequence(&mut seq, &request),
            Err(GenerationError::IndivisibleLength { length: 6, divisor: 4 })
        ));
        assert!(!seq.has_start());
    }

    #[test]
    fn mirrored_word_must_return_home() {
        let mut b = builder(vec![Position::Alpha1, Position::Alpha5], Box::new(NoTurns));
        let mut seq = Sequence::new(SequenceMetadata::default());
        let request = GenerationRequest {
            length: 4,
            permutation_type: PermutationType::Mirrored,
            ..Default::default()
        };
        let outcome = b.build_sequence(&mut seq, &request).unwrap();
        assert_eq!(outcome, GenerationOutcome::Extended { added: 2 });
        assert_eq!(seq.beat(2).unwrap().end_position, Position::Alpha1);
        assert_eq!(seq.len(), 4);
    }

    #[test]
    fn prefilled_word_that_does_not_close_is_word_only() {
        let mut b = builder(vec![Position::Alpha1], Box::new(NoTurns));
        let mut seq = Sequence::with_start(
            SequenceMetadata::default(),
            Beat::start_position("α", Position::Alpha1),
        );
        let mut first = b.picker.next_options(&seq).remove(0);
        first.beat_number = 1;
        seq.push(first);

        // Word of one beat already present; alpha1 -> alpha1 never rotates.
        let request = GenerationRequest {
            length: 4,
            ..Default::default()
        };
        let outcome = b.build_sequence(&mut seq, &request).unwrap();
        assert_eq!(outcome, GenerationOutcome::WordOnly);
        assert_eq!(seq.len(), 1);
    }

    #[test]
    fn orientation_chain_is_continuous() {
        let mut b = builder(vec![Position::Alpha5, Position::Beta1], Box::new(NoTurns));
        let mut seq = Sequence::new(SequenceMetadata::default());
        let request = GenerationRequest {
            length: 8,
            rotation_type: RotationType::Halved,
            ..Default::default()
        };
        b.build_sequence(&mut seq, &request).unwrap();
        let mut previous = seq.start().unwrap().clone();
        for beat in seq.beats() {
            for color in Color::BOTH {
                assert_eq!(
                    beat.hand(color).start_orientation,
                    previous.hand(color).end_orientation
                );
            }
            assert_eq!(beat.start_position, previous.end_position);
            previous = beat.clone();
        }
    }

    #[test]
    fn level_three_floats_shift_hands() {
        let mut b = builder(vec![Position::Alpha3, Position::Alpha7], Box::new(AllFloat));
        let mut seq = Sequence::new(SequenceMetadata::default());
        let request = GenerationRequest {
            length: 4,
            level: Level::Three,
            ..Default::default()
        };
        b.build_sequence(&mut seq, &request).unwrap();
        let first = seq.beat(1).unwrap();
        assert_eq!(first.blue.turns, Turns::Float);
        assert_eq!(first.blue.motion_type, MotionType::Float);
        assert_eq!(first.blue.prefloat_motion_type, Some(MotionType::Pro));
        assert_eq!(first.red.turns, Turns::Numeric(1.0));
        assert_eq!(seq.metadata.level, Level::Three);
    }

    #[test]
    fn level_one_ignores_allocator() {
        let mut b = builder(vec![Position::Alpha3, Position::Alpha7], Box::new(AllFloat));
        let mut seq = Sequence::new(SequenceMetadata::default());
        b.build_sequence(&mut seq, &GenerationRequest { length: 4, ..Default::default() })
            .unwrap();
        assert!(seq.beats().iter().all(|beat| beat.blue.turns == Turns::ZERO));
    }
}
