//! Mirrored permutations: double a closed word by replaying it reflected.

use log::{debug, info};

use crate::pictograph::{Beat, Color, MirrorAxis, Sequence};
use crate::symmetry;

use super::base::BaseSequenceBuilder;
use super::{GenerationError, OrientationCalculator};

/// Extends a sequence whose word returns to its start position with a
/// reflected copy of that word.
///
/// Every new beat keeps the template's motion type, turns, and prefloat fields,
/// reverses its prop spin, and reflects its end locations across `axis`. With
/// `color_swap` the blue hand replays the template's red hand and vice versa.
pub struct MirroredPermutationExecutor<'a> {
    base: BaseSequenceBuilder<'a>,
    axis: MirrorAxis,
    color_swap: bool,
}

impl<'a> MirroredPermutationExecutor<'a> {
    pub fn new(
        calculator: &'a dyn OrientationCalculator,
        axis: MirrorAxis,
        color_swap: bool,
    ) -> Self {
        Self {
            base: BaseSequenceBuilder::new(calculator),
            axis,
            color_swap,
        }
    }

    /// Whether the word in `sequence` ends on its start position.
    pub fn is_eligible(sequence: &Sequence) -> bool {
        !sequence.is_empty() && sequence.ends_where_it_started()
    }

    /// Append the mirrored word. Returns the number of beats added.
    pub fn create_permutations(&self, sequence: &mut Sequence) -> Result<usize, GenerationError> {
        let start = sequence.require_start()?.end_position;
        if !Self::is_eligible(sequence) {
            let end = sequence.last().map(|b| b.end_position).unwrap_or(start);
            return Err(GenerationError::IneligibleForPermutation { start, end });
        }

        let word_length = sequence.len();
        info!(
            "mirroring {word_length}-beat word across {:?} axis{}",
            self.axis,
            if self.color_swap { " with color swap" } else { "" }
        );

        for _ in 0..word_length {
            let beat = self.create_new_beat(sequence, word_length)?;
            debug!(
                "beat {}: {} {} -> {}",
                beat.beat_number, beat.letter, beat.start_position, beat.end_position
            );
            sequence.push(beat);
        }

        sequence.refresh_word();
        sequence.metadata.is_circular = sequence.ends_where_it_started();
        sequence.metadata.can_be_cap = true;
        Ok(word_length)
    }

    fn create_new_beat(
        &self,
        sequence: &Sequence,
        word_length: usize,
    ) -> Result<Beat, GenerationError> {
        let beat_number = sequence.next_beat_number();
        let previous = sequence.last().ok_or(GenerationError::MissingStartPosition)?;
        let template = sequence
            .beat(beat_number as usize - word_length)
            .ok_or(GenerationError::MissingStartPosition)?;

        let mut end_position = symmetry::mirror_position(template.end_position, self.axis);
        if self.color_swap {
            end_position = end_position.swap_hands();
        }

        let mut beat = Beat {
            beat_number,
            letter: template.letter.clone(),
            start_position: previous.end_position,
            end_position,
            timing: template.timing,
            direction: template.direction,
            blue: template.blue.clone(),
            red: template.red.clone(),
        };

        for color in Color::BOTH {
            let source = if self.color_swap {
                template.hand(color.other())
            } else {
                template.hand(color)
            };
            let from = previous.hand(color);

            let mut hand = source.clone();
            hand.rotation_sense = source.rotation_sense.mirrored();
            hand.end_location = symmetry::mirror_location(source.end_location, self.axis);
            hand.start_location = from.end_location;
            hand.start_orientation = from.end_orientation;
            *beat.hand_mut(color) = hand;
        }

        self.base.derive_end_orientations(&mut beat);
        Ok(beat)
    }
}
