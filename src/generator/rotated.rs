//! Rotated permutations: close a sequence by replaying its word under rotation.
//!
//! Each new beat copies the motion of the beat one word earlier, but the hand
//! path is replayed from where the previous beat left off: the template says
//! *what kind* of move each hand made (clockwise, counter-clockwise, dash,
//! static) and the previous beat says *where* the hand is now. Because a
//! closing word shifts both hands by the same rotation, four quartered words
//! or two halved words return the sequence to its start position.

use log::{debug, info};

use crate::pictograph::{Beat, Color, HandRotationDirection, Position, Sequence};
use crate::symmetry;

use super::base::BaseSequenceBuilder;
use super::{GenerationError, OrientationCalculator, RotationType};

/// Extends a sequence holding an eligible word with its rotated copies.
pub struct RotatedPermutationExecutor<'a> {
    base: BaseSequenceBuilder<'a>,
}

impl<'a> RotatedPermutationExecutor<'a> {
    pub fn new(calculator: &'a dyn OrientationCalculator) -> Self {
        Self {
            base: BaseSequenceBuilder::new(calculator),
        }
    }

    /// The rotation the word in `sequence` closes under.
    ///
    /// Decided from the start position and the word's last end position as the
    /// sequence stands before any extension.
    pub fn rotation_type(sequence: &Sequence) -> Result<RotationType, GenerationError> {
        let start = sequence.require_start()?.end_position;
        let end = sequence
            .last()
            .map(|b| b.end_position)
            .unwrap_or(start);
        symmetry::rotation_for(start, end)
            .ok_or(GenerationError::IneligibleForPermutation { start, end })
    }

    /// Append rotated copies of the word until the sequence is closed.
    ///
    /// The whole of `sequence` is treated as the word. Quartered words gain
    /// three copies, halved words one. Returns the number of beats added.
    pub fn create_permutations(&self, sequence: &mut Sequence) -> Result<usize, GenerationError> {
        let rotation = Self::rotation_type(sequence)?;
        let word_length = sequence.len();
        let entries_to_add = word_length * (rotation.words_per_sequence() - 1);

        info!(
            "rotating {}-beat word ({rotation}), adding {entries_to_add} beats",
            word_length
        );

        for _ in 0..entries_to_add {
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
        Ok(entries_to_add)
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

        let mut beat = Beat {
            beat_number,
            letter: template.letter.clone(),
            start_position: previous.end_position,
            end_position: previous.end_position,
            timing: template.timing,
            direction: template.direction,
            blue: template.blue.clone(),
            red: template.red.clone(),
        };

        for color in Color::BOTH {
            let source = template.hand(color);
            let direction =
                HandRotationDirection::between(source.start_location, source.end_location)?;
            let from = previous.hand(color);

            let hand = beat.hand_mut(color);
            hand.start_location = from.end_location;
            hand.start_orientation = from.end_orientation;
            hand.end_location = symmetry::rotate_location(from.end_location, direction);
        }

        beat.end_position =
            Position::from_locations(beat.blue.end_location, beat.red.end_location)?;
        self.base.derive_end_orientations(&mut beat);
        Ok(beat)
    }
}
