//! Random start-position selector.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::generator::StartPositionSelector;
use crate::pictograph::{Beat, GridMode, Position, PositionGroup, Sequence};

const DIAMOND_STARTS: [Position; 3] = [Position::Alpha1, Position::Beta5, Position::Gamma11];
const BOX_STARTS: [Position; 3] = [Position::Alpha2, Position::Beta4, Position::Gamma12];

/// Picks one of the three canonical start positions for a grid, seeded.
pub struct RandomStartPositionSelector {
    grid_mode: GridMode,
    rng: ChaCha8Rng,
}

impl RandomStartPositionSelector {
    pub fn new(grid_mode: GridMode, seed: u64) -> Self {
        Self {
            grid_mode,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Start positions available on this selector's grid.
    pub fn candidates(&self) -> &'static [Position; 3] {
        match self.grid_mode {
            GridMode::Diamond => &DIAMOND_STARTS,
            GridMode::Box => &BOX_STARTS,
        }
    }
}

impl StartPositionSelector for RandomStartPositionSelector {
    fn add_start_position(&mut self, sequence: &mut Sequence) {
        let candidates = self.candidates();
        let position = candidates[self.rng.gen_range(0..candidates.len())];
        let letter = match position.group() {
            PositionGroup::Alpha => "α",
            PositionGroup::Beta => "β",
            PositionGroup::Gamma => "Γ",
        };
        sequence.set_start(Beat::start_position(letter, position));
        sequence.metadata.grid_mode = self.grid_mode;
    }
}
