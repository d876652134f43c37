//! Random turn allocator.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::generator::TurnIntensityAllocator;
use crate::pictograph::{Level, Turns};

const LEVEL_2_TURNS: [f64; 4] = [0.0, 1.0, 2.0, 3.0];
const LEVEL_3_TURNS: [f64; 7] = [0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0];

/// Draws turns per hand per beat, capped by the turn intensity.
///
/// Level 1 gets no turns, level 2 whole turns, level 3 half-turn steps and
/// the float sentinel.
pub struct RandomTurnAllocator {
    rng: ChaCha8Rng,
}

impl RandomTurnAllocator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn choices(level: Level, intensity: f64) -> Vec<Turns> {
        let table: &[f64] = match level {
            Level::One => return vec![Turns::ZERO],
            Level::Two => &LEVEL_2_TURNS,
            Level::Three => &LEVEL_3_TURNS,
        };
        let cap = intensity.max(0.0);
        let mut choices: Vec<Turns> = table
            .iter()
            .filter(|&&t| t <= cap)
            .map(|&t| Turns::Numeric(t))
            .collect();
        if level == Level::Three {
            choices.push(Turns::Float);
        }
        choices
    }
}

impl TurnIntensityAllocator for RandomTurnAllocator {
    fn allocate(
        &mut self,
        word_length: usize,
        level: Level,
        intensity: f64,
    ) -> (Vec<Turns>, Vec<Turns>) {
        let choices = Self::choices(level, intensity);
        let draw = |rng: &mut ChaCha8Rng| {
            (0..word_length)
                .map(|_| choices[rng.gen_range(0..choices.len())])
                .collect::<Vec<_>>()
        };
        let blue = draw(&mut self.rng);
        let red = draw(&mut self.rng);
        (blue, red)
    }
}
