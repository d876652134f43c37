//! Reference collaborators: seeded, rule-based stand-ins for the external
//! option picker, orientation calculator, start-position selector, and turn
//! allocator.
//!
//! They make the engine runnable end to end (demo binary, integration tests)
//! without the option dataset a full editor would load.

pub mod options;
pub mod orientation;
pub mod start;
pub mod turns;

pub use options::GridOptionPicker;
pub use orientation::RuleOrientationCalculator;
pub use start::RandomStartPositionSelector;
pub use turns::RandomTurnAllocator;

use crate::generator::{CircularSequenceBuilder, GeneratorConfig};

/// A builder wired to the reference collaborators, seeded from `config`.
///
/// Each collaborator gets its own stream derived from the one seed, so the
/// same config always yields the same sequence.
pub fn reference_builder(config: &GeneratorConfig) -> CircularSequenceBuilder {
    let seed = config.seed;
    CircularSequenceBuilder::new(
        Box::new(GridOptionPicker),
        Box::new(RuleOrientationCalculator),
        Box::new(RandomStartPositionSelector::new(config.grid_mode, seed.wrapping_add(1))),
        Box::new(RandomTurnAllocator::new(seed.wrapping_add(2))),
        seed,
    )
}
