//! kinetic: sequence permutation and generation engine for two-handed
//! prop-manipulation sequences.

pub mod generator;
pub mod pictograph;
pub mod reference;
pub mod symmetry;
