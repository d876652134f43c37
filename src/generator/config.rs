//! Generator configuration: default request parameters loaded from ~/.kinetic/generator.yaml.

use std::io;
use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::pictograph::{GridMode, Level, MirrorAxis};

use super::{GenerationRequest, PermutationType, PropContinuity, RotationType};

/// Default generation parameters, loaded from YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Beats in the finished sequence, excluding the start position.
    pub length: usize,
    pub turn_intensity: f64,
    pub level: Level,
    pub rotation_type: RotationType,
    pub permutation_type: PermutationType,
    pub prop_continuity: PropContinuity,
    pub mirror_axis: MirrorAxis,
    pub color_swap: bool,
    /// Grid the start position is chosen on.
    pub grid_mode: GridMode,
    /// RNG seed for reproducible sequences.
    pub seed: u64,
}

impl GeneratorConfig {
    /// Default path for the generator config.
    pub fn default_path() -> PathBuf {
        let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(".kinetic");
        path.push("generator.yaml");
        path
    }

    /// Load config from the standard path, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn load() -> Self {
        let path = Self::default_path();
        Self::load_from(&path).unwrap_or_else(|e| {
            warn!("ignoring {}: {e}", path.display());
            Self::default()
        })
    }

    /// Load config from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, io::Error> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Save config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(io::Error::other)?;
        std::fs::write(path, yaml)
    }

    /// The generation request these defaults describe.
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest {
            length: self.length,
            turn_intensity: self.turn_intensity,
            level: self.level,
            rotation_type: self.rotation_type,
            permutation_type: self.permutation_type,
            prop_continuity: self.prop_continuity,
            mirror_axis: self.mirror_axis,
            color_swap: self.color_swap,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let request = GenerationRequest::default();
        Self {
            length: request.length,
            turn_intensity: request.turn_intensity,
            level: request.level,
            rotation_type: request.rotation_type,
            permutation_type: request.permutation_type,
            prop_continuity: request.prop_continuity,
            mirror_axis: request.mirror_axis,
            color_swap: request.color_swap,
            grid_mode: GridMode::Diamond,
            seed: 42,
        }
    }
}
