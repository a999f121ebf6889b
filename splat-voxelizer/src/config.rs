/// Run configuration shared by every pipeline stage.
use crate::error::{ConfigError, Result};
use crate::palette::{Palette, PaletteEntry};
use crate::voxel_grid::KeyRounding;
use constants::palette::BLOCK_PALETTE;
use constants::voxelization::{
    DEFAULT_DENSITY_THRESHOLD, DEFAULT_INVERT_Y, DEFAULT_MIN_NEIGHBORS,
    DEFAULT_MIN_OPACITY_CUTOFF, DEFAULT_MIRROR_X, DEFAULT_SATURATION_BOOST, DEFAULT_SCALE_FACTOR,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Immutable settings for one conversion run.
/// Missing JSON fields fall back to the defaults in `constants`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoxelizerConfig {
    /// World units to grid cells multiplier.
    pub scale_factor: f64,
    /// Negate Y before binning (vertical flip).
    pub invert_y: bool,
    /// Negate X before binning (left-right mirror).
    pub mirror_x: bool,
    /// Voxels need accumulated opacity strictly above this to be kept.
    pub density_threshold: f64,
    /// Points need opacity strictly above this to be accumulated.
    pub min_opacity_cutoff: f64,
    /// Per-point saturation multiplier.
    pub saturation_boost: f64,
    /// Occupied face neighbours required to survive despeckling. Zero disables it.
    pub min_neighbors: u32,
    /// How scaled coordinates become integer grid keys.
    pub key_rounding: KeyRounding,
    /// Candidate blocks in matching order.
    pub palette: Vec<PaletteEntry>,
}

impl Default for VoxelizerConfig {
    fn default() -> Self {
        Self {
            scale_factor: DEFAULT_SCALE_FACTOR,
            invert_y: DEFAULT_INVERT_Y,
            mirror_x: DEFAULT_MIRROR_X,
            density_threshold: DEFAULT_DENSITY_THRESHOLD,
            min_opacity_cutoff: DEFAULT_MIN_OPACITY_CUTOFF,
            saturation_boost: DEFAULT_SATURATION_BOOST,
            min_neighbors: DEFAULT_MIN_NEIGHBORS,
            key_rounding: KeyRounding::default(),
            palette: BLOCK_PALETTE
                .iter()
                .map(|b| PaletteEntry::new(b.id, b.rgb))
                .collect(),
        }
    }
}

impl VoxelizerConfig {
    /// Load configuration from a JSON file, filling unspecified fields with defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Reject settings that would make the run meaningless.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if !self.scale_factor.is_finite() || self.scale_factor <= 0.0 {
            return Err(ConfigError::InvalidScale(self.scale_factor));
        }
        check_unit_range("density_threshold", self.density_threshold)?;
        check_unit_range("min_opacity_cutoff", self.min_opacity_cutoff)?;
        if !self.saturation_boost.is_finite() || self.saturation_boost < 0.0 {
            return Err(ConfigError::InvalidSaturation(self.saturation_boost));
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(())
    }

    /// Build the read-only matcher palette.
    pub fn build_palette(&self) -> std::result::Result<Palette, ConfigError> {
        Palette::new(self.palette.clone())
    }
}

fn check_unit_range(name: &'static str, value: f64) -> std::result::Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitRange { name, value })
    }
}
