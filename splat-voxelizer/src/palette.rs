/// Nearest-colour block matching against a fixed palette.
use crate::error::ConfigError;
use constants::palette::FALLBACK_BLOCK;
use serde::{Deserialize, Serialize};

/// One candidate block and its reference colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub block: String,
    pub rgb: [u8; 3],
}

impl PaletteEntry {
    pub fn new(block: impl Into<String>, rgb: [u8; 3]) -> Self {
        Self {
            block: block.into(),
            rgb,
        }
    }
}

/// Ordered, read-only block palette.
/// Order is significant: the first entry at the minimum distance wins.
#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Wrap entries into a matcher. An empty palette is a configuration error.
    pub fn new(entries: Vec<PaletteEntry>) -> Result<Self, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return the block whose reference colour is closest to `colour`
    /// (0-255 RGB) by Euclidean distance.
    pub fn closest_block(&self, colour: [f64; 3]) -> &str {
        let mut best = FALLBACK_BLOCK;
        let mut min_dist = f64::INFINITY;

        for entry in &self.entries {
            let dist = colour_distance(colour, entry.rgb);
            if dist < min_dist {
                min_dist = dist;
                best = &entry.block;
            }
        }

        best
    }
}

/// Euclidean distance in RGB space.
pub fn colour_distance(a: [f64; 3], b: [u8; 3]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(&a, &b)| {
            let d = a - b as f64;
            d * d
        })
        .sum::<f64>()
        .sqrt()
}
