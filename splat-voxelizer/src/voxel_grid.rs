/// Opacity-weighted voxel accumulation.
use crate::colour::SaturationBoost;
use crate::config::VoxelizerConfig;
use crate::point::Point;
use constants::voxelization::ACCUMULATION_CHUNK_SIZE;
use indicatif::ProgressBar;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Integer grid coordinate identifying one voxel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VoxelKey {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl VoxelKey {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Discretise a transformed position.
    /// Returns `None` when a scaled coordinate does not fit the grid.
    pub fn from_position(position: [f64; 3], scale: f64, rounding: KeyRounding) -> Option<Self> {
        Some(Self {
            x: rounding.apply(position[0] * scale)?,
            y: rounding.apply(position[1] * scale)?,
            z: rounding.apply(position[2] * scale)?,
        })
    }

    /// Neighbouring key, or `None` past the edge of the grid.
    pub fn offset(self, (dx, dy, dz): (i32, i32, i32)) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
            z: self.z.checked_add(dz)?,
        })
    }
}

/// Policy for turning a scaled coordinate into a grid index.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum KeyRounding {
    /// Round toward negative infinity. Cells are equally sized on both sides of zero.
    #[default]
    Floor,
    /// Round toward zero (integer cast). The cell straddling zero is twice as wide.
    Truncate,
}

impl KeyRounding {
    fn apply(self, value: f64) -> Option<i32> {
        let rounded = match self {
            KeyRounding::Floor => value.floor(),
            KeyRounding::Truncate => value.trunc(),
        };
        (rounded.is_finite() && rounded >= i32::MIN as f64 && rounded <= i32::MAX as f64)
            .then_some(rounded as i32)
    }
}

/// Running weighted sums for one voxel.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VoxelAccumulator {
    pub sum_r: f64,
    pub sum_g: f64,
    pub sum_b: f64,
    pub sum_opacity: f64,
    pub point_count: u32,
}

impl VoxelAccumulator {
    /// Fold in one point's colour weighted by its opacity.
    pub fn add(&mut self, colour: [f64; 3], opacity: f64) {
        self.sum_r += colour[0] * opacity;
        self.sum_g += colour[1] * opacity;
        self.sum_b += colour[2] * opacity;
        self.sum_opacity += opacity;
        self.point_count += 1;
    }

    /// Key-wise summation of two partial accumulators.
    pub fn merge(&mut self, other: &VoxelAccumulator) {
        self.sum_r += other.sum_r;
        self.sum_g += other.sum_g;
        self.sum_b += other.sum_b;
        self.sum_opacity += other.sum_opacity;
        self.point_count += other.point_count;
    }
}

/// Arena of voxel accumulators.
/// Each first-seen key gets a dense slot; iteration follows first-seen order.
#[derive(Debug, Clone, Default)]
pub struct VoxelGrid {
    slots: HashMap<VoxelKey, usize>,
    keys: Vec<VoxelKey>,
    cells: Vec<VoxelAccumulator>,
    out_of_range: usize,
}

impl VoxelGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Points whose scaled position did not fit an `i32` key.
    pub fn out_of_range(&self) -> usize {
        self.out_of_range
    }

    pub fn get(&self, key: &VoxelKey) -> Option<&VoxelAccumulator> {
        self.slots.get(key).map(|&slot| &self.cells[slot])
    }

    fn slot_mut(&mut self, key: VoxelKey) -> &mut VoxelAccumulator {
        let slot = *self.slots.entry(key).or_insert_with(|| {
            self.keys.push(key);
            self.cells.push(VoxelAccumulator::default());
            self.cells.len() - 1
        });
        &mut self.cells[slot]
    }

    /// Accumulate one colour sample into `key`.
    pub fn add_sample(&mut self, key: VoxelKey, colour: [f64; 3], opacity: f64) {
        self.slot_mut(key).add(colour, opacity);
    }

    /// Bin, enhance and accumulate a run of points sequentially.
    pub fn add_points(&mut self, points: &[Point], config: &VoxelizerConfig) {
        let boost = SaturationBoost::new(config.saturation_boost);
        for point in points {
            match VoxelKey::from_position(point.position, config.scale_factor, config.key_rounding) {
                Some(key) => self.add_sample(key, boost.apply(point.colour), point.opacity),
                None => self.out_of_range += 1,
            }
        }
    }

    /// Merge another partial grid into this one by key-wise summation.
    pub fn merge(&mut self, other: VoxelGrid) {
        self.out_of_range += other.out_of_range;
        for (key, cell) in other.keys.into_iter().zip(other.cells) {
            self.slot_mut(key).merge(&cell);
        }
    }

    /// Iterate voxels in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (VoxelKey, &VoxelAccumulator)> {
        self.keys.iter().copied().zip(self.cells.iter())
    }
}

/// Accumulate all points into a grid using parallel chunks.
/// Partial grids are merged in chunk order, so the result does not depend on
/// thread scheduling.
pub fn accumulate_points(
    points: &[Point],
    config: &VoxelizerConfig,
    pb: &ProgressBar,
) -> VoxelGrid {
    let partials: Vec<VoxelGrid> = points
        .par_chunks(ACCUMULATION_CHUNK_SIZE)
        .map(|chunk| {
            let mut local_grid = VoxelGrid::new();
            local_grid.add_points(chunk, config);

            pb.inc(chunk.len() as u64);
            local_grid
        })
        .collect();

    partials.into_iter().fold(VoxelGrid::new(), |mut grid, partial| {
        grid.merge(partial);
        grid
    })
}
