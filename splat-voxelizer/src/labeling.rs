/// Density filtering and palette labelling of accumulated voxels.
use crate::palette::Palette;
use crate::voxel_grid::{VoxelGrid, VoxelKey};
use rayon::prelude::*;

/// Voxel with its weighted-average colour and accumulated opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedVoxel {
    pub key: VoxelKey,
    pub avg_colour: [f64; 3],
    /// Total accumulated opacity, used as a thickness proxy.
    pub density: f64,
}

/// Voxel assigned to a palette block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledVoxel {
    pub key: VoxelKey,
    pub block: String,
}

impl LabeledVoxel {
    pub fn new(key: VoxelKey, block: impl Into<String>) -> Self {
        Self {
            key,
            block: block.into(),
        }
    }
}

/// Compute average colour and density for every accumulated voxel.
/// Voxels without weight are skipped.
pub fn resolve_voxels(grid: &VoxelGrid) -> Vec<ResolvedVoxel> {
    grid.iter()
        .filter(|(_, cell)| cell.sum_opacity > 0.0)
        .map(|(key, cell)| ResolvedVoxel {
            key,
            avg_colour: [
                cell.sum_r / cell.sum_opacity,
                cell.sum_g / cell.sum_opacity,
                cell.sum_b / cell.sum_opacity,
            ],
            density: cell.sum_opacity,
        })
        .collect()
}

/// Keep voxels whose density is strictly above `threshold`.
pub fn filter_by_density(voxels: Vec<ResolvedVoxel>, threshold: f64) -> Vec<ResolvedVoxel> {
    voxels
        .into_iter()
        .filter(|voxel| voxel.density > threshold)
        .collect()
}

/// Match every voxel to its nearest palette block, keeping input order.
pub fn label_voxels(voxels: &[ResolvedVoxel], palette: &Palette) -> Vec<LabeledVoxel> {
    voxels
        .par_iter()
        .map(|voxel| LabeledVoxel::new(voxel.key, palette.closest_block(voxel.avg_colour)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteEntry;

    fn resolved(x: i32, density: f64) -> ResolvedVoxel {
        ResolvedVoxel {
            key: VoxelKey::new(x, 0, 0),
            avg_colour: [0.0, 0.0, 0.0],
            density,
        }
    }

    #[test]
    fn averages_are_weighted_by_opacity() {
        let mut grid = VoxelGrid::new();
        let key = VoxelKey::new(1, 2, 3);
        grid.add_sample(key, [200.0, 0.0, 0.0], 0.75);
        grid.add_sample(key, [0.0, 0.0, 100.0], 0.25);

        let voxels = resolve_voxels(&grid);
        assert_eq!(voxels.len(), 1);
        assert_eq!(voxels[0].key, key);
        assert_eq!(voxels[0].density, 1.0);
        assert_eq!(voxels[0].avg_colour, [150.0, 0.0, 25.0]);
    }

    #[test]
    fn zero_weight_voxels_are_skipped() {
        let mut grid = VoxelGrid::new();
        grid.add_sample(VoxelKey::new(0, 0, 0), [1.0, 1.0, 1.0], 0.0);
        assert!(resolve_voxels(&grid).is_empty());
    }

    #[test]
    fn threshold_is_strict() {
        let voxels = vec![resolved(0, 0.2), resolved(1, 0.25), resolved(2, 0.1)];
        let kept = filter_by_density(voxels, 0.2);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].key.x, 1);
    }

    #[test]
    fn labels_follow_nearest_colour() {
        let palette = Palette::new(vec![
            PaletteEntry::new("minecraft:black_concrete", [8, 10, 15]),
            PaletteEntry::new("minecraft:white_concrete", [207, 213, 214]),
        ])
        .unwrap();
        let voxels = vec![
            ResolvedVoxel {
                key: VoxelKey::new(0, 0, 0),
                avg_colour: [250.0, 250.0, 250.0],
                density: 1.0,
            },
            ResolvedVoxel {
                key: VoxelKey::new(1, 0, 0),
                avg_colour: [20.0, 20.0, 20.0],
                density: 1.0,
            },
        ];

        let labeled = label_voxels(&voxels, &palette);
        assert_eq!(
            labeled,
            vec![
                LabeledVoxel::new(VoxelKey::new(0, 0, 0), "minecraft:white_concrete"),
                LabeledVoxel::new(VoxelKey::new(1, 0, 0), "minecraft:black_concrete"),
            ]
        );
    }
}
