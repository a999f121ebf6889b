use indicatif::ProgressBar;
use proptest::prelude::*;
use splat_voxelizer::despeckle::despeckle;
use splat_voxelizer::labeling::{filter_by_density, resolve_voxels};
use splat_voxelizer::voxel_grid::VoxelGrid;
use splat_voxelizer::{LabeledVoxel, Point, VoxelKey, VoxelizerConfig, voxelize};
use std::collections::HashSet;

fn config() -> VoxelizerConfig {
    VoxelizerConfig {
        scale_factor: 1.0,
        saturation_boost: 1.0,
        min_neighbors: 0,
        ..VoxelizerConfig::default()
    }
}

/// Points on integer-ish coordinates with quarter-step opacities, so every
/// partial sum is exactly representable.
fn point_strategy() -> impl Strategy<Value = Point> {
    (
        (-4i32..4, -4i32..4, -4i32..4),
        (0u8..=255, 0u8..=255, 0u8..=255),
        1u8..=4,
    )
        .prop_map(|((x, y, z), (r, g, b), quarter)| {
            Point::new(
                [x as f64 + 0.5, y as f64 + 0.5, z as f64 + 0.5],
                [r as f64, g as f64, b as f64],
                quarter as f64 * 0.25,
            )
        })
}

fn key_strategy() -> impl Strategy<Value = VoxelKey> {
    (-3i32..3, -3i32..3, -3i32..3).prop_map(|(x, y, z)| VoxelKey::new(x, y, z))
}

proptest! {
    #[test]
    fn partitioned_accumulation_matches_single_pass(
        points in prop::collection::vec(point_strategy(), 0..200),
        split in 0usize..200,
    ) {
        let config = config();
        let split = split.min(points.len());

        let mut single = VoxelGrid::new();
        single.add_points(&points, &config);

        let mut left = VoxelGrid::new();
        left.add_points(&points[..split], &config);
        let mut right = VoxelGrid::new();
        right.add_points(&points[split..], &config);
        left.merge(right);

        prop_assert_eq!(left.len(), single.len());
        for (key, cell) in single.iter() {
            prop_assert_eq!(left.get(&key), Some(cell));
        }
    }

    #[test]
    fn raising_density_threshold_never_adds_voxels(
        points in prop::collection::vec(point_strategy(), 0..200),
        t1 in 0.0f64..1.0,
        delta in 0.0f64..1.0,
    ) {
        let mut grid = VoxelGrid::new();
        grid.add_points(&points, &config());
        let resolved = resolve_voxels(&grid);

        let low: HashSet<VoxelKey> = filter_by_density(resolved.clone(), t1)
            .iter()
            .map(|v| v.key)
            .collect();
        let high: HashSet<VoxelKey> = filter_by_density(resolved, t1 + delta)
            .iter()
            .map(|v| v.key)
            .collect();

        prop_assert!(high.is_subset(&low));
    }

    #[test]
    fn raising_min_neighbors_never_adds_voxels(
        keys in prop::collection::hash_set(key_strategy(), 0..120),
        m in 0u32..6,
    ) {
        let voxels: Vec<LabeledVoxel> = keys
            .into_iter()
            .map(|key| LabeledVoxel::new(key, "minecraft:stone"))
            .collect();

        let looser = despeckle(voxels.clone(), m).kept.len();
        let stricter = despeckle(voxels, m + 1).kept.len();
        prop_assert!(stricter <= looser);
    }

    #[test]
    fn pipeline_output_has_unique_keys(
        points in prop::collection::vec(point_strategy(), 0..300),
        min_neighbors in 0u32..3,
    ) {
        let config = VoxelizerConfig { min_neighbors, ..config() };
        let palette = config.build_palette().unwrap();
        let output = voxelize(&points, &config, &palette, &ProgressBar::hidden());

        let keys: HashSet<VoxelKey> = output.voxels.iter().map(|v| v.key).collect();
        prop_assert_eq!(keys.len(), output.voxels.len());

        let mut grid = VoxelGrid::new();
        grid.add_points(&points, &config);
        for voxel in &output.voxels {
            let density = grid.get(&voxel.key).map(|cell| cell.sum_opacity).unwrap_or(0.0);
            prop_assert!(density > config.density_threshold);
        }
    }
}
