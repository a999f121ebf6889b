/// Isolated voxel removal based on face-adjacent occupancy.
use crate::labeling::LabeledVoxel;
use crate::voxel_grid::VoxelKey;
use constants::voxelization::FACE_NEIGHBOR_OFFSETS;
use rayon::prelude::*;
use std::collections::HashSet;

/// Result of one despeckle pass.
#[derive(Debug, Default)]
pub struct DespeckleOutcome {
    pub kept: Vec<LabeledVoxel>,
    pub removed: usize,
}

/// Count occupied face neighbours of `key`, regardless of their block.
pub fn count_face_neighbors(key: VoxelKey, occupied: &HashSet<VoxelKey>) -> u32 {
    FACE_NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&offset| key.offset(offset).is_some_and(|n| occupied.contains(&n)))
        .count() as u32
}

/// Drop voxels with fewer than `min_neighbors` occupied face neighbours.
/// Every voxel is judged against the unfiltered input set (single pass, no
/// erosion). `min_neighbors == 0` keeps everything.
pub fn despeckle(voxels: Vec<LabeledVoxel>, min_neighbors: u32) -> DespeckleOutcome {
    if min_neighbors == 0 {
        return DespeckleOutcome {
            kept: voxels,
            removed: 0,
        };
    }

    let occupied: HashSet<VoxelKey> = voxels.iter().map(|voxel| voxel.key).collect();
    let total = voxels.len();

    let kept: Vec<LabeledVoxel> = voxels
        .into_par_iter()
        .filter(|voxel| count_face_neighbors(voxel.key, &occupied) >= min_neighbors)
        .collect();

    DespeckleOutcome {
        removed: total - kept.len(),
        kept,
    }
}
