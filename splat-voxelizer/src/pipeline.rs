/// Stage sequencing from raw points to a despeckled, labelled voxel set.
use crate::config::VoxelizerConfig;
use crate::despeckle::despeckle;
use crate::error::Result;
use crate::labeling::{LabeledVoxel, filter_by_density, label_voxels, resolve_voxels};
use crate::normalizer::normalize_points;
use crate::palette::Palette;
use crate::point::{Point, RawPoint};
use crate::voxel_grid::accumulate_points;
use indicatif::ProgressBar;
use log::{debug, info, warn};

/// Per-stage counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub input_points: usize,
    pub discarded_points: usize,
    pub out_of_range_points: usize,
    pub accumulated_voxels: usize,
    pub dropped_by_density: usize,
    pub removed_by_despeckle: usize,
    pub final_voxels: usize,
}

/// Final voxel set. Keys are unique and every voxel passed both the density
/// and despeckle checks.
#[derive(Debug, Default)]
pub struct VoxelizeOutput {
    pub voxels: Vec<LabeledVoxel>,
    pub stats: PipelineStats,
}

/// Validate the configuration, normalise raw points and voxelize them.
pub fn run_pipeline(
    raw_points: &[RawPoint],
    config: &VoxelizerConfig,
    pb: &ProgressBar,
) -> Result<VoxelizeOutput> {
    config.validate()?;
    let palette = config.build_palette()?;

    let cloud = normalize_points(raw_points, config);
    info!(
        "Processing {} valid points ({} below opacity cutoff {})",
        cloud.points.len(),
        cloud.discarded,
        config.min_opacity_cutoff
    );

    let mut output = voxelize(&cloud.points, config, &palette, pb);
    output.stats.input_points = raw_points.len();
    output.stats.discarded_points = cloud.discarded;
    Ok(output)
}

/// Accumulate, resolve, label and despeckle already-normalised points.
pub fn voxelize(
    points: &[Point],
    config: &VoxelizerConfig,
    palette: &Palette,
    pb: &ProgressBar,
) -> VoxelizeOutput {
    let mut stats = PipelineStats {
        input_points: points.len(),
        ..PipelineStats::default()
    };

    pb.set_length(points.len() as u64);
    pb.set_message("Accumulating voxels");
    let grid = accumulate_points(points, config, pb);
    pb.finish_with_message("Voxels accumulated");
    stats.accumulated_voxels = grid.len();
    stats.out_of_range_points = grid.out_of_range();
    if grid.out_of_range() > 0 {
        warn!(
            "Skipped {} points outside the voxel grid at scale {}",
            grid.out_of_range(),
            config.scale_factor
        );
    }

    info!("Analysing {} voxels", grid.len());
    let resolved = resolve_voxels(&grid);
    let dense = filter_by_density(resolved, config.density_threshold);
    stats.dropped_by_density = grid.len() - dense.len();
    info!(
        "{} voxels above density {} ({} dropped)",
        dense.len(),
        config.density_threshold,
        stats.dropped_by_density
    );

    debug!("Matching against {} palette blocks", palette.len());
    let labeled = label_voxels(&dense, palette);

    info!("Despeckling (min neighbours: {})", config.min_neighbors);
    let outcome = despeckle(labeled, config.min_neighbors);
    if config.min_neighbors > 0 {
        info!("Removed {} isolated voxels", outcome.removed);
    }
    stats.removed_by_despeckle = outcome.removed;
    stats.final_voxels = outcome.kept.len();

    VoxelizeOutput {
        voxels: outcome.kept,
        stats,
    }
}
