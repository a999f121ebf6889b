/// Gaussian splat PLY to Litematica converter entry point
use clap::Parser;
use splat_voxelizer::{KeyRounding, VoxelConverter, VoxelizerConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "splat-voxelizer",
    about = "Convert a Gaussian splat .ply point cloud into a .litematic schematic"
)]
struct Args {
    /// Input .ply file
    input: PathBuf,

    /// JSON configuration file (unset fields use defaults)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Directory for the schematic (default: next to the input)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Schematic file name without extension (default: input stem)
    #[arg(long, short)]
    output_name: Option<String>,

    /// Author recorded in the schematic metadata
    #[arg(long)]
    author: Option<String>,

    /// World units to blocks multiplier
    #[arg(long)]
    scale: Option<f64>,

    /// Flip the vertical axis
    #[arg(long)]
    invert_y: Option<bool>,

    /// Mirror the X axis
    #[arg(long)]
    mirror_x: Option<bool>,

    /// Accumulated opacity a voxel must exceed
    #[arg(long)]
    density_threshold: Option<f64>,

    /// Opacity a point must exceed to be used
    #[arg(long)]
    min_opacity: Option<f64>,

    /// Saturation multiplier (1.0 keeps source colours)
    #[arg(long)]
    saturation: Option<f64>,

    /// Occupied face neighbours needed to keep a voxel (0 disables despeckling)
    #[arg(long)]
    min_neighbors: Option<u32>,

    /// Grid key rounding for negative coordinates
    #[arg(long, value_enum)]
    key_rounding: Option<KeyRounding>,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

impl Args {
    /// Load the base configuration and apply command line overrides.
    fn resolve_config(&self) -> Result<VoxelizerConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => VoxelizerConfig::from_json_file(path)?,
            None => VoxelizerConfig::default(),
        };

        if let Some(scale) = self.scale {
            config.scale_factor = scale;
        }
        if let Some(invert_y) = self.invert_y {
            config.invert_y = invert_y;
        }
        if let Some(mirror_x) = self.mirror_x {
            config.mirror_x = mirror_x;
        }
        if let Some(threshold) = self.density_threshold {
            config.density_threshold = threshold;
        }
        if let Some(cutoff) = self.min_opacity {
            config.min_opacity_cutoff = cutoff;
        }
        if let Some(saturation) = self.saturation {
            config.saturation_boost = saturation;
        }
        if let Some(min_neighbors) = self.min_neighbors {
            config.min_neighbors = min_neighbors;
        }
        if let Some(rounding) = self.key_rounding {
            config.key_rounding = rounding;
        }

        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    let config = args.resolve_config()?;
    let mut converter = VoxelConverter::new(&args.input, config);
    if let Some(dir) = &args.output_dir {
        converter = converter.with_output_dir(dir);
    }
    if let Some(name) = &args.output_name {
        converter = converter.with_output_name(name);
    }
    if let Some(author) = &args.author {
        converter = converter.with_author(author);
    }

    let summary = converter.convert()?;

    println!("Conversion complete:");
    println!(
        "  Loaded: {} points ({} malformed records skipped)",
        summary.loaded_points, summary.skipped_records
    );
    if summary.pipeline.out_of_range_points > 0 {
        println!(
            "  Skipped {} points outside the voxel grid",
            summary.pipeline.out_of_range_points
        );
    }
    println!(
        "  Voxels: {} accumulated, {} below density, {} removed as isolated",
        summary.pipeline.accumulated_voxels,
        summary.pipeline.dropped_by_density,
        summary.pipeline.removed_by_despeckle
    );
    match summary.written {
        Some(written) => println!(
            "  Saved {} blocks to {} ({} failed)",
            written.placed,
            written.path.display(),
            written.failed
        ),
        None => println!("  Nothing to save: no voxels survived filtering"),
    }

    Ok(())
}
