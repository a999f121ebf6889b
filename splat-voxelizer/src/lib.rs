//! Gaussian splat point cloud to Minecraft schematic voxelizer.
//!
//! Points are axis-corrected, colour and opacity decoded, binned into an
//! integer grid with opacity-weighted colour sums, filtered by accumulated
//! density, matched to the nearest palette block and despeckled before being
//! written as a `.litematic` region.
pub mod bounds;
pub mod colour;
pub mod config;
pub mod converter;
pub mod despeckle;
pub mod error;
pub mod labeling;
pub mod litematic;
pub mod normalizer;
pub mod palette;
pub mod pipeline;
pub mod ply;
pub mod point;
pub mod voxel_grid;

pub use config::VoxelizerConfig;
pub use converter::{ConversionSummary, VoxelConverter};
pub use error::{ConfigError, PlacementError, Result, VoxelizerError};
pub use labeling::LabeledVoxel;
pub use pipeline::{PipelineStats, VoxelizeOutput, run_pipeline, voxelize};
pub use point::{Point, RawColour, RawPoint};
pub use voxel_grid::{KeyRounding, VoxelKey};
