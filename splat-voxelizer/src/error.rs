/// Error types for the splat voxelizer.
use std::path::PathBuf;

/// Result type alias using VoxelizerError
pub type Result<T> = std::result::Result<T, VoxelizerError>;

/// Fatal errors. Any of these aborts the run before an output file is opened.
#[derive(Debug, thiserror::Error)]
pub enum VoxelizerError {
    #[error("Input file does not exist: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PLY file has no '{0}' element")]
    MissingElement(String),

    #[error("PLY element '{element}' is missing required property '{property}'")]
    MissingField { element: String, property: String },

    #[error("PLY vertices carry neither red/green/blue nor f_dc_0/f_dc_1/f_dc_2 colour properties")]
    MissingColour,

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Region of {0} blocks is too large for a single schematic")]
    RegionTooLarge(i64),

    #[error("NBT error: {0}")]
    Nbt(#[from] fastnbt::error::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration validation failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("block palette is empty")]
    EmptyPalette,

    #[error("scale_factor must be a finite value greater than zero, got {0}")]
    InvalidScale(f64),

    #[error("{name} must lie within [0, 1], got {value}")]
    OutOfUnitRange { name: &'static str, value: f64 },

    #[error("saturation_boost must be finite and non-negative, got {0}")]
    InvalidSaturation(f64),
}

/// Reasons a single voxel could not be placed into the schematic.
/// These are counted and skipped, never fatal.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlacementError {
    #[error("invalid block identifier '{0}'")]
    InvalidBlockId(String),

    #[error("voxel ({0}, {1}, {2}) lies outside the region")]
    OutOfRegion(i32, i32, i32),
}
