/// Zeroth-order spherical harmonic basis constant used by splat exporters
pub const SH_C0: f64 = 0.28209479177387814;

/// World units to voxel grid multiplier
pub const DEFAULT_SCALE_FACTOR: f64 = 100.0;

/// Splat exports are usually upside down and mirrored in Minecraft space
pub const DEFAULT_INVERT_Y: bool = true;
pub const DEFAULT_MIRROR_X: bool = true;

/// Accumulated opacity a voxel needs to be kept (strictly greater than)
pub const DEFAULT_DENSITY_THRESHOLD: f64 = 0.2;

/// Points at or below this opacity never reach the grid
pub const DEFAULT_MIN_OPACITY_CUTOFF: f64 = 0.01;

/// Saturation multiplier applied per point (1.0 keeps source colours)
pub const DEFAULT_SATURATION_BOOST: f64 = 1.5;

/// Face-adjacent occupied neighbours a voxel needs to survive despeckling
pub const DEFAULT_MIN_NEIGHBORS: u32 = 1;

/// Points per parallel accumulation chunk
pub const ACCUMULATION_CHUNK_SIZE: usize = 25_000;

/// Face-adjacent neighbour offsets (+-X, +-Y, +-Z)
pub const FACE_NEIGHBOR_OFFSETS: [(i32, i32, i32); 6] = [
    (1, 0, 0),
    (-1, 0, 0),
    (0, 1, 0),
    (0, -1, 0),
    (0, 0, 1),
    (0, 0, -1),
];
