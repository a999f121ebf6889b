/// Litematica container version written to the root compound
pub const LITEMATIC_VERSION: i32 = 6;
pub const LITEMATIC_SUBVERSION: i32 = 1;

/// Minecraft data version stamped into the schematic (1.20.4)
pub const MINECRAFT_DATA_VERSION: i32 = 3700;

/// File extension for generated schematics
pub const LITEMATIC_EXTENSION: &str = "litematic";

/// Name of the single region holding all voxels
pub const REGION_NAME: &str = "main";

/// Palette slot zero of every region
pub const AIR_BLOCK: &str = "minecraft:air";

/// Default author recorded in schematic metadata
pub const DEFAULT_AUTHOR: &str = "3DGS-Converter";

/// Minimum bits per packed block state entry
pub const MIN_BITS_PER_ENTRY: u32 = 2;
