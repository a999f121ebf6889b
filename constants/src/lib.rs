pub mod palette;
pub mod schematic;
pub mod voxelization;
