/// Integer voxel bounds tracking and local-space translation
use crate::voxel_grid::VoxelKey;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoxelBounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
    pub min_z: i32,
    pub max_z: i32,
}

impl VoxelBounds {
    /// Create empty bounds that any key will expand
    pub fn new() -> Self {
        Self {
            min_x: i32::MAX,
            max_x: i32::MIN,
            min_y: i32::MAX,
            max_y: i32::MIN,
            min_z: i32::MAX,
            max_z: i32::MIN,
        }
    }

    /// Bounds enclosing every key, or None for an empty set
    pub fn from_keys(keys: impl IntoIterator<Item = VoxelKey>) -> Option<Self> {
        let mut bounds = Self::new();
        for key in keys {
            bounds.update(key);
        }
        (!bounds.is_empty()).then_some(bounds)
    }

    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x
    }

    /// Update bounds with a new voxel
    pub fn update(&mut self, key: VoxelKey) {
        self.min_x = self.min_x.min(key.x);
        self.max_x = self.max_x.max(key.x);
        self.min_y = self.min_y.min(key.y);
        self.max_y = self.max_y.max(key.y);
        self.min_z = self.min_z.min(key.z);
        self.max_z = self.max_z.max(key.z);
    }

    /// Container size per axis (max - min + 1), widened so the full key range fits
    pub fn size(&self) -> (i64, i64, i64) {
        (
            self.max_x as i64 - self.min_x as i64 + 1,
            self.max_y as i64 - self.min_y as i64 + 1,
            self.max_z as i64 - self.min_z as i64 + 1,
        )
    }

    /// Cell count, saturating at `i64::MAX`
    pub fn volume(&self) -> i64 {
        let (x, y, z) = self.size();
        x.saturating_mul(y).saturating_mul(z)
    }

    /// Translate a world key into non-negative container coordinates
    pub fn to_local(&self, key: VoxelKey) -> (i64, i64, i64) {
        (
            key.x as i64 - self.min_x as i64,
            key.y as i64 - self.min_y as i64,
            key.z as i64 - self.min_z as i64,
        )
    }
}

impl Default for VoxelBounds {
    fn default() -> Self {
        Self::new()
    }
}
