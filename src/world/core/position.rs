use super::BlockFace;
use crate::constants::world::REGION_SHIFT;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer block position in world space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct VoxelPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl VoxelPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Region column containing this block
    pub fn region(self) -> RegionPos {
        RegionPos {
            x: self.x >> REGION_SHIFT,
            z: self.z >> REGION_SHIFT,
        }
    }

    /// Neighbouring block across `face`
    pub fn relative(self, face: BlockFace) -> VoxelPos {
        let (dx, dy, dz) = face.offset();
        VoxelPos {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    /// Centre of the block's footprint at its base height
    pub fn horizontal_center(self) -> (f32, f32) {
        (self.x as f32 + 0.5, self.z as f32 + 0.5)
    }
}

impl fmt::Display for VoxelPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Column of 16x16 blocks; the unit a world loads and unloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RegionPos {
    pub x: i32,
    pub z: i32,
}

impl RegionPos {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }
}
