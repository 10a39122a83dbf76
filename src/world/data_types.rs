//! World Data Types - Pure DOP Structures
//!
//! These are the data structures that world_operations functions operate on.
//! NO METHODS beyond trivial constructors - just pure data.

use super::core::{Material, RegionPos, VoxelPos};
use crate::entity::EntityData;
use cgmath::Point3;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a world, e.g. `world`, `world_nether`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorldId(pub String);

impl WorldId {
    pub fn new(name: impl Into<String>) -> Self {
        WorldId(name.into())
    }
}

impl fmt::Display for WorldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A block reference that may stop resolving (world unloaded, block removed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationInfo {
    pub world: WorldId,
    pub position: VoxelPos,
}

impl LocationInfo {
    pub fn new(world: WorldId, position: VoxelPos) -> Self {
        Self { world, position }
    }
}

impl fmt::Display for LocationInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.world, self.position)
    }
}

/// Block-entity state of a placed container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerState {
    pub material: Material,
    pub slot_count: usize,
    /// Lid currently drawn open
    pub lid_open: bool,
    /// Open requests currently holding the lid open
    pub viewers: u32,
}

/// A resolved, currently valid physical container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerRef {
    pub position: VoxelPos,
    pub material: Material,
    pub slot_count: usize,
}

/// Single world's data
#[derive(Debug, Clone, Default)]
pub struct WorldData {
    pub id: WorldId,

    /// Regions currently loaded
    pub loaded_regions: FxHashSet<RegionPos>,

    /// Non-air blocks
    pub blocks: FxHashMap<VoxelPos, Material>,

    /// Container block entities keyed by block position
    pub containers: FxHashMap<VoxelPos, ContainerState>,

    /// Decorative entities (item frames and markers)
    pub entities: Vec<EntityData>,
}

impl Default for WorldId {
    fn default() -> Self {
        WorldId::new("world")
    }
}

/// Every world the host currently knows about
#[derive(Debug, Clone, Default)]
pub struct WorldsData {
    pub worlds: FxHashMap<WorldId, WorldData>,
}

/// Player state the core reads
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerData {
    pub id: PlayerId,
    pub world: WorldId,

    /// Feet position
    pub position: Point3<f32>,

    /// Eye position
    pub eye_position: Point3<f32>,

    /// Yaw rotation (radians, around Y axis, 0 = +X)
    pub yaw_radians: f32,

    /// Pitch rotation (radians, positive looks up)
    pub pitch_radians: f32,
}

/// Stable player identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u128);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

impl WorldData {
    /// Create new empty world data
    pub fn new(id: WorldId) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }
}

/// World statistics
#[derive(Clone, Copy, Debug, Default)]
pub struct WorldStats {
    pub loaded_regions: usize,
    pub blocks: usize,
    pub containers: usize,
    pub open_containers: usize,
    pub entities: usize,
}
