//! World Module
//!
//! The slice of the host world the linked storage core needs: which regions
//! are loaded, which blocks are containers, and where decorative entities
//! hang.
//!
//! # Architecture Overview
//!
//! - **Core**: Fundamental data types (Material, Position, Face, Ray)
//! - **Data types**: Pure world data (WorldData, LocationInfo, PlayerData)
//! - **Operations**: Pure functions over world data (world_operations)

pub mod core;
pub mod data_types;
pub mod error;
pub mod world_operations;

// Re-export core types for convenience
pub use core::{BlockFace, Material, MaterialCategory, Ray, RegionPos, VoxelPos};

pub use data_types::{
    ContainerRef, ContainerState, LocationInfo, PlayerData, PlayerId, WorldData, WorldId,
    WorldStats, WorldsData,
};
pub use error::{WorldError, WorldResult};

// Re-export DOP world operations as the primary API
pub use world_operations::{
    get_block, get_container, get_container_mut, get_world, get_world_mut, insert_world,
    is_region_loaded, last_two_target_blocks, load_region, log_world_stats, place_container,
    remove_world, resolve_location, set_block, unload_region, world_stats, WorldModification,
};
