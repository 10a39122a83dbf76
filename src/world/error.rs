/// World Error Handling
///
/// Error type for world lookups and block edits.
use super::core::VoxelPos;

/// World-specific result type
pub type WorldResult<T> = Result<T, WorldError>;

#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    #[error("World not found: {0}")]
    WorldNotFound(String),

    #[error("Region ({x}, {z}) not loaded in world {world}")]
    RegionNotLoaded { world: String, x: i32, z: i32 },

    #[error("Block at {pos} in world {world} is not a container")]
    NotAContainer { world: String, pos: VoxelPos },
}
