//! World Operations - Pure DOP Functions
//!
//! This is the PUBLIC API for world queries and edits.
//! Functions take world data, return results, and touch nothing else.

use super::core::{Material, Ray, RegionPos, VoxelPos};
use super::data_types::{
    ContainerRef, ContainerState, LocationInfo, WorldData, WorldId, WorldStats, WorldsData,
};
use super::error::{WorldError, WorldResult};

// ============================================================================
// WORLD SET OPERATIONS
// ============================================================================

/// Register a world, replacing any world with the same id
pub fn insert_world(worlds: &mut WorldsData, world: WorldData) {
    log::info!("[World::insert_world] Registered world '{}'", world.id);
    worlds.worlds.insert(world.id.clone(), world);
}

/// Forget a world; every location in it stops resolving
pub fn remove_world(worlds: &mut WorldsData, id: &WorldId) -> Option<WorldData> {
    let removed = worlds.worlds.remove(id);
    if removed.is_some() {
        log::info!("[World::remove_world] Unloaded world '{}'", id);
    }
    removed
}

/// Look up a world by id
pub fn get_world<'a>(worlds: &'a WorldsData, id: &WorldId) -> WorldResult<&'a WorldData> {
    worlds
        .worlds
        .get(id)
        .ok_or_else(|| WorldError::WorldNotFound(id.0.clone()))
}

/// Look up a world by id for editing
pub fn get_world_mut<'a>(
    worlds: &'a mut WorldsData,
    id: &WorldId,
) -> WorldResult<&'a mut WorldData> {
    worlds
        .worlds
        .get_mut(id)
        .ok_or_else(|| WorldError::WorldNotFound(id.0.clone()))
}

// ============================================================================
// REGION OPERATIONS
// ============================================================================

/// Check if a region is loaded; unknown worlds have nothing loaded
pub fn is_region_loaded(worlds: &WorldsData, world: &WorldId, region_x: i32, region_z: i32) -> bool {
    worlds
        .worlds
        .get(world)
        .map(|data| data.loaded_regions.contains(&RegionPos::new(region_x, region_z)))
        .unwrap_or(false)
}

/// Mark a region as loaded
pub fn load_region(world: &mut WorldData, region: RegionPos) {
    world.loaded_regions.insert(region);
}

/// Mark a region as unloaded
pub fn unload_region(world: &mut WorldData, region: RegionPos) {
    world.loaded_regions.remove(&region);
}

// ============================================================================
// BLOCK OPERATIONS
// ============================================================================

/// Get block at position, AIR where nothing was placed
pub fn get_block(world: &WorldData, pos: VoxelPos) -> Material {
    world.blocks.get(&pos).copied().unwrap_or(Material::Air)
}

/// Set block at position
///
/// Replacing a block drops its container state. Fails when the region is not
/// loaded.
pub fn set_block(
    world: &mut WorldData,
    pos: VoxelPos,
    material: Material,
) -> WorldResult<WorldModification> {
    ensure_region_loaded(world, pos)?;

    let old_block = get_block(world, pos);
    world.containers.remove(&pos);
    if material == Material::Air {
        world.blocks.remove(&pos);
    } else {
        world.blocks.insert(pos, material);
    }

    Ok(WorldModification {
        position: pos,
        old_block,
        new_block: material,
    })
}

/// Place a container block with its block-entity state
pub fn place_container(
    world: &mut WorldData,
    pos: VoxelPos,
    material: Material,
    slot_count: usize,
) -> WorldResult<WorldModification> {
    let modification = set_block(world, pos, material)?;
    world.containers.insert(
        pos,
        ContainerState {
            material,
            slot_count,
            lid_open: false,
            viewers: 0,
        },
    );
    Ok(modification)
}

/// Container state at a position, if the block there is still a container
pub fn get_container(world: &WorldData, pos: VoxelPos) -> Option<&ContainerState> {
    world
        .containers
        .get(&pos)
        .filter(|state| get_block(world, pos) == state.material)
}

/// Container state for editing, if the block there is still a container
pub fn get_container_mut(world: &mut WorldData, pos: VoxelPos) -> WorldResult<&mut ContainerState> {
    let block = get_block(world, pos);
    match world.containers.get_mut(&pos) {
        Some(state) if state.material == block => Ok(state),
        _ => Err(WorldError::NotAContainer {
            world: world.id.0.clone(),
            pos,
        }),
    }
}

/// Resolve a location to the container currently standing there
///
/// Returns None when the world is gone or the block is no longer a container.
pub fn resolve_location(worlds: &WorldsData, info: &LocationInfo) -> Option<ContainerRef> {
    let world = worlds.worlds.get(&info.world)?;
    get_container(world, info.position).map(|state| ContainerRef {
        position: info.position,
        material: state.material,
        slot_count: state.slot_count,
    })
}

fn ensure_region_loaded(world: &WorldData, pos: VoxelPos) -> WorldResult<()> {
    let region = pos.region();
    if world.loaded_regions.contains(&region) {
        Ok(())
    } else {
        Err(WorldError::RegionNotLoaded {
            world: world.id.0.clone(),
            x: region.x,
            z: region.z,
        })
    }
}

/// World modification record
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorldModification {
    pub position: VoxelPos,
    pub old_block: Material,
    pub new_block: Material,
}

// ============================================================================
// RAYCASTING
// ============================================================================

/// Walk a ray block by block and return the last two blocks visited
///
/// The walk starts in the block containing the ray origin, steps through
/// face-adjacent blocks and stops at the first block `is_transparent` rejects
/// or once `max_distance` is exceeded. The result is ordered near-to-far and
/// holds at most two positions.
pub fn last_two_target_blocks<F>(
    world: &WorldData,
    ray: Ray,
    max_distance: f32,
    is_transparent: F,
) -> Vec<VoxelPos>
where
    F: Fn(Material) -> bool,
{
    let origin = [ray.origin.x, ray.origin.y, ray.origin.z];
    let direction = [ray.direction.x, ray.direction.y, ray.direction.z];

    let mut voxel = [
        origin[0].floor() as i32,
        origin[1].floor() as i32,
        origin[2].floor() as i32,
    ];
    let mut step = [0i32; 3];
    let mut t_max = [f32::INFINITY; 3];
    let mut t_delta = [f32::INFINITY; 3];

    for axis in 0..3 {
        if direction[axis] > 0.0 {
            step[axis] = 1;
            t_delta[axis] = 1.0 / direction[axis];
            t_max[axis] = (voxel[axis] as f32 + 1.0 - origin[axis]) * t_delta[axis];
        } else if direction[axis] < 0.0 {
            step[axis] = -1;
            t_delta[axis] = -1.0 / direction[axis];
            t_max[axis] = (origin[axis] - voxel[axis] as f32) * t_delta[axis];
        }
    }

    let mut visited: Vec<VoxelPos> = Vec::with_capacity(2);
    loop {
        let pos = VoxelPos::new(voxel[0], voxel[1], voxel[2]);
        if visited.len() == 2 {
            visited.remove(0);
        }
        visited.push(pos);

        if !is_transparent(get_block(world, pos)) {
            break;
        }

        // Advance along the axis whose boundary is nearest
        let axis = if t_max[0] <= t_max[1] && t_max[0] <= t_max[2] {
            0
        } else if t_max[1] <= t_max[2] {
            1
        } else {
            2
        };

        if !t_max[axis].is_finite() || t_max[axis] > max_distance {
            break;
        }
        voxel[axis] += step[axis];
        t_max[axis] += t_delta[axis];
    }

    visited
}

// ============================================================================
// STATISTICS
// ============================================================================

/// Collect world statistics
pub fn world_stats(world: &WorldData) -> WorldStats {
    WorldStats {
        loaded_regions: world.loaded_regions.len(),
        blocks: world.blocks.len(),
        containers: world.containers.len(),
        open_containers: world.containers.values().filter(|c| c.lid_open).count(),
        entities: world.entities.len(),
    }
}

/// Log world statistics
pub fn log_world_stats(world: &WorldData) {
    let stats = world_stats(world);
    log::info!(
        "[World::stats] '{}': regions={}, blocks={}, containers={} ({} open), entities={}",
        world.id,
        stats.loaded_regions,
        stats.blocks,
        stats.containers,
        stats.open_containers,
        stats.entities
    );
}
