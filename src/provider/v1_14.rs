//! Provider for the 1.14 and 1.15 engines
//!
//! Lids follow a viewer count: each open adds a viewer, each close removes
//! one, and the lid stays up while anyone is looking. Item frames cannot be
//! hidden on these versions.

use super::provider_data::{CapabilityProvider, EngineVersion};
use super::shared_category;
use crate::entity::EntityData;
use crate::inventory::InventoryId;
use crate::world::{get_container_mut, Material, MaterialCategory, VoxelPos, WorldData};

#[derive(Debug, Clone, Copy)]
pub struct ProviderV1_14 {
    version: EngineVersion,
}

impl ProviderV1_14 {
    pub fn new(version: EngineVersion) -> Self {
        debug_assert!(matches!(version, EngineVersion::V1_14 | EngineVersion::V1_15));
        Self { version }
    }
}

impl CapabilityProvider for ProviderV1_14 {
    fn version(&self) -> EngineVersion {
        self.version
    }

    fn open_animation(
        &self,
        world: &mut WorldData,
        inventory: InventoryId,
        container: VoxelPos,
        open: bool,
    ) -> bool {
        let state = match get_container_mut(world, container) {
            Ok(state) => state,
            Err(e) => {
                log::debug!("[ProviderV1_14::open_animation] {} for {}", e, inventory);
                return false;
            }
        };

        state.viewers = if open {
            state.viewers.saturating_add(1)
        } else {
            state.viewers.saturating_sub(1)
        };
        let was_open = state.lid_open;
        state.lid_open = state.viewers > 0;
        was_open != state.lid_open
    }

    fn classify(&self, material: Material) -> MaterialCategory {
        shared_category(material).unwrap_or(MaterialCategory::Unknown)
    }

    fn set_decorative_entity_visible(&self, _entity: &mut EntityData, _visible: bool) {
        // Not supported before 1.16
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{load_region, place_container, RegionPos, WorldId};

    #[test]
    fn test_viewer_counted_lid() {
        let provider = ProviderV1_14::new(EngineVersion::V1_14);
        let mut world = WorldData::new(WorldId::new("world"));
        load_region(&mut world, RegionPos::new(0, 0));
        let pos = VoxelPos::new(1, 64, 1);
        place_container(&mut world, pos, Material::Chest, 27).unwrap();
        let inv = InventoryId(7);

        assert!(provider.open_animation(&mut world, inv, pos, true));
        assert!(!provider.open_animation(&mut world, inv, pos, true));
        assert!(!provider.open_animation(&mut world, inv, pos, false));
        assert!(world.containers[&pos].lid_open);
        assert!(provider.open_animation(&mut world, inv, pos, false));
        assert!(!world.containers[&pos].lid_open);
    }

    #[test]
    fn test_missing_container_is_skipped() {
        let provider = ProviderV1_14::new(EngineVersion::V1_15);
        let mut world = WorldData::new(WorldId::new("world"));
        assert!(!provider.open_animation(&mut world, InventoryId(1), VoxelPos::new(0, 0, 0), true));
    }

    #[test]
    fn test_viewer_count_saturates() {
        let provider = ProviderV1_14::new(EngineVersion::V1_14);
        let mut world = WorldData::new(WorldId::new("world"));
        load_region(&mut world, RegionPos::new(0, 0));
        let pos = VoxelPos::new(2, 64, 2);
        place_container(&mut world, pos, Material::Barrel, 27).unwrap();
        world.containers.get_mut(&pos).unwrap().viewers = u32::MAX;

        provider.open_animation(&mut world, InventoryId(3), pos, true);
        let state = world.containers[&pos];
        assert_eq!(state.viewers, u32::MAX);
        assert!(state.lid_open);
    }

    #[test]
    fn test_netherite_unknown() {
        let provider = ProviderV1_14::new(EngineVersion::V1_14);
        assert_eq!(provider.classify(Material::NetheriteBlock), MaterialCategory::Unknown);
        assert_eq!(provider.classify(Material::Barrel), MaterialCategory::Barrel);
        assert_eq!(provider.classify(Material::CaveAir), MaterialCategory::Air);
    }
}
