//! Provider for the 1.16 engine

use super::provider_data::{CapabilityProvider, EngineVersion};
use super::shared_category;
use crate::entity::{EntityData, EntityKind};
use crate::inventory::InventoryId;
use crate::world::{get_container_mut, Material, MaterialCategory, VoxelPos, WorldData};

#[derive(Debug, Clone, Copy, Default)]
pub struct ProviderV1_16;

impl CapabilityProvider for ProviderV1_16 {
    fn version(&self) -> EngineVersion {
        EngineVersion::V1_16
    }

    fn open_animation(
        &self,
        world: &mut WorldData,
        inventory: InventoryId,
        container: VoxelPos,
        open: bool,
    ) -> bool {
        match get_container_mut(world, container) {
            Ok(state) => {
                let changed = state.lid_open != open;
                state.lid_open = open;
                state.viewers = u32::from(open);
                changed
            }
            Err(e) => {
                log::debug!("[ProviderV1_16::open_animation] {} for {}", e, inventory);
                false
            }
        }
    }

    fn classify(&self, material: Material) -> MaterialCategory {
        match material {
            Material::NetheriteIngot => MaterialCategory::Item,
            Material::NetheriteBlock => MaterialCategory::Occluding,
            other => shared_category(other).unwrap_or(MaterialCategory::Unknown),
        }
    }

    fn set_decorative_entity_visible(&self, entity: &mut EntityData, visible: bool) {
        if let EntityKind::ItemFrame(frame) = &mut entity.kind {
            frame.visible = visible;
        }
    }
}
