//! Entity Operations - Pure DOP Functions
//!
//! Maintenance of decorative entities: cleanup of system-spawned markers and
//! visibility of filter item frames on hoppers.

use super::entity_data::{EntityData, EntityKind};
use crate::provider::CapabilityProvider;
use crate::settings::Settings;
use crate::world::{get_block, MaterialCategory, VoxelPos, WorldData, WorldsData};

/// Item frames hanging on `block`, in entity order
pub fn attached_item_frames<'a>(
    world: &'a WorldData,
    block: VoxelPos,
) -> impl Iterator<Item = &'a EntityData> + 'a {
    world.entities.iter().filter(move |entity| match &entity.kind {
        EntityKind::ItemFrame(frame) => entity.position.relative(frame.attached_face) == block,
        EntityKind::Marker => false,
    })
}

/// Remove every entity this system spawned; returns how many went
pub fn remove_marked_entities(world: &mut WorldData) -> usize {
    let before = world.entities.len();
    world.entities.retain(|entity| !entity.marked);
    let removed = before - world.entities.len();
    if removed > 0 {
        log::debug!(
            "[Entity::remove_marked_entities] Removed {} marked entities from '{}'",
            removed,
            world.id
        );
    }
    removed
}

/// Set visibility of every item frame hanging on a hopper
///
/// Returns the number of frames the provider was asked to update.
pub fn apply_item_frame_visibility(
    world: &mut WorldData,
    provider: &dyn CapabilityProvider,
    visible: bool,
) -> usize {
    let hopper_frames: Vec<usize> = world
        .entities
        .iter()
        .enumerate()
        .filter_map(|(index, entity)| match &entity.kind {
            EntityKind::ItemFrame(frame) => {
                let attached = entity.position.relative(frame.attached_face);
                (provider.classify(get_block(world, attached)) == MaterialCategory::Hopper)
                    .then_some(index)
            }
            EntityKind::Marker => None,
        })
        .collect();

    for &index in &hopper_frames {
        provider.set_decorative_entity_visible(&mut world.entities[index], visible);
    }
    hopper_frames.len()
}

/// Clean up markers and reapply frame visibility in every world
pub fn fix_entities(worlds: &mut WorldsData, provider: &dyn CapabilityProvider, settings: &Settings) {
    let visible = !settings.decorative_entities_hidden_by_default;
    let mut removed = 0;
    let mut frames = 0;
    for world in worlds.worlds.values_mut() {
        removed += remove_marked_entities(world);
        frames += apply_item_frame_visibility(world, provider, visible);
    }
    log::info!(
        "[Entity::fix_entities] Removed {} marked entities, set {} filter frames visible={}",
        removed,
        frames,
        visible
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{EntityId, ItemFrameData};
    use crate::provider::{resolve_provider, EngineVersion};
    use crate::world::{insert_world, load_region, set_block, BlockFace, Material, RegionPos, WorldId};

    fn frame_on(block: VoxelPos, id: u64, face: BlockFace) -> EntityData {
        EntityData {
            id: EntityId(id),
            position: block.relative(face.opposite()),
            marked: false,
            kind: EntityKind::ItemFrame(ItemFrameData {
                attached_face: face,
                item: None,
                rotation: 0,
                visible: true,
            }),
        }
    }

    fn frame_visible(entity: &EntityData) -> bool {
        match &entity.kind {
            EntityKind::ItemFrame(frame) => frame.visible,
            EntityKind::Marker => panic!("not a frame"),
        }
    }

    fn test_world() -> WorldData {
        let mut world = WorldData::new(WorldId::new("world"));
        load_region(&mut world, RegionPos::new(0, 0));
        let hopper = VoxelPos::new(2, 64, 2);
        let chest = VoxelPos::new(6, 64, 2);
        set_block(&mut world, hopper, Material::Hopper).unwrap();
        set_block(&mut world, chest, Material::Chest).unwrap();
        world.entities.push(frame_on(hopper, 1, BlockFace::North));
        world.entities.push(frame_on(chest, 2, BlockFace::North));
        world.entities.push(EntityData {
            id: EntityId(3),
            position: VoxelPos::new(0, 64, 0),
            marked: true,
            kind: EntityKind::Marker,
        });
        world
    }

    #[test]
    fn test_attached_item_frames() {
        let world = test_world();
        let frames: Vec<_> = attached_item_frames(&world, VoxelPos::new(2, 64, 2)).collect();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].id, EntityId(1));
    }

    #[test]
    fn test_remove_marked_entities() {
        let mut world = test_world();
        assert_eq!(remove_marked_entities(&mut world), 1);
        assert_eq!(world.entities.len(), 2);
        assert_eq!(remove_marked_entities(&mut world), 0);
    }

    #[test]
    fn test_frame_visibility_on_supported_version() {
        let provider = resolve_provider("1.16.5").unwrap();
        let mut world = test_world();
        assert_eq!(apply_item_frame_visibility(&mut world, provider.as_ref(), false), 1);
        assert!(!frame_visible(&world.entities[0]));
        // Frames on other blocks are left alone
        assert!(frame_visible(&world.entities[1]));
    }

    #[test]
    fn test_frame_visibility_is_noop_on_1_14() {
        let provider = resolve_provider("1.14.4").unwrap();
        assert_eq!(provider.version(), EngineVersion::V1_14);
        let mut world = test_world();
        apply_item_frame_visibility(&mut world, provider.as_ref(), false);
        assert!(frame_visible(&world.entities[0]));
    }

    #[test]
    fn test_fix_entities() {
        let provider = resolve_provider("1.16.5").unwrap();
        let settings = Settings {
            decorative_entities_hidden_by_default: true,
            ..Settings::default()
        };
        let mut worlds = WorldsData::default();
        insert_world(&mut worlds, test_world());

        fix_entities(&mut worlds, provider.as_ref(), &settings);
        let world = &worlds.worlds[&WorldId::new("world")];
        assert_eq!(world.entities.len(), 2);
        assert!(!frame_visible(&world.entities[0]));
    }
}
