//! Filter Operations - Pure DOP Functions
//!
//! Decide whether an item stack may take part in a transfer.

use super::filter_data::{Filter, HopperFilter};
use crate::entity::{attached_item_frames, EntityKind};
use crate::inventory::ItemStack;
use crate::world::{VoxelPos, WorldData};

/// Check a single filter against a stack
pub fn filter_accepts(filter: &Filter, stack: &ItemStack) -> bool {
    match filter {
        Filter::Material { material } => stack.material == *material,
        Filter::Exact {
            material,
            display_name,
        } => stack.material == *material && stack.display_name == *display_name,
    }
}

/// True iff `filters` is absent or empty, or any filter accepts the stack
pub fn matches(filters: Option<&[Filter]>, stack: &ItemStack) -> bool {
    match filters {
        None => true,
        Some([]) => true,
        Some(list) => list.iter().any(|filter| filter_accepts(filter, stack)),
    }
}

/// First filter in list order that accepts the stack
///
/// Only explains a match; an empty list accepts without a filter to point at.
pub fn matching_filter<'a>(filters: &'a [Filter], stack: &ItemStack) -> Option<&'a Filter> {
    filters.iter().find(|filter| filter_accepts(filter, stack))
}

/// Check a stack against a hopper's filter set
pub fn hopper_accepts(hopper: &HopperFilter, stack: &ItemStack) -> bool {
    matches(Some(hopper.filters.as_slice()), stack)
}

/// Build a hopper's filters from the item frames hanging on it
///
/// Frames are read in entity order. An unrotated frame filters by material; a
/// rotated frame also requires the display name to match. Empty frames are
/// ignored.
pub fn filters_for_hopper(world: &WorldData, hopper: VoxelPos) -> HopperFilter {
    let filters = attached_item_frames(world, hopper)
        .filter_map(|entity| match &entity.kind {
            EntityKind::ItemFrame(frame) => frame.item.as_ref().map(|item| {
                if frame.rotation == 0 {
                    Filter::material(item.material)
                } else {
                    Filter::exact(item.material, item.display_name.clone())
                }
            }),
            EntityKind::Marker => None,
        })
        .collect();

    HopperFilter::new(filters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{EntityData, EntityId, ItemFrameData};
    use crate::world::{BlockFace, Material, WorldId};

    fn stone(amount: u32) -> ItemStack {
        ItemStack::new(Material::Stone, amount)
    }

    #[test]
    fn test_empty_filters_accept_everything() {
        assert!(matches(None, &stone(1)));
        assert!(matches(Some(&[]), &stone(1)));
        assert!(matches(Some(&[]), &ItemStack::new(Material::DiamondSword, 1)));
    }

    #[test]
    fn test_or_semantics() {
        let filters = vec![Filter::material(Material::Dirt), Filter::material(Material::Stone)];
        assert!(matches(Some(filters.as_slice()), &stone(3)));
        assert!(!matches(Some(filters.as_slice()), &ItemStack::new(Material::Glass, 3)));

        // Order does not change the outcome
        let reversed: Vec<Filter> = filters.iter().rev().cloned().collect();
        assert_eq!(
            matches(Some(filters.as_slice()), &stone(3)),
            matches(Some(reversed.as_slice()), &stone(3))
        );
    }

    #[test]
    fn test_matching_filter_is_first_in_order() {
        let filters = vec![
            Filter::exact(Material::Stone, None),
            Filter::material(Material::Stone),
        ];
        assert_eq!(matching_filter(&filters, &stone(1)), Some(&filters[0]));

        let named = stone(1).with_display_name("Polished");
        assert_eq!(matching_filter(&filters, &named), Some(&filters[1]));
    }

    #[test]
    fn test_exact_filter_checks_name() {
        let filter = Filter::exact(Material::Diamond, Some("Prize".to_string()));
        assert!(filter_accepts(
            &filter,
            &ItemStack::new(Material::Diamond, 1).with_display_name("Prize")
        ));
        assert!(!filter_accepts(&filter, &ItemStack::new(Material::Diamond, 1)));
    }

    #[test]
    fn test_filters_for_hopper() {
        let mut world = WorldData::new(WorldId::new("world"));
        let hopper = VoxelPos::new(0, 64, 0);
        let frame = |id, face: BlockFace, item: Option<ItemStack>, rotation| EntityData {
            id: EntityId(id),
            position: hopper.relative(face.opposite()),
            marked: false,
            kind: EntityKind::ItemFrame(ItemFrameData {
                attached_face: face,
                item,
                rotation,
                visible: true,
            }),
        };
        world.entities.push(frame(1, BlockFace::North, Some(stone(1)), 0));
        world.entities.push(frame(
            2,
            BlockFace::East,
            Some(ItemStack::new(Material::Diamond, 1).with_display_name("Prize")),
            2,
        ));
        world.entities.push(frame(3, BlockFace::South, None, 0));

        let hopper_filter = filters_for_hopper(&world, hopper);
        assert_eq!(
            hopper_filter.filters,
            vec![
                Filter::material(Material::Stone),
                Filter::exact(Material::Diamond, Some("Prize".to_string())),
            ]
        );
        assert!(hopper_accepts(&hopper_filter, &stone(10)));
        assert!(!hopper_accepts(&hopper_filter, &ItemStack::new(Material::Diamond, 1)));
    }
}
