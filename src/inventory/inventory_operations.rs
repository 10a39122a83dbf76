//! Inventory Operations - Pure DOP Functions
//!
//! Functions that read and mutate `Inventory` data in place.

use super::inventory_data::{Inventory, InventoryError, InventoryId, ItemStack};
use crate::storage::VirtualInventoryHolder;
use crate::world::LocationInfo;
use std::sync::Arc;

// ============================================================================
// CREATION
// ============================================================================

/// Create an empty virtual inventory
pub fn create_inventory(size: usize) -> Inventory {
    Inventory {
        id: InventoryId::next(),
        slots: vec![None; size],
        max_stack_size: None,
        location: None,
        holder: None,
    }
}

/// Create an empty inventory backed by a physical block
pub fn create_located_inventory(size: usize, location: LocationInfo) -> Inventory {
    Inventory {
        location: Some(location),
        ..create_inventory(size)
    }
}

/// Create an empty virtual inventory owned by `holder`
pub fn create_held_inventory(size: usize, holder: Arc<dyn VirtualInventoryHolder>) -> Inventory {
    Inventory {
        holder: Some(holder),
        ..create_inventory(size)
    }
}

/// Detached copy: same size and contents, fresh id, no location or holder
pub fn copy_inventory(inventory: &Inventory) -> Inventory {
    Inventory {
        id: InventoryId::next(),
        slots: inventory.slots.clone(),
        max_stack_size: inventory.max_stack_size,
        location: None,
        holder: None,
    }
}

// ============================================================================
// SLOT ACCESS
// ============================================================================

pub fn size(inventory: &Inventory) -> usize {
    inventory.slots.len()
}

/// Get the stack in a slot
pub fn get_item(inventory: &Inventory, index: usize) -> Result<Option<&ItemStack>, InventoryError> {
    inventory
        .slots
        .get(index)
        .map(|slot| slot.as_ref())
        .ok_or(InventoryError::InvalidSlot {
            index,
            size: inventory.slots.len(),
        })
}

/// Replace the stack in a slot; empty stacks clear it
pub fn set_item(
    inventory: &mut Inventory,
    index: usize,
    stack: Option<ItemStack>,
) -> Result<Option<ItemStack>, InventoryError> {
    let size = inventory.slots.len();
    let slot = inventory
        .slots
        .get_mut(index)
        .ok_or(InventoryError::InvalidSlot { index, size })?;
    let stack = stack.filter(|s| !s.is_empty());
    Ok(std::mem::replace(slot, stack))
}

/// Largest amount one slot of this inventory may hold of `stack`
pub fn slot_limit(inventory: &Inventory, stack: &ItemStack) -> u32 {
    let material_limit = stack.material.max_stack_size();
    inventory
        .max_stack_size
        .map_or(material_limit, |cap| cap.min(material_limit))
}

/// Returns true if the inventory has no items
pub fn is_empty(inventory: &Inventory) -> bool {
    inventory
        .slots
        .iter()
        .all(|slot| slot.as_ref().map_or(true, ItemStack::is_empty))
}

/// Finds the first empty slot index
pub fn first_empty(inventory: &Inventory) -> Option<usize> {
    inventory
        .slots
        .iter()
        .position(|slot| slot.as_ref().map_or(true, ItemStack::is_empty))
}

/// Counts how many items similar to `stack` are in the inventory
pub fn count_similar(inventory: &Inventory, stack: &ItemStack) -> u32 {
    inventory
        .slots
        .iter()
        .filter_map(|slot| slot.as_ref())
        .filter(|s| s.is_similar(stack))
        .map(|s| s.amount)
        .sum()
}

/// Total number of items in the inventory
pub fn total_items(inventory: &Inventory) -> u32 {
    inventory
        .slots
        .iter()
        .filter_map(|slot| slot.as_ref())
        .map(|s| s.amount)
        .sum()
}

// ============================================================================
// DEPOSIT
// ============================================================================

/// Adds a stack to the inventory
///
/// Returns the part that did not fit, or None if everything was accepted.
///
/// # Strategy
/// 1. Top up existing similar stacks in slot order
/// 2. Fill empty slots in slot order
pub fn add_item(inventory: &mut Inventory, stack: ItemStack) -> Option<ItemStack> {
    if stack.is_empty() {
        return None;
    }

    let limit = slot_limit(inventory, &stack);
    let mut remaining = stack.amount;

    // Phase 1: Top up existing stacks
    for existing in inventory.slots.iter_mut().flatten() {
        if remaining == 0 {
            break;
        }
        if existing.is_similar(&stack) && existing.amount < limit {
            let moved = remaining.min(limit - existing.amount);
            existing.amount += moved;
            remaining -= moved;
        }
    }

    // Phase 2: Create new stacks in empty slots
    for slot in inventory.slots.iter_mut() {
        if remaining == 0 || limit == 0 {
            break;
        }
        if slot.as_ref().map_or(true, ItemStack::is_empty) {
            let moved = remaining.min(limit);
            *slot = Some(stack.with_amount(moved));
            remaining -= moved;
        }
    }

    if remaining == 0 {
        None
    } else {
        Some(stack.with_amount(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Material;

    #[test]
    fn test_add_item_stacks_then_fills() {
        let mut inv = create_inventory(3);
        set_item(&mut inv, 1, Some(ItemStack::new(Material::Stone, 60))).unwrap();

        let leftover = add_item(&mut inv, ItemStack::new(Material::Stone, 10));
        assert_eq!(leftover, None);
        assert_eq!(get_item(&inv, 1).unwrap().unwrap().amount, 64);
        assert_eq!(get_item(&inv, 0).unwrap().unwrap().amount, 6);
    }

    #[test]
    fn test_add_item_returns_overflow() {
        let mut inv = create_inventory(1);
        let leftover = add_item(&mut inv, ItemStack::new(Material::EnderPearl, 20));
        assert_eq!(leftover, Some(ItemStack::new(Material::EnderPearl, 4)));
        assert_eq!(count_similar(&inv, &ItemStack::new(Material::EnderPearl, 1)), 16);
    }

    #[test]
    fn test_add_item_respects_inventory_cap() {
        let mut inv = create_inventory(2);
        inv.max_stack_size = Some(8);
        let leftover = add_item(&mut inv, ItemStack::new(Material::Dirt, 20));
        assert_eq!(leftover.map(|s| s.amount), Some(4));
        assert_eq!(total_items(&inv), 16);
    }

    #[test]
    fn test_named_items_do_not_merge() {
        let mut inv = create_inventory(2);
        set_item(
            &mut inv,
            0,
            Some(ItemStack::new(Material::Diamond, 1).with_display_name("Prize")),
        )
        .unwrap();
        add_item(&mut inv, ItemStack::new(Material::Diamond, 1));
        assert_eq!(get_item(&inv, 0).unwrap().unwrap().amount, 1);
        assert_eq!(get_item(&inv, 1).unwrap().unwrap().display_name, None);
    }

    #[test]
    fn test_set_item_out_of_bounds() {
        let mut inv = create_inventory(2);
        let result = set_item(&mut inv, 5, Some(ItemStack::new(Material::Stone, 1)));
        assert_eq!(result, Err(InventoryError::InvalidSlot { index: 5, size: 2 }));
    }

    #[test]
    fn test_copy_inventory_is_detached() {
        let location = LocationInfo::new(crate::world::WorldId::new("world"), Default::default());
        let mut inv = create_located_inventory(2, location);
        set_item(&mut inv, 0, Some(ItemStack::new(Material::Glass, 5))).unwrap();

        let copy = copy_inventory(&inv);
        assert_ne!(copy.id, inv.id);
        assert_eq!(copy.slots, inv.slots);
        assert!(copy.location.is_none());
        assert!(!is_empty(&copy));
    }
}
