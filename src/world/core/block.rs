use crate::constants::inventory::DEFAULT_MAX_STACK;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Block and item materials known to the linked storage core
///
/// A material exists across engine versions, but what a given version makes of
/// it is decided by the capability provider's classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    Air,
    CaveAir,
    Stone,
    Dirt,
    Cobblestone,
    Planks,
    Glass,
    Torch,
    Chest,
    TrappedChest,
    Barrel,
    Hopper,
    IronIngot,
    GoldIngot,
    Diamond,
    EnderPearl,
    DiamondSword,
    NetheriteIngot,
    NetheriteBlock,
}

impl Default for Material {
    fn default() -> Self {
        Material::Air
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Material::Air => write!(f, "Air"),
            Material::CaveAir => write!(f, "Cave Air"),
            Material::Stone => write!(f, "Stone"),
            Material::Dirt => write!(f, "Dirt"),
            Material::Cobblestone => write!(f, "Cobblestone"),
            Material::Planks => write!(f, "Planks"),
            Material::Glass => write!(f, "Glass"),
            Material::Torch => write!(f, "Torch"),
            Material::Chest => write!(f, "Chest"),
            Material::TrappedChest => write!(f, "Trapped Chest"),
            Material::Barrel => write!(f, "Barrel"),
            Material::Hopper => write!(f, "Hopper"),
            Material::IronIngot => write!(f, "Iron Ingot"),
            Material::GoldIngot => write!(f, "Gold Ingot"),
            Material::Diamond => write!(f, "Diamond"),
            Material::EnderPearl => write!(f, "Ender Pearl"),
            Material::DiamondSword => write!(f, "Diamond Sword"),
            Material::NetheriteIngot => write!(f, "Netherite Ingot"),
            Material::NetheriteBlock => write!(f, "Netherite Block"),
        }
    }
}

impl Material {
    /// Largest amount a single slot may hold
    pub const fn max_stack_size(self) -> u32 {
        match self {
            Material::DiamondSword => 1,
            Material::EnderPearl => 16,
            _ => DEFAULT_MAX_STACK,
        }
    }
}

/// Version-independent category a classifier assigns to a material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialCategory {
    Air,
    Chest,
    Barrel,
    Hopper,
    /// Full opaque block
    Occluding,
    /// Placeable but see-through (glass, torches)
    Transparent,
    /// Item only, never placed
    Item,
    /// Not present in the running engine version
    Unknown,
}

impl MaterialCategory {
    pub fn is_air(self) -> bool {
        self == MaterialCategory::Air
    }

    pub fn is_occluding(self) -> bool {
        matches!(self, MaterialCategory::Occluding | MaterialCategory::Barrel)
    }

    /// Blocks that can back a linked storage group
    pub fn is_linkable_container(self) -> bool {
        matches!(self, MaterialCategory::Chest | MaterialCategory::Barrel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_stack_size() {
        assert_eq!(Material::Cobblestone.max_stack_size(), 64);
        assert_eq!(Material::EnderPearl.max_stack_size(), 16);
        assert_eq!(Material::DiamondSword.max_stack_size(), 1);
    }

    #[test]
    fn test_category_predicates() {
        assert!(MaterialCategory::Barrel.is_occluding());
        assert!(!MaterialCategory::Chest.is_occluding());
        assert!(MaterialCategory::Chest.is_linkable_container());
        assert!(!MaterialCategory::Hopper.is_linkable_container());
    }
}
