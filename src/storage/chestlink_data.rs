//! Chest Link Data - Pure DOP
//!
//! NO METHODS. Just data.
//! Group behaviour lives in chestlink_operations.rs

use crate::inventory::Inventory;
use crate::world::LocationInfo;

/// A group of physical containers presented as one inventory
#[derive(Debug, Clone)]
pub struct ChestLinkStorage {
    /// Member containers in link order
    pub locations: Vec<LocationInfo>,

    /// The merged inventory; sized once when the group is formed
    pub inventory: Inventory,
}
