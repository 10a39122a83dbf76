//! Entity Data - Pure DOP
//!
//! Decorative entities placed next to linked storage. No methods.

use crate::inventory::ItemStack;
use crate::world::{BlockFace, VoxelPos};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct EntityData {
    pub id: EntityId,

    /// Block the entity occupies
    pub position: VoxelPos,

    /// Spawned by this system; removed by `remove_marked_entities`
    pub marked: bool,

    pub kind: EntityKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntityKind {
    ItemFrame(ItemFrameData),
    /// Invisible marker with no behaviour of its own
    Marker,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemFrameData {
    /// Direction from the frame to the block it hangs on
    pub attached_face: BlockFace,

    /// Displayed item
    pub item: Option<ItemStack>,

    /// Rotation step, 0..8
    pub rotation: u8,

    pub visible: bool,
}
