//! Decorative Entities
//!
//! Item frames that carry hopper filters, and marker entities spawned by the
//! linked storage system.

pub mod entity_data;
pub mod entity_operations;

pub use entity_data::{EntityData, EntityId, EntityKind, ItemFrameData};
pub use entity_operations::{
    apply_item_frame_visibility, attached_item_frames, fix_entities, remove_marked_entities,
};
