//! Virtual Inventory Aggregator
//!
//! Link groups of physical containers into one merged inventory, plus
//! virtual inventories with no block behind them.

pub mod chestlink_data;
pub mod chestlink_operations;
pub mod virtual_holder;

pub use chestlink_data::ChestLinkStorage;
pub use chestlink_operations::{close_for, close_sound, create_chest_link, is_animatable, open_for};
pub use virtual_holder::{open_virtual, VirtualInventoryHolder};
