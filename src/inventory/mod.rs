//! Inventory System
//!
//! Slot containers, item stacks, and the shared wrapper for multi-threaded
//! hosts. Purely data-oriented: data in inventory_data, functions in
//! inventory_operations.

// Data structures
pub mod inventory_data;
// Pure functions
pub mod inventory_operations;
// Mutex-guarded inventories
pub mod shared;

// Re-export data structures
pub use inventory_data::{Inventory, InventoryError, InventoryId, ItemStack};
// Re-export operations
pub use inventory_operations::*;
pub use shared::{lock_pair, SharedInventory};
