//! Shared inventories for hosts that mutate storage from several threads
//!
//! The tick loop needs none of this: it owns every inventory and mutates
//! through `&mut`. A multi-threaded host wraps each inventory in a
//! `SharedInventory` and takes both locks before a transfer.

use super::inventory_data::{Inventory, InventoryId};
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// Inventory guarded by its own mutex
#[derive(Debug, Clone)]
pub struct SharedInventory {
    id: InventoryId,
    inner: Arc<Mutex<Inventory>>,
}

impl SharedInventory {
    pub fn new(inventory: Inventory) -> Self {
        Self {
            id: inventory.id,
            inner: Arc::new(Mutex::new(inventory)),
        }
    }

    pub fn id(&self) -> InventoryId {
        self.id
    }

    pub fn lock(&self) -> MutexGuard<'_, Inventory> {
        self.inner.lock()
    }
}

/// Lock two distinct inventories, always in ascending id order
///
/// Returns the guards in argument order. Returns None when both handles point
/// at the same inventory.
pub fn lock_pair<'a>(
    first: &'a SharedInventory,
    second: &'a SharedInventory,
) -> Option<(MutexGuard<'a, Inventory>, MutexGuard<'a, Inventory>)> {
    if first.id == second.id || Arc::ptr_eq(&first.inner, &second.inner) {
        return None;
    }

    if first.id < second.id {
        let a = first.inner.lock();
        let b = second.inner.lock();
        Some((a, b))
    } else {
        let b = second.inner.lock();
        let a = first.inner.lock();
        Some((a, b))
    }
}
