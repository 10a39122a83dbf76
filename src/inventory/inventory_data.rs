//! Inventory Data - Pure DOP
//!
//! Item stacks and slot containers. All transformations happen in
//! inventory_operations.rs

use crate::storage::VirtualInventoryHolder;
use crate::world::{LocationInfo, Material};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// A quantity of one kind of item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemStack {
    pub material: Material,
    pub amount: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl ItemStack {
    pub fn new(material: Material, amount: u32) -> Self {
        Self {
            material,
            amount,
            display_name: None,
        }
    }

    /// Same stack with a custom display name
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Same stack with a different amount
    pub fn with_amount(&self, amount: u32) -> Self {
        Self {
            amount,
            ..self.clone()
        }
    }

    /// Stacks that may share a slot: same material and display name
    pub fn is_similar(&self, other: &ItemStack) -> bool {
        self.material == other.material && self.display_name == other.display_name
    }

    pub fn is_empty(&self) -> bool {
        self.amount == 0 || self.material == Material::Air
    }
}

impl fmt::Display for ItemStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.display_name {
            Some(name) => write!(f, "{} x{} \"{}\"", self.material, self.amount, name),
            None => write!(f, "{} x{}", self.material, self.amount),
        }
    }
}

/// Process-unique inventory identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InventoryId(pub u64);

static NEXT_INVENTORY_ID: AtomicU64 = AtomicU64::new(1);

impl InventoryId {
    /// Allocate a fresh id
    pub fn next() -> Self {
        InventoryId(NEXT_INVENTORY_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for InventoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "inv#{}", self.0)
    }
}

/// Fixed-size slot container
///
/// Either backed by a physical block (`location`), or virtual with an
/// optional holder that hears about remote opens.
#[derive(Debug, Clone)]
pub struct Inventory {
    pub id: InventoryId,

    /// Slots that can hold item stacks (None = empty)
    pub slots: Vec<Option<ItemStack>>,

    /// Per-slot cap below the material's own stack size
    pub max_stack_size: Option<u32>,

    /// Physical block this inventory belongs to
    pub location: Option<LocationInfo>,

    /// Logical owner notified on remote opens
    pub holder: Option<Arc<dyn VirtualInventoryHolder>>,
}

/// Errors that can occur during inventory operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("Invalid slot index: {index} (size {size})")]
    InvalidSlot { index: usize, size: usize },
}
