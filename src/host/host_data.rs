//! Host Data - Command Outbox
//!
//! Requests the core makes of the host: present an inventory, play a cue.
//! The host drains the outbox after every call into the core.
//!
//! Pure DOP: No methods, just data structures.

use crate::inventory::InventoryId;
use crate::world::{PlayerId, WorldId};
use cgmath::Point3;
use std::collections::VecDeque;

/// Sound cues the core asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    ChestOpen,
    ChestClose,
}

/// Command from the core to the host
#[derive(Debug, Clone, PartialEq)]
pub enum HostCommand {
    /// Show an inventory to a player
    OpenInventory {
        player: PlayerId,
        inventory: InventoryId,
    },

    /// Play a sound cue in a world
    PlaySound {
        world: WorldId,
        position: Point3<f32>,
        cue: SoundCue,
        volume: f32,
        pitch: f32,
    },
}

/// Pending host commands in issue order
#[derive(Debug, Clone, Default)]
pub struct HostOutbox {
    pub pending: VecDeque<HostCommand>,
}
