//! Virtual-Only Inventories
//!
//! Inventories with no block behind them. Their logical owner hears about
//! every remote open through a `VirtualInventoryHolder`.

use crate::host::{play_sound_at_player, push_command, HostCommand, HostOutbox, SoundCue};
use crate::inventory::Inventory;
use crate::world::{PlayerData, PlayerId};
use std::fmt;

/// Logical owner of a virtual inventory
pub trait VirtualInventoryHolder: Send + Sync + fmt::Debug {
    /// A player opened the owned inventory remotely
    fn on_remote_open(&self, player: PlayerId);
}

/// Present a virtual inventory to a player
///
/// The holder is told first, then the inventory is shown and an open cue
/// plays at the player's position.
pub fn open_virtual(outbox: &mut HostOutbox, player: &PlayerData, inventory: &Inventory) {
    if let Some(holder) = &inventory.holder {
        holder.on_remote_open(player.id);
    }

    push_command(
        outbox,
        HostCommand::OpenInventory {
            player: player.id,
            inventory: inventory.id,
        },
    );
    play_sound_at_player(outbox, player, SoundCue::ChestOpen);

    log::debug!(
        "[Storage::open_virtual] {} opened {} remotely (holder: {})",
        player.id,
        inventory.id,
        inventory.holder.is_some()
    );
}
