//! Chest Link Operations - Pure DOP Functions
//!
//! Form link groups, open and close them, and keep member lids in step.

use super::chestlink_data::ChestLinkStorage;
use crate::constants::scheduling::ANIMATION_DELAY_TICKS;
use crate::error::{StorageError, StorageResult};
use crate::host::{play_sound_at_location, play_sound_at_player, push_command, HostCommand, HostOutbox, SoundCue};
use crate::inventory::{create_inventory, Inventory};
use crate::scheduler::{schedule_after, ScheduledTask, TickScheduler};
use crate::settings::Settings;
use crate::world::{is_region_loaded, resolve_location, LocationInfo, PlayerData, WorldsData};

/// Form a group over `locations`
///
/// The merged inventory gets one slot per slot of every member that resolves
/// now. Members that do not resolve stay in the group and contribute nothing.
pub fn create_chest_link(worlds: &WorldsData, locations: Vec<LocationInfo>) -> StorageResult<ChestLinkStorage> {
    let slot_count: usize = locations
        .iter()
        .filter_map(|location| resolve_location(worlds, location))
        .map(|container| container.slot_count)
        .sum();

    if slot_count == 0 {
        return Err(StorageError::EmptyLinkGroup);
    }

    log::info!(
        "[Storage::create_chest_link] Linked {} locations into {} slots",
        locations.len(),
        slot_count
    );

    Ok(ChestLinkStorage {
        locations,
        inventory: create_inventory(slot_count),
    })
}

/// True when the location is a container in a loaded region right now
pub fn is_animatable(worlds: &WorldsData, location: &LocationInfo) -> bool {
    let Some(container) = resolve_location(worlds, location) else {
        return false;
    };
    let region = container.position.region();
    is_region_loaded(worlds, &location.world, region.x, region.z)
}

/// Queue lid animations for a group; returns how many were queued
fn schedule_lids(
    settings: &Settings,
    worlds: &WorldsData,
    scheduler: &mut TickScheduler,
    storage: &ChestLinkStorage,
    triggering: &LocationInfo,
    open: bool,
) -> usize {
    let targets: Vec<&LocationInfo> = if settings.animate_all_linked_containers {
        storage
            .locations
            .iter()
            .filter(|location| {
                let animatable = is_animatable(worlds, location);
                if !animatable {
                    log::debug!(
                        "[Storage::schedule_lids] Skipping {}: not loaded or not a container",
                        location
                    );
                }
                animatable
            })
            .collect()
    } else {
        vec![triggering]
    };

    for location in &targets {
        schedule_after(
            scheduler,
            ANIMATION_DELAY_TICKS,
            ScheduledTask::LidAnimation {
                inventory: storage.inventory.id,
                location: (*location).clone(),
                open,
            },
        );
    }
    targets.len()
}

/// Open a group for a player
///
/// Lid animations are queued for the next tick, then the merged inventory
/// is presented. Returns the number of animations queued.
pub fn open_for(
    settings: &Settings,
    worlds: &WorldsData,
    scheduler: &mut TickScheduler,
    outbox: &mut HostOutbox,
    player: &PlayerData,
    storage: &ChestLinkStorage,
    triggering: &LocationInfo,
) -> usize {
    let scheduled = schedule_lids(settings, worlds, scheduler, storage, triggering, true);
    push_command(
        outbox,
        HostCommand::OpenInventory {
            player: player.id,
            inventory: storage.inventory.id,
        },
    );
    log::debug!(
        "[Storage::open_for] {} opened {} via {} ({} lids queued)",
        player.id,
        storage.inventory.id,
        triggering,
        scheduled
    );
    scheduled
}

/// Close a group: queue the matching lid-close animations
pub fn close_for(
    settings: &Settings,
    worlds: &WorldsData,
    scheduler: &mut TickScheduler,
    storage: &ChestLinkStorage,
    triggering: &LocationInfo,
) -> usize {
    schedule_lids(settings, worlds, scheduler, storage, triggering, false)
}

/// Play the close cue for an inventory a player just closed
///
/// The cue plays at the inventory's block when it has one, otherwise at
/// the player.
pub fn close_sound(outbox: &mut HostOutbox, player: &PlayerData, inventory: &Inventory) {
    match &inventory.location {
        Some(location) => play_sound_at_location(outbox, location, SoundCue::ChestClose),
        None => play_sound_at_player(outbox, player, SoundCue::ChestClose),
    }
}
