// Chestlink Engine - Data-Oriented Programming (DOP) Architecture
//
// Linked storage core: many physical containers presented as one inventory,
// filtered item transfer between inventories, and the per-version
// capability provider those operations run against.
//
// Data lives in *_data modules; behaviour lives in *_operations modules as
// pure functions. `StorageEngine` owns the runtime state and wires the
// operations together for a host.

// Constants module
pub mod constants;

// Core modules
pub mod error;
pub mod settings;

// World model
pub mod entity;
pub mod world;

// Inventories and item movement
pub mod filter;
pub mod inventory;
pub mod storage;
pub mod transfer;

// Version abstraction and link formation
pub mod orientation;
pub mod provider;

// Runtime plumbing
pub mod host;
pub mod scheduler;

use std::sync::Arc;

pub use error::{ErrorContext, OptionExt, StorageError, StorageResult};
pub use filter::{matches, Filter, HopperFilter};
pub use host::{HostCommand, HostOutbox, SoundCue};
pub use inventory::{Inventory, InventoryId, ItemStack, SharedInventory};
pub use orientation::{is_horizontal, placement_facing, view_facing, ChestPlacement};
pub use provider::{CapabilityProvider, EngineVersion};
pub use scheduler::{ScheduledTask, TickReport, TickScheduler};
pub use settings::Settings;
pub use storage::{ChestLinkStorage, VirtualInventoryHolder};
pub use transfer::{extract, transfer, transfer_unfiltered, TransferOutcome};
pub use world::{
    BlockFace, LocationInfo, Material, MaterialCategory, PlayerData, PlayerId, VoxelPos,
    WorldData, WorldId, WorldsData,
};

/// Initialise `env_logger`, defaulting to `info`; later calls are ignored
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

/// Runtime state of the linked storage core
///
/// Owns the settings, the capability provider resolved at startup, the
/// world model, the tick scheduler and the host outbox.
#[derive(Debug)]
pub struct StorageEngine {
    settings: Settings,
    provider: Arc<dyn CapabilityProvider>,
    worlds: WorldsData,
    scheduler: TickScheduler,
    outbox: HostOutbox,
}

impl StorageEngine {
    /// Validate settings and resolve the capability provider
    ///
    /// Fails when the configured engine version is not supported; no engine
    /// exists without a provider.
    pub fn start(settings: Settings) -> StorageResult<Self> {
        log::debug!("[StorageEngine::start] Starting with {:?}", settings);

        let version = settings::validate_settings(&settings).map_err(|e| {
            log::error!("[StorageEngine::start] Settings validation failed: {}", e);
            StorageError::UnsupportedVersion {
                version: settings.engine_version.clone(),
            }
        })?;
        let provider = provider::provider_for(version);

        log::info!(
            "[StorageEngine::start] Started on engine {} (animate_all={})",
            provider.version(),
            settings.animate_all_linked_containers
        );

        Ok(Self {
            settings,
            provider,
            worlds: WorldsData::default(),
            scheduler: TickScheduler::default(),
            outbox: HostOutbox::default(),
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn provider(&self) -> &dyn CapabilityProvider {
        self.provider.as_ref()
    }

    pub fn worlds(&self) -> &WorldsData {
        &self.worlds
    }

    pub fn worlds_mut(&mut self) -> &mut WorldsData {
        &mut self.worlds
    }

    pub fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    /// Form a link group over `locations`
    pub fn link_containers(&self, locations: Vec<LocationInfo>) -> StorageResult<ChestLinkStorage> {
        storage::create_chest_link(&self.worlds, locations)
    }

    /// Work out facing and link candidate for a container a player placed
    pub fn resolve_placement(&self, player: &PlayerData, placed: VoxelPos) -> StorageResult<ChestPlacement> {
        let world = world::get_world(&self.worlds, &player.world)?;
        Ok(orientation::resolve_placement(
            player,
            placed,
            world,
            self.provider.as_ref(),
        ))
    }

    /// Filters a hopper reads from the item frames hanging on it
    pub fn hopper_filters(&self, hopper: &LocationInfo) -> StorageResult<HopperFilter> {
        let world = world::get_world(&self.worlds, &hopper.world)?;
        Ok(filter::filters_for_hopper(world, hopper.position))
    }

    /// Open a link group for a player; returns the lid animations queued
    pub fn open_chest_inventory(
        &mut self,
        player: &PlayerData,
        storage: &ChestLinkStorage,
        triggering: &LocationInfo,
    ) -> usize {
        storage::open_for(
            &self.settings,
            &self.worlds,
            &mut self.scheduler,
            &mut self.outbox,
            player,
            storage,
            triggering,
        )
    }

    /// Close a link group; returns the lid animations queued
    pub fn close_chest_inventory(&mut self, storage: &ChestLinkStorage, triggering: &LocationInfo) -> usize {
        storage::close_for(
            &self.settings,
            &self.worlds,
            &mut self.scheduler,
            storage,
            triggering,
        )
    }

    /// Present a virtual inventory, notifying its holder
    pub fn open_virtual_inventory(&mut self, player: &PlayerData, inventory: &Inventory) {
        storage::open_virtual(&mut self.outbox, player, inventory);
    }

    /// Play the close cue for an inventory a player closed
    pub fn close_inventory_sound(&mut self, player: &PlayerData, inventory: &Inventory) {
        storage::close_sound(&mut self.outbox, player, inventory);
    }

    /// Advance one tick and run whatever became due
    pub fn tick(&mut self) -> TickReport {
        scheduler::run_due(&mut self.scheduler, &mut self.worlds, self.provider.as_ref())
    }

    /// Remove marked entities and reapply filter frame visibility everywhere
    pub fn fix_entities(&mut self) {
        entity::fix_entities(&mut self.worlds, self.provider.as_ref(), &self.settings);
    }

    /// Log block and region counts for every world
    pub fn log_stats(&self) {
        for data in self.worlds.worlds.values() {
            world::log_world_stats(data);
        }
    }

    /// Take every command queued for the host
    pub fn drain_host_commands(&mut self) -> Vec<HostCommand> {
        host::drain_commands(&mut self.outbox)
    }
}
