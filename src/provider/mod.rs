//! Capability Provider Resolver
//!
//! Picks the one `CapabilityProvider` matching the running engine version.
//! Resolution happens once, in `StorageEngine::start`; every consumer then
//! receives the provider explicitly.

pub mod provider_data;
pub mod v1_14;
pub mod v1_16;

pub use provider_data::{CapabilityProvider, EngineVersion};
pub use v1_14::ProviderV1_14;
pub use v1_16::ProviderV1_16;

use crate::error::StorageResult;
use crate::world::{Material, MaterialCategory};
use std::sync::Arc;

/// Build the provider for a known version
pub fn provider_for(version: EngineVersion) -> Arc<dyn CapabilityProvider> {
    match version {
        EngineVersion::V1_14 | EngineVersion::V1_15 => Arc::new(ProviderV1_14::new(version)),
        EngineVersion::V1_16 => Arc::new(ProviderV1_16),
    }
}

/// Detect the version from its string form and build its provider
///
/// An unrecognised version is an error; callers must not continue without a
/// provider.
pub fn resolve_provider(version: &str) -> StorageResult<Arc<dyn CapabilityProvider>> {
    let parsed = version.parse::<EngineVersion>().map_err(|e| {
        log::error!("[Provider::resolve_provider] {}", e);
        e
    })?;
    log::info!(
        "[Provider::resolve_provider] Engine version '{}' resolved to provider {}",
        version,
        parsed
    );
    Ok(provider_for(parsed))
}

/// Classification every supported version agrees on
///
/// Returns None for materials whose meaning depends on the version.
pub(crate) fn shared_category(material: Material) -> Option<MaterialCategory> {
    let category = match material {
        Material::Air | Material::CaveAir => MaterialCategory::Air,
        Material::Chest | Material::TrappedChest => MaterialCategory::Chest,
        Material::Barrel => MaterialCategory::Barrel,
        Material::Hopper => MaterialCategory::Hopper,
        Material::Stone | Material::Dirt | Material::Cobblestone | Material::Planks => {
            MaterialCategory::Occluding
        }
        Material::Glass | Material::Torch => MaterialCategory::Transparent,
        Material::IronIngot
        | Material::GoldIngot
        | Material::Diamond
        | Material::EnderPearl
        | Material::DiamondSword => MaterialCategory::Item,
        Material::NetheriteIngot | Material::NetheriteBlock => return None,
    };
    Some(category)
}
