//! Capability Provider Data
//!
//! The fixed contract every engine-version implementation satisfies, and the
//! enumeration of versions that have one.

use crate::entity::EntityData;
use crate::error::{StorageError, StorageResult};
use crate::inventory::InventoryId;
use crate::world::{Material, MaterialCategory, VoxelPos, WorldData};
use std::fmt;
use std::str::FromStr;

/// Engine versions with a provider implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EngineVersion {
    V1_14,
    V1_15,
    V1_16,
}

impl EngineVersion {
    pub const SUPPORTED: [EngineVersion; 3] =
        [EngineVersion::V1_14, EngineVersion::V1_15, EngineVersion::V1_16];

    pub fn minor(self) -> u32 {
        match self {
            EngineVersion::V1_14 => 14,
            EngineVersion::V1_15 => 15,
            EngineVersion::V1_16 => 16,
        }
    }
}

impl fmt::Display for EngineVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1.{}", self.minor())
    }
}

impl FromStr for EngineVersion {
    type Err = StorageError;

    /// Accepts release strings (`1.16`, `1.16.5`) and package tags
    /// (`v1_16_R3`, `1_14_R1`)
    fn from_str(s: &str) -> StorageResult<Self> {
        let unsupported = || StorageError::UnsupportedVersion {
            version: s.to_string(),
        };

        let trimmed = s.trim().trim_start_matches(|c| c == 'v' || c == 'V');
        let mut parts = trimmed.split(|c| c == '.' || c == '_');
        let major = parts.next().ok_or_else(unsupported)?;
        let minor = parts.next().ok_or_else(unsupported)?;
        if major != "1" {
            return Err(unsupported());
        }

        match minor.parse::<u32>().map_err(|_| unsupported())? {
            14 => Ok(EngineVersion::V1_14),
            15 => Ok(EngineVersion::V1_15),
            16 => Ok(EngineVersion::V1_16),
            _ => Err(unsupported()),
        }
    }
}

/// Operations that differ across engine versions
///
/// Resolved once at startup and shared read-only afterwards.
pub trait CapabilityProvider: Send + Sync + fmt::Debug {
    /// Version this provider implements
    fn version(&self) -> EngineVersion;

    /// Drive the lid of the container at `container` open or closed on behalf
    /// of `inventory`. Returns true if the container's lid state changed.
    fn open_animation(
        &self,
        world: &mut WorldData,
        inventory: InventoryId,
        container: VoxelPos,
        open: bool,
    ) -> bool;

    /// Version-specific material classification
    fn classify(&self, material: Material) -> MaterialCategory;

    /// Show or hide a decorative entity; versions without the feature do
    /// nothing.
    fn set_decorative_entity_visible(&self, entity: &mut EntityData, visible: bool);
}
