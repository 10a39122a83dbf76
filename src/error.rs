//! Error handling for the linked storage core
//!
//! One crate-wide error type. Stale locations, partial transfers and lost
//! leftovers are outcomes, not errors; only startup and configuration
//! problems surface here.

use std::error::Error as StdError;
use std::fmt;

/// Main error type for the linked storage core
#[derive(Debug)]
pub enum StorageError {
    // Startup Errors
    UnsupportedVersion {
        version: String,
    },

    // Configuration Errors
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },

    // World Errors
    WorldNotFound {
        world: String,
    },
    RegionNotLoaded {
        world: String,
        region: (i32, i32),
    },
    NotAContainer {
        world: String,
        pos: (i32, i32, i32),
    },

    // Inventory Errors
    SlotOutOfBounds {
        index: usize,
        size: usize,
    },
    EmptyLinkGroup,

    // System Errors
    IoError {
        path: String,
        error: String,
    },
    DeserializationError {
        context: String,
        error: String,
    },

    // Generic fallback for unexpected errors
    Internal {
        message: String,
    },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::UnsupportedVersion { version } => {
                write!(f, "Unsupported engine version: {}", version)
            }

            StorageError::InvalidConfig {
                field,
                value,
                reason,
            } => write!(f, "Invalid config: {} = {} ({})", field, value, reason),

            StorageError::WorldNotFound { world } => write!(f, "World not found: {}", world),
            StorageError::RegionNotLoaded { world, region } => {
                write!(f, "Region {:?} not loaded in world {}", region, world)
            }
            StorageError::NotAContainer { world, pos } => {
                write!(f, "Block at {:?} in world {} is not a container", pos, world)
            }

            StorageError::SlotOutOfBounds { index, size } => write!(
                f,
                "Slot out of bounds: index {} >= size {}",
                index, size
            ),
            StorageError::EmptyLinkGroup => {
                write!(f, "Link group has no resolvable container")
            }

            StorageError::IoError { path, error } => write!(f, "IO error for {}: {}", path, error),
            StorageError::DeserializationError { context, error } => {
                write!(f, "Deserialization error in {}: {}", context, error)
            }

            StorageError::Internal { message } => write!(f, "Internal error: {}", message),
        }
    }
}

impl StdError for StorageError {}

/// Type alias for Results in the linked storage core
pub type StorageResult<T> = Result<T, StorageError>;

// Conversion traits for common error types

impl From<std::io::Error> for StorageError {
    fn from(error: std::io::Error) -> Self {
        StorageError::IoError {
            path: String::new(),
            error: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for StorageError {
    fn from(error: toml::de::Error) -> Self {
        StorageError::DeserializationError {
            context: "toml".to_string(),
            error: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(error: serde_json::Error) -> Self {
        StorageError::DeserializationError {
            context: "json".to_string(),
            error: error.to_string(),
        }
    }
}

impl From<crate::world::WorldError> for StorageError {
    fn from(err: crate::world::WorldError) -> Self {
        use crate::world::WorldError;
        match err {
            WorldError::WorldNotFound(world) => StorageError::WorldNotFound { world },
            WorldError::RegionNotLoaded { world, x, z } => StorageError::RegionNotLoaded {
                world,
                region: (x, z),
            },
            WorldError::NotAContainer { world, pos } => StorageError::NotAContainer {
                world,
                pos: (pos.x, pos.y, pos.z),
            },
        }
    }
}

impl From<crate::inventory::InventoryError> for StorageError {
    fn from(err: crate::inventory::InventoryError) -> Self {
        use crate::inventory::InventoryError;
        match err {
            InventoryError::InvalidSlot { index, size } => {
                StorageError::SlotOutOfBounds { index, size }
            }
        }
    }
}

// Helper functions for common error patterns

/// Convert Option to Result with context
pub trait OptionExt<T> {
    fn ok_or_storage<F>(self, f: F) -> StorageResult<T>
    where
        F: FnOnce() -> StorageError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_storage<F>(self, f: F) -> StorageResult<T>
    where
        F: FnOnce() -> StorageError,
    {
        self.ok_or_else(f)
    }
}

/// Extension trait for adding context to errors
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> StorageResult<T>;
    fn with_context<F>(self, f: F) -> StorageResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: fmt::Display,
{
    fn context(self, msg: &str) -> StorageResult<T> {
        self.map_err(|e| StorageError::Internal {
            message: format!("{}: {}", msg, e),
        })
    }

    fn with_context<F>(self, f: F) -> StorageResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| StorageError::Internal {
            message: format!("{}: {}", f(), e),
        })
    }
}
