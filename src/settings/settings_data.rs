//! Settings Data - Pure DOP
//!
//! NO METHODS. Just data.
//! Loading and validation happen in settings_operations.rs

use serde::{Deserialize, Serialize};

/// Settings the linked storage core reads; never written by the core
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Animate every chest in a group, not only the one clicked
    pub animate_all_linked_containers: bool,

    /// Hide filter item frames on hoppers
    pub decorative_entities_hidden_by_default: bool,

    /// Engine version string used to resolve the capability provider
    pub engine_version: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            animate_all_linked_containers: true,
            decorative_entities_hidden_by_default: false,
            engine_version: "1.16".to_string(),
        }
    }
}
