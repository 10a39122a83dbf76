//! Filter Data - Pure DOP
//!
//! Inclusion rules for item transfers. No state, no methods beyond
//! constructors; evaluation lives in filter_operations.rs

use crate::world::Material;
use serde::{Deserialize, Serialize};

/// One inclusion rule
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Filter {
    /// Any stack of this material, whatever its name
    Material { material: Material },

    /// Stacks of this material carrying exactly this display name
    Exact {
        material: Material,
        display_name: Option<String>,
    },
}

impl Filter {
    pub fn material(material: Material) -> Self {
        Filter::Material { material }
    }

    pub fn exact(material: Material, display_name: Option<String>) -> Self {
        Filter::Exact {
            material,
            display_name,
        }
    }
}

/// Ordered filter list with OR semantics; empty accepts everything
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HopperFilter {
    pub filters: Vec<Filter>,
}

impl HopperFilter {
    pub fn new(filters: Vec<Filter>) -> Self {
        Self { filters }
    }
}
