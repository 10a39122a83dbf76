//! Settings
//!
//! Read-only configuration consumed by the linked storage core.

pub mod settings_data;
pub mod settings_operations;

pub use settings_data::Settings;
pub use settings_operations::{load_settings, settings_from_json, settings_from_toml, validate_settings};
