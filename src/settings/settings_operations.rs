//! Settings Operations - Pure DOP Functions
//!
//! Parse settings from TOML or JSON and validate them before startup.

use super::settings_data::Settings;
use crate::error::{StorageError, StorageResult};
use crate::provider::EngineVersion;
use anyhow::Result;
use std::path::Path;

/// Parse settings from TOML text; missing keys keep their defaults
pub fn settings_from_toml(text: &str) -> StorageResult<Settings> {
    Ok(toml::from_str(text)?)
}

/// Parse settings from JSON text; missing keys keep their defaults
pub fn settings_from_json(text: &str) -> StorageResult<Settings> {
    Ok(serde_json::from_str(text)?)
}

/// Load settings from a `.toml` or `.json` file
pub fn load_settings(path: &Path) -> StorageResult<Settings> {
    let text = std::fs::read_to_string(path).map_err(|e| StorageError::IoError {
        path: path.display().to_string(),
        error: e.to_string(),
    })?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let settings = match extension.as_deref() {
        Some("toml") => settings_from_toml(&text)?,
        Some("json") => settings_from_json(&text)?,
        other => {
            return Err(StorageError::InvalidConfig {
                field: "path".to_string(),
                value: path.display().to_string(),
                reason: format!("unsupported settings format {:?}", other),
            })
        }
    };

    log::info!(
        "[Settings::load_settings] Loaded {} (animate_all={}, frames_hidden={}, version={})",
        path.display(),
        settings.animate_all_linked_containers,
        settings.decorative_entities_hidden_by_default,
        settings.engine_version
    );
    Ok(settings)
}

/// Validate settings parameters
pub fn validate_settings(settings: &Settings) -> Result<EngineVersion> {
    if settings.engine_version.trim().is_empty() {
        return Err(anyhow::anyhow!("Settings: engine_version cannot be empty"));
    }

    let version = settings.engine_version.parse::<EngineVersion>().map_err(|e| {
        log::warn!("[Settings::validate_settings] {}", e);
        anyhow::anyhow!(
            "Settings: engine_version '{}' is not supported (supported: {})",
            settings.engine_version,
            EngineVersion::SUPPORTED
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )
    })?;

    log::info!("[Settings::validate_settings] Settings validated successfully");
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_toml_defaults_fill_missing_keys() {
        let settings = settings_from_toml("animate_all_linked_containers = false\n").unwrap();
        assert!(!settings.animate_all_linked_containers);
        assert_eq!(settings.engine_version, Settings::default().engine_version);
    }

    #[test]
    fn test_json_settings() {
        let settings = settings_from_json(
            r#"{"decorative_entities_hidden_by_default": true, "engine_version": "1.14.4"}"#,
        )
        .unwrap();
        assert!(settings.decorative_entities_hidden_by_default);
        assert!(settings.animate_all_linked_containers);
        assert_eq!(validate_settings(&settings).unwrap(), EngineVersion::V1_14);
    }

    #[test]
    fn test_bad_toml() {
        let err = settings_from_toml("animate_all_linked_containers = 3").unwrap_err();
        assert!(matches!(err, StorageError::DeserializationError { .. }));
    }

    #[test]
    fn test_load_settings_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "engine_version = \"1.15.2\"").unwrap();
        let settings = load_settings(file.path()).unwrap();
        assert_eq!(settings.engine_version, "1.15.2");
    }

    #[test]
    fn test_load_settings_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        let err = load_settings(file.path()).unwrap_err();
        assert!(matches!(err, StorageError::InvalidConfig { .. }));
    }

    #[test]
    fn test_validate_rejects_unsupported_version() {
        let settings = Settings {
            engine_version: "1.8".to_string(),
            ..Settings::default()
        };
        assert!(validate_settings(&settings).is_err());

        let settings = Settings {
            engine_version: "  ".to_string(),
            ..Settings::default()
        };
        assert!(validate_settings(&settings).is_err());
    }
}
