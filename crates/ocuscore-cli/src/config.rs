use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OcuscoreConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Used when `--format` is not given.
    #[serde(default)]
    pub default_format: OutputFormat,
    /// Added in v1; v0 files carried `patient_language` instead.
    #[serde(default)]
    pub simplified: bool,
    /// Fixed seed for every run, unless `--seed` is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_template: Option<PathBuf>,
}

/// `<config dir>/ocuscore/config.json`.
pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("ocuscore").join("config.json"))
}

/// Load the config from an explicit path, or from the default location.
///
/// A missing file at the default location yields the defaults; a missing
/// file that was asked for explicitly is an error.
pub fn load_config(explicit: Option<&Path>) -> eyre::Result<OcuscoreConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = default_config_path()?;
            if !path.exists() {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(OcuscoreConfig::default());
            }
            path
        }
    };
    read_config(&path)
}

fn read_config(path: &Path) -> eyre::Result<OcuscoreConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: OcuscoreConfig = serde_json::from_value(migrated)?;
    tracing::debug!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update ocuscore."
        ));
    }

    // v0 → v1: `patient_language` renamed to `simplified`
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        if let Some(value) = obj.remove("patient_language") {
            obj.entry("simplified").or_insert(value);
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(CURRENT_VERSION.into()),
        );
        tracing::info!("migrated config v0 → v1 (patient_language → simplified)");
    }

    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn write(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("config.json");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn current_config_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            r#"{"config_version": 1, "default_format": "markdown", "simplified": true, "seed": 42}"#,
        );
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(
            config,
            OcuscoreConfig {
                config_version: 1,
                default_format: OutputFormat::Markdown,
                simplified: true,
                seed: Some(42),
                summary_template: None,
            }
        );
    }

    #[test]
    fn v0_config_is_migrated() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, r#"{"patient_language": true}"#);
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.config_version, 1);
        assert!(config.simplified);
        assert_eq!(config.default_format, OutputFormat::Json);
    }

    #[test]
    fn newer_version_is_rejected() {
        let err = migrate(json!({"config_version": 9}), 9).unwrap_err();
        assert!(err.to_string().contains("newer than this build supports"));
    }

    #[test]
    fn non_object_is_rejected() {
        assert!(migrate(json!([1, 2]), 0).is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("absent.json"))).is_err());
    }
}
