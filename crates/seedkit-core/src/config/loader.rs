//! Layered configuration loader
//!
//! Sources, lowest precedence first:
//! 1. Embedded defaults (built into binary)
//! 2. User config file (`--config`, or `<config dir>/seedkit/config.yaml`)
//! 3. Environment variables (`SEEDKIT_*`)

use super::SeedkitConfig;
use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use directories::ProjectDirs;
use rust_embed::RustEmbed;
use serde_yaml_ng::Value;
use std::env;
use std::fs;
use tracing::debug;

/// Embedded configuration files
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/embedded/config/"]
struct EmbeddedConfigs;

const DEFAULTS_FILE: &str = "defaults.yaml";
const CONFIG_FILE: &str = "config.yaml";

/// Loads [`SeedkitConfig`] from every layer
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: Option<Utf8PathBuf>,
    /// An explicitly requested file must exist
    required: bool,
}

impl ConfigLoader {
    /// Loader reading the user config from the platform config directory
    pub fn new() -> Self {
        Self {
            path: Self::default_path(),
            required: false,
        }
    }

    /// Loader reading the given file, which must exist
    pub fn with_file(path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            required: true,
        }
    }

    /// Loader that skips the file layer
    pub fn without_file() -> Self {
        Self {
            path: None,
            required: false,
        }
    }

    /// `<config dir>/config.yaml` for the current platform
    pub fn default_path() -> Option<Utf8PathBuf> {
        let dirs = ProjectDirs::from("", "", "seedkit")?;
        let dir = Utf8PathBuf::from_path_buf(dirs.config_dir().to_path_buf()).ok()?;
        Some(dir.join(CONFIG_FILE))
    }

    /// The user config file this loader reads, if any
    pub fn path(&self) -> Option<&Utf8Path> {
        self.path.as_deref()
    }

    pub fn load(&self) -> Result<SeedkitConfig> {
        let mut merged = Self::load_embedded_defaults()?;

        if let Some(overlay) = self.load_user_file()? {
            merge_values(&mut merged, overlay);
        }

        let config: SeedkitConfig = serde_yaml_ng::from_value(merged)
            .map_err(|e| Error::invalid_config(format!("Failed to parse configuration: {}", e)))?;
        let config = apply_env_overrides(config);
        config.validate()?;
        Ok(config)
    }

    fn load_embedded_defaults() -> Result<Value> {
        let file = EmbeddedConfigs::get(DEFAULTS_FILE).ok_or_else(|| {
            Error::invalid_config(format!("Embedded config not found: {}", DEFAULTS_FILE))
        })?;
        let content = std::str::from_utf8(&file.data).map_err(|_| {
            Error::invalid_config(format!("Invalid UTF-8 in embedded config: {}", DEFAULTS_FILE))
        })?;
        serde_yaml_ng::from_str(content).map_err(|e| {
            Error::invalid_config(format!(
                "Failed to parse embedded config {}: {}",
                DEFAULTS_FILE, e
            ))
        })
    }

    fn load_user_file(&self) -> Result<Option<Value>> {
        let Some(path) = &self.path else {
            return Ok(None);
        };

        if !path.exists() {
            if self.required {
                return Err(Error::invalid_config(format!("Config file not found: {}", path)));
            }
            debug!("No user config at {}", path);
            return Ok(None);
        }

        debug!("Loading user config from {}", path);
        let content = fs::read_to_string(path)?;
        let value: Value = serde_yaml_ng::from_str(&content)
            .map_err(|e| Error::invalid_config(format!("Failed to parse {}: {}", path, e)))?;

        // An empty file parses to null
        Ok(match value {
            Value::Null => None,
            other => Some(other),
        })
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep merge YAML values (overlay takes precedence, sequences are replaced)
fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base_value, overlay_value) => {
            *base_value = overlay_value;
        }
    }
}

/// Apply environment variable overrides
fn apply_env_overrides(mut config: SeedkitConfig) -> SeedkitConfig {
    if let Ok(val) = env::var("SEEDKIT_GIT") {
        config.git.program = val;
    }

    if let Ok(val) = env::var("SEEDKIT_INSTALLER") {
        config.installer.program = val;
    }

    if let Ok(val) = env::var("SEEDKIT_INSTALLER_ARGS") {
        config.installer.args = val.split_whitespace().map(str::to_string).collect();
    }

    if let Ok(val) = env::var("SEEDKIT_CODEMOD_RUNNER") {
        config.codemods.runner = val;
    }

    if let Ok(val) = env::var("SEEDKIT_CODEMOD_FIX_FLAG") {
        config.codemods.fix_flag = val;
    }

    config
}
