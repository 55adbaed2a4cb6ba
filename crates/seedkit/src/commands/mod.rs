//! CLI command implementations

pub mod create;
pub mod list;
pub mod update;

use anyhow::{Context, Result};
use camino::Utf8Path;
use seedkit_core::{ConfigLoader, SeedkitConfig};

/// Load configuration from `--config`, or the default user config location
pub(crate) fn load_config(path: Option<&Utf8Path>) -> Result<SeedkitConfig> {
    let loader = match path {
        Some(path) => ConfigLoader::with_file(path),
        None => ConfigLoader::new(),
    };
    tracing::debug!("Config file: {:?}", loader.path());
    loader.load().context("Failed to load configuration")
}
