//! `package.json` rewriting

use crate::error::{Error, Result};
use crate::types::ProjectMetadata;
use camino::Utf8Path;
use serde_json::Value;
use std::io;
use tracing::{debug, info};

/// Manifest file name inside the project directory
pub const MANIFEST_FILE: &str = "package.json";

/// Outcome of [`rewrite_manifest`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestUpdate {
    Updated,
    /// The template has no manifest; nothing was written
    Missing,
}

/// Overwrite `name`, `version`, `description` and `author` in a parsed manifest.
///
/// Existing keys keep their position; missing ones are appended.
pub fn apply_metadata(manifest: &mut Value, metadata: &ProjectMetadata) -> Result<()> {
    let object = manifest
        .as_object_mut()
        .ok_or_else(|| Error::invalid_manifest(MANIFEST_FILE, "expected a JSON object"))?;

    for (key, value) in [
        ("name", &metadata.name),
        ("version", &metadata.version),
        ("description", &metadata.description),
        ("author", &metadata.author),
    ] {
        object.insert(key.to_string(), Value::String(value.clone()));
    }
    Ok(())
}

/// Render a manifest with 2-space indentation and a trailing newline
pub fn render(manifest: &Value) -> Result<String> {
    let mut out = serde_json::to_string_pretty(manifest)?;
    out.push('\n');
    Ok(out)
}

/// Rewrite `<project>/package.json` with `metadata`
pub async fn rewrite_manifest(
    project_dir: &Utf8Path,
    metadata: &ProjectMetadata,
) -> Result<ManifestUpdate> {
    let path = project_dir.join(MANIFEST_FILE);

    let content = match tokio::fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("No manifest at {}, skipping", path);
            return Ok(ManifestUpdate::Missing);
        }
        Err(e) => return Err(Error::manifest_io(path.as_str(), e.to_string())),
    };

    let mut manifest: Value = serde_json::from_str(&content)
        .map_err(|e| Error::invalid_manifest(path.as_str(), e.to_string()))?;
    if !manifest.is_object() {
        return Err(Error::invalid_manifest(path.as_str(), "expected a JSON object"));
    }
    apply_metadata(&mut manifest, metadata)?;

    tokio::fs::write(&path, render(&manifest)?)
        .await
        .map_err(|e| Error::manifest_io(path.as_str(), e.to_string()))?;

    info!("Updated {}", path);
    Ok(ManifestUpdate::Updated)
}
