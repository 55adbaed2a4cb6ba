//! Core types for templates and project metadata

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

/// Version written to the manifest when the user leaves the prompt empty
pub const DEFAULT_VERSION: &str = "1.0.0";

/// A template repository that can seed a new project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TemplateDescriptor {
    /// Unique template name used on the command line
    pub name: String,
    /// Human-readable description shown in listings and menus
    pub description: String,
    /// Repository URL passed to `git clone`
    pub repository_url: String,
    /// Extra arguments inserted before the URL, e.g. `--branch`
    #[serde(default)]
    pub clone_options: Vec<String>,
}

impl TemplateDescriptor {
    /// Create a descriptor with no clone options
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        repository_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            repository_url: repository_url.into(),
            clone_options: Vec::new(),
        }
    }

    /// Set clone options
    pub fn with_clone_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.clone_options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Menu label, `name - description`
    pub fn label(&self) -> String {
        format!("{} - {}", self.name, self.description)
    }
}

/// Metadata written into the project manifest
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectMetadata {
    pub name: String,
    pub version: String,
    pub description: String,
    pub author: String,
}

impl ProjectMetadata {
    /// Build metadata from raw answers, applying defaults for empty name and version.
    /// Description and author are kept as typed.
    pub fn from_answers(
        project_dir: &Utf8Path,
        name: &str,
        version: &str,
        description: &str,
        author: &str,
    ) -> Self {
        let name = match name.trim() {
            "" => default_project_name(project_dir),
            other => other.to_string(),
        };
        let version = match version.trim() {
            "" => DEFAULT_VERSION.to_string(),
            other => other.to_string(),
        };

        Self {
            name,
            version,
            description: description.to_string(),
            author: author.to_string(),
        }
    }
}

/// Basename of the project directory, used as the default project name
pub fn default_project_name(project_dir: &Utf8Path) -> String {
    project_dir
        .file_name()
        .map(str::to_string)
        .unwrap_or_else(|| project_dir.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_yaml_fields() {
        let yaml = r#"
name: compass-starter
description: Compass
repository-url: https://example.com/seed.git
clone-options: ["--branch", "compass_theme"]
"#;
        let descriptor: TemplateDescriptor = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(descriptor.repository_url, "https://example.com/seed.git");
        assert_eq!(descriptor.clone_options, vec!["--branch", "compass_theme"]);

        let bare: TemplateDescriptor =
            serde_yaml_ng::from_str("name: a\ndescription: b\nrepository-url: c\n").unwrap();
        assert!(bare.clone_options.is_empty());
    }

    #[test]
    fn test_label() {
        let descriptor = TemplateDescriptor::new("starter", "A starter", "url");
        assert_eq!(descriptor.label(), "starter - A starter");
    }

    #[test]
    fn test_metadata_defaults() {
        let dir = Utf8Path::new("/work/my-app");
        let metadata = ProjectMetadata::from_answers(dir, "", "", "", "");
        assert_eq!(metadata.name, "my-app");
        assert_eq!(metadata.version, DEFAULT_VERSION);
        assert_eq!(metadata.description, "");
        assert_eq!(metadata.author, "");

        let metadata = ProjectMetadata::from_answers(dir, "custom", "2.0.0", "desc", "me");
        assert_eq!(metadata.name, "custom");
        assert_eq!(metadata.version, "2.0.0");
    }

    #[test]
    fn test_description_and_author_kept_verbatim() {
        let metadata =
            ProjectMetadata::from_answers(Utf8Path::new("app"), "x", "1.2.3", "  indented desc  ", " Jo ");
        assert_eq!(metadata.description, "  indented desc  ");
        assert_eq!(metadata.author, " Jo ");
    }

    #[test]
    fn test_whitespace_version_uses_default() {
        let metadata = ProjectMetadata::from_answers(Utf8Path::new("app"), "x", "   ", "", "");
        assert_eq!(metadata.version, "1.0.0");
    }
}
