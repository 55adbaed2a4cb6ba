//! Template registry
//!
//! The registry is an ordered, immutable list of [`TemplateDescriptor`]s. The
//! built-in entries are compiled into the binary from `templates/templates.yaml`;
//! user-defined entries from the config file are appended with
//! [`TemplateRegistry::with_additional`].

use crate::error::{Error, Result};
use crate::types::TemplateDescriptor;
use serde::Deserialize;
use std::collections::HashSet;
use tracing::debug;

/// Width of the name column in [`TemplateRegistry::listing`]
pub const NAME_COLUMN_WIDTH: usize = 20;

const EMBEDDED_TEMPLATES: &str = include_str!("../templates/templates.yaml");

#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    templates: Vec<TemplateDescriptor>,
}

/// Ordered set of templates with unique names
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: Vec<TemplateDescriptor>,
}

impl TemplateRegistry {
    /// Build a registry, rejecting empty or duplicate names
    pub fn new(templates: Vec<TemplateDescriptor>) -> Result<Self> {
        validate(&templates)?;
        Ok(Self { templates })
    }

    /// Load the built-in templates
    pub fn from_embedded() -> Result<Self> {
        Self::from_yaml(EMBEDDED_TEMPLATES)
    }

    /// Load templates from a YAML document with a top-level `templates` list
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let file: RegistryFile = serde_yaml_ng::from_str(yaml)?;
        debug!("Loaded {} templates from YAML", file.templates.len());
        Self::new(file.templates)
    }

    /// Return a new registry with `extra` appended after the existing entries
    pub fn with_additional(&self, extra: Vec<TemplateDescriptor>) -> Result<Self> {
        let mut templates = self.templates.clone();
        templates.extend(extra);
        Self::new(templates)
    }

    /// Exact, case-sensitive lookup
    pub fn find(&self, name: &str) -> Option<&TemplateDescriptor> {
        self.templates.iter().find(|t| t.name == name)
    }

    pub fn templates(&self) -> &[TemplateDescriptor] {
        &self.templates
    }

    /// Template names in registry order
    pub fn names(&self) -> Vec<String> {
        self.templates.iter().map(|t| t.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// One line per template: padded name, a space, then the description
    pub fn listing(&self) -> Vec<String> {
        self.templates
            .iter()
            .map(|t| format!("{:<width$} {}", t.name, t.description, width = NAME_COLUMN_WIDTH))
            .collect()
    }
}

fn validate(templates: &[TemplateDescriptor]) -> Result<()> {
    let mut seen = HashSet::new();
    for template in templates {
        if template.name.trim().is_empty() {
            return Err(Error::invalid_template("template name must not be empty"));
        }
        if template.repository_url.trim().is_empty() {
            return Err(Error::invalid_template(format!(
                "template '{}' has no repository URL",
                template.name
            )));
        }
        if !seen.insert(template.name.as_str()) {
            return Err(Error::duplicate_template(&template.name));
        }
    }
    Ok(())
}
