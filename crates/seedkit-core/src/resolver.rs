//! Template resolution by name or interactive menu

use crate::error::{Error, Result};
use crate::prompt::Prompter;
use crate::registry::TemplateRegistry;
use crate::types::TemplateDescriptor;
use tracing::debug;

/// Resolves the template a `create` invocation should use
pub struct TemplateResolver<'a> {
    registry: &'a TemplateRegistry,
}

impl<'a> TemplateResolver<'a> {
    pub fn new(registry: &'a TemplateRegistry) -> Self {
        Self { registry }
    }

    /// Look up `name`, or ask the user to pick one when it is absent
    ///
    /// A blank name counts as absent. Resolution is attempted once; an
    /// unknown name fails with [`Error::TemplateNotFound`] carrying the
    /// available names.
    pub fn resolve(
        &self,
        name: Option<&str>,
        prompter: &dyn Prompter,
    ) -> Result<&'a TemplateDescriptor> {
        match name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => self.lookup(name),
            None => self.select(prompter),
        }
    }

    fn lookup(&self, name: &str) -> Result<&'a TemplateDescriptor> {
        debug!("Resolving template by name: {}", name);
        self.registry
            .find(name)
            .ok_or_else(|| Error::template_not_found(name, self.registry.names()))
    }

    fn select(&self, prompter: &dyn Prompter) -> Result<&'a TemplateDescriptor> {
        if self.registry.is_empty() {
            return Err(Error::EmptyRegistry);
        }

        let labels: Vec<String> = self
            .registry
            .templates()
            .iter()
            .map(TemplateDescriptor::label)
            .collect();
        let index = prompter.select("Select a template", &labels)?;

        let chosen = self
            .registry
            .templates()
            .get(index)
            .ok_or_else(|| Error::prompt(format!("selection {} out of range", index)))?;
        self.lookup(&chosen.name)
    }
}
