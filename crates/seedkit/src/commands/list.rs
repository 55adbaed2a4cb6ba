//! List command

use anyhow::{Context, Result};
use camino::Utf8Path;
use seedkit_core::TemplateRegistry;

use crate::output;

/// Print every template. A broken user config falls back to the built-ins.
pub fn run(config: Option<&Utf8Path>) -> Result<()> {
    let registry = registry_or_builtin(
        super::load_config(config)
            .and_then(|c| c.registry().context("Failed to load template registry")),
        |err| output::warning(&format!(
            "{}; showing built-in templates only",
            crate::render_error(err)
        )),
    )?;

    print_templates(&registry);
    Ok(())
}

fn registry_or_builtin(
    configured: Result<TemplateRegistry>,
    on_fallback: impl FnOnce(&anyhow::Error),
) -> Result<TemplateRegistry> {
    match configured {
        Ok(registry) => Ok(registry),
        Err(err) => {
            on_fallback(&err);
            Ok(TemplateRegistry::from_embedded()?)
        }
    }
}

/// Print one line per template
pub(crate) fn print_templates(registry: &TemplateRegistry) {
    output::header("Available templates");
    for line in registry.listing() {
        println!("  {}", line);
    }
}
