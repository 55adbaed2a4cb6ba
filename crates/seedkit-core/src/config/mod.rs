//! Configuration loading and management

mod loader;

pub use loader::ConfigLoader;

use crate::codemod::CodemodRunner;
use crate::error::{Error, Result};
use crate::install::Installer;
use crate::registry::TemplateRegistry;
use crate::types::TemplateDescriptor;
use serde::{Deserialize, Serialize};

/// Resolved seedkit configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SeedkitConfig {
    pub git: GitSettings,
    pub installer: InstallerSettings,
    pub codemods: CodemodSettings,
    /// Templates appended after the built-in registry
    pub templates: Vec<TemplateDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct GitSettings {
    pub program: String,
}

impl Default for GitSettings {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct InstallerSettings {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for InstallerSettings {
    fn default() -> Self {
        let installer = Installer::default();
        Self {
            program: installer.program,
            args: installer.args,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct CodemodSettings {
    pub runner: String,
    pub packages: Vec<String>,
    pub fix_flag: String,
}

impl Default for CodemodSettings {
    fn default() -> Self {
        Self {
            runner: "npx".to_string(),
            packages: crate::codemod::DEFAULT_PACKAGES
                .iter()
                .map(|p| p.to_string())
                .collect(),
            fix_flag: "--fix".to_string(),
        }
    }
}

impl SeedkitConfig {
    /// Reject settings that cannot produce a runnable command
    pub fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("git.program", &self.git.program),
            ("installer.program", &self.installer.program),
            ("codemods.runner", &self.codemods.runner),
        ] {
            if value.trim().is_empty() {
                return Err(Error::invalid_config(format!("{} must not be empty", key)));
            }
        }
        if self.codemods.packages.is_empty() {
            return Err(Error::invalid_config("codemods.packages must list at least one package"));
        }
        if let Some(package) = self.codemods.packages.iter().find(|p| p.trim().is_empty()) {
            return Err(Error::invalid_config(format!(
                "codemods.packages contains a blank entry: {:?}",
                package
            )));
        }
        if self.codemods.fix_flag.trim().is_empty() {
            return Err(Error::invalid_config("codemods.fix-flag must not be empty"));
        }
        Ok(())
    }

    pub fn installer(&self) -> Installer {
        Installer::new(&self.installer.program, self.installer.args.clone())
    }

    pub fn codemod_runner(&self) -> CodemodRunner {
        CodemodRunner::new(
            &self.codemods.runner,
            self.codemods.packages.clone(),
            &self.codemods.fix_flag,
        )
    }

    /// Built-in templates followed by the configured extras
    pub fn registry(&self) -> Result<TemplateRegistry> {
        TemplateRegistry::from_embedded()?.with_additional(self.templates.clone())
    }
}
