//! Codemod runner for the `update` command
//!
//! Runs each transformation package through `npx` in a fixed order against a
//! source directory, stopping at the first failure.

use crate::error::{Error, Result};
use crate::paths;
use crate::process::{CommandRunner, CommandSpec};
use camino::Utf8Path;
use tracing::{debug, info};

/// Directory transformed when no path is given
pub const DEFAULT_TARGET: &str = "src";

/// Transformation packages, in the order they run
pub const DEFAULT_PACKAGES: [&str; 3] = [
    "@patternfly/pf-codemods",
    "@patternfly/class-name-updater",
    "@patternfly/css-vars-updater",
];

/// Summary of a successful codemod run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodemodReport {
    pub commands_run: usize,
    pub fixed: bool,
}

/// Runs the configured transformation packages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodemodRunner {
    runner: String,
    packages: Vec<String>,
    fix_flag: String,
}

impl Default for CodemodRunner {
    fn default() -> Self {
        Self {
            runner: "npx".to_string(),
            packages: DEFAULT_PACKAGES.iter().map(|p| p.to_string()).collect(),
            fix_flag: "--fix".to_string(),
        }
    }
}

impl CodemodRunner {
    pub fn new(runner: impl Into<String>, packages: Vec<String>, fix_flag: impl Into<String>) -> Self {
        Self {
            runner: runner.into(),
            packages,
            fix_flag: fix_flag.into(),
        }
    }

    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    /// Planned invocations, `<runner> <package> [<fix-flag>] <target>`
    pub fn commands(&self, target: &Utf8Path, fix: bool) -> Vec<CommandSpec> {
        self.packages
            .iter()
            .map(|package| {
                let mut spec = CommandSpec::new(&self.runner).arg(package);
                if fix {
                    spec = spec.arg(&self.fix_flag);
                }
                spec.arg(target.as_str()).inherit_stdio()
            })
            .collect()
    }

    /// Run every package against `target`, or [`DEFAULT_TARGET`] when `None`
    ///
    /// # Errors
    /// Returns [`Error::TransformFailed`] for the first command that exits
    /// non-zero; later packages do not run.
    pub async fn run(
        &self,
        runner: &dyn CommandRunner,
        target: Option<&Utf8Path>,
        fix: bool,
    ) -> Result<CodemodReport> {
        let target = paths::absolute(target.unwrap_or(Utf8Path::new(DEFAULT_TARGET)))?;
        info!("Running {} codemods against {}", self.packages.len(), target);

        let commands = self.commands(&target, fix);
        for spec in &commands {
            debug!("Running codemod: {}", spec);
            let output = runner.run(spec).await?;
            if !output.success() {
                return Err(Error::transform_failed(spec.to_string(), output.code));
            }
        }

        Ok(CodemodReport {
            commands_run: commands.len(),
            fixed: fix,
        })
    }
}
