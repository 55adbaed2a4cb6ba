//! Dependency installation

use crate::error::{Error, Result};
use crate::process::{CommandRunner, CommandSpec};
use camino::Utf8Path;
use tracing::info;

/// Installer invocation, `npm install` by default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installer {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for Installer {
    fn default() -> Self {
        Self {
            program: "npm".to_string(),
            args: vec!["install".to_string()],
        }
    }
}

impl Installer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// The command to run inside `project_dir`
    pub fn command(&self, project_dir: &Utf8Path) -> CommandSpec {
        CommandSpec::new(&self.program)
            .args(self.args.iter().cloned())
            .cwd(project_dir)
    }

    /// Install dependencies, failing with [`Error::InstallFailed`] on a non-zero exit
    pub async fn install(&self, runner: &dyn CommandRunner, project_dir: &Utf8Path) -> Result<()> {
        let spec = self.command(project_dir);
        info!("Installing dependencies: {}", spec);

        let output = runner.run(&spec).await?;
        if !output.success() {
            return Err(Error::install_failed(output.failure_detail()));
        }
        Ok(())
    }
}
