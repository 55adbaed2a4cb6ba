//! Template cloning and history removal

use crate::error::{Error, Result};
use crate::process::{CommandRunner, CommandSpec};
use crate::types::TemplateDescriptor;
use camino::Utf8Path;
use std::io;
use tracing::{debug, info};

/// Build the `git clone` invocation for `template` into `destination`
pub fn clone_command(
    git_program: &str,
    template: &TemplateDescriptor,
    destination: &Utf8Path,
) -> CommandSpec {
    CommandSpec::new(git_program)
        .arg("clone")
        .args(template.clone_options.iter().cloned())
        .arg(&template.repository_url)
        .arg(destination.as_str())
}

/// Clone a template repository
///
/// # Errors
/// Returns [`Error::CloneFailed`] with git's stderr when the clone exits
/// non-zero, or the runner's error when git cannot be started.
pub async fn clone_template(
    runner: &dyn CommandRunner,
    git_program: &str,
    template: &TemplateDescriptor,
    destination: &Utf8Path,
) -> Result<()> {
    info!(
        "Cloning template {}: {} -> {}",
        template.name, template.repository_url, destination
    );

    let spec = clone_command(git_program, template, destination);
    let output = runner.run(&spec).await?;

    if !output.success() {
        return Err(Error::clone_failed(output.failure_detail()));
    }

    info!("Template cloned successfully");
    Ok(())
}

/// Delete `<project>/.git`. A missing directory counts as already removed.
pub async fn remove_history(project_dir: &Utf8Path) -> Result<()> {
    let git_dir = project_dir.join(".git");
    match tokio::fs::remove_dir_all(&git_dir).await {
        Ok(()) => {
            debug!("Removed {}", git_dir);
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("No git history at {}", git_dir);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
