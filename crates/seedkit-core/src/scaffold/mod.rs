//! Project scaffolding workflow
//!
//! [`Scaffolder::run`] walks the [`ScaffoldState`] machine: clone the template,
//! drop its git history, collect metadata, rewrite `package.json` and install
//! dependencies. The project directory is created by the clone and is the
//! only thing cleaned up on failure. A directory that already exists is
//! refused before any step runs, so cleanup never deletes user data.

pub mod state;

pub use state::{ScaffoldState, ScaffoldStep};

use crate::error::{Error, Result};
use crate::git;
use crate::install::Installer;
use crate::manifest::{self, ManifestUpdate};
use crate::paths;
use crate::process::CommandRunner;
use crate::prompt::{self, Prompter};
use crate::types::{ProjectMetadata, TemplateDescriptor};
use camino::{Utf8Path, Utf8PathBuf};
use std::io;
use tracing::{debug, info, warn};

/// Progress notifications from a scaffold run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldEvent {
    StepStarted(ScaffoldStep),
    StepCompleted(ScaffoldStep),
    /// The template has no `package.json`
    ManifestSkipped,
    /// The project directory was removed after a failure
    CleanedUp(Utf8PathBuf),
    CleanupFailed { path: Utf8PathBuf, message: String },
}

/// Receives [`ScaffoldEvent`]s as the workflow advances
pub trait ScaffoldObserver: Send + Sync {
    fn on_event(&self, event: &ScaffoldEvent);
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ScaffoldObserver for NoopObserver {
    fn on_event(&self, _event: &ScaffoldEvent) {}
}

/// Summary of a successful scaffold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// Absolute project directory
    pub project_dir: Utf8PathBuf,
    pub template: String,
    pub metadata: ProjectMetadata,
    pub manifest: ManifestUpdate,
    pub state: ScaffoldState,
}

/// Runs the scaffold workflow against injected collaborators
pub struct Scaffolder<'a> {
    runner: &'a dyn CommandRunner,
    prompter: &'a dyn Prompter,
    observer: &'a dyn ScaffoldObserver,
    git_program: String,
    installer: Installer,
}

impl<'a> Scaffolder<'a> {
    pub fn new(runner: &'a dyn CommandRunner, prompter: &'a dyn Prompter) -> Self {
        Self {
            runner,
            prompter,
            observer: &NoopObserver,
            git_program: "git".to_string(),
            installer: Installer::default(),
        }
    }

    pub fn with_observer(mut self, observer: &'a dyn ScaffoldObserver) -> Self {
        self.observer = observer;
        self
    }

    pub fn with_git_program(mut self, program: impl Into<String>) -> Self {
        self.git_program = program.into();
        self
    }

    pub fn with_installer(mut self, installer: Installer) -> Self {
        self.installer = installer;
        self
    }

    /// Scaffold `template` into `project_dir`
    ///
    /// # Errors
    /// - [`Error::ProjectExists`] if the directory is already there; nothing is touched
    /// - [`Error::ScaffoldFailed`] wrapping the failing step's error, after the
    ///   project directory has been removed
    pub async fn run(
        &self,
        project_dir: &Utf8Path,
        template: &TemplateDescriptor,
    ) -> Result<ScaffoldReport> {
        let project_dir = paths::absolute(project_dir)?;
        if project_dir.exists() {
            return Err(Error::project_exists(project_dir.as_str()));
        }

        info!("Scaffolding {} from template {}", project_dir, template.name);

        let mut run = Run {
            state: ScaffoldState::Pending,
            metadata: None,
            manifest: ManifestUpdate::Missing,
        };

        while let Some(step) = run.state.step() {
            self.observer.on_event(&ScaffoldEvent::StepStarted(step));

            if let Err(source) = self.execute(step, &project_dir, template, &mut run).await {
                warn!("{} failed after reaching state '{}': {}", step, run.state, source);
                let cleaned_up = self.cleanup(&project_dir).await;
                return Err(Error::scaffold_failed(step.label(), source, cleaned_up));
            }

            self.observer.on_event(&ScaffoldEvent::StepCompleted(step));
            run.state = run.state.next().unwrap_or(ScaffoldState::Done);
            debug!("Scaffold state: {}", run.state);
        }
        run.state = ScaffoldState::Done;

        let metadata = run
            .metadata
            .ok_or_else(|| Error::prompt("metadata was not collected"))?;

        info!("Scaffolded {}", project_dir);
        Ok(ScaffoldReport {
            project_dir,
            template: template.name.clone(),
            metadata,
            manifest: run.manifest,
            state: run.state,
        })
    }

    async fn execute(
        &self,
        step: ScaffoldStep,
        project_dir: &Utf8Path,
        template: &TemplateDescriptor,
        run: &mut Run,
    ) -> Result<()> {
        match step {
            ScaffoldStep::Clone => {
                git::clone_template(self.runner, &self.git_program, template, project_dir).await
            }
            ScaffoldStep::RemoveHistory => git::remove_history(project_dir).await,
            ScaffoldStep::CollectMetadata => {
                run.metadata = Some(prompt::collect_metadata(self.prompter, project_dir)?);
                Ok(())
            }
            ScaffoldStep::RewriteManifest => {
                let metadata = run
                    .metadata
                    .as_ref()
                    .ok_or_else(|| Error::prompt("metadata was not collected"))?;
                run.manifest = manifest::rewrite_manifest(project_dir, metadata).await?;
                if run.manifest == ManifestUpdate::Missing {
                    self.observer.on_event(&ScaffoldEvent::ManifestSkipped);
                }
                Ok(())
            }
            ScaffoldStep::InstallDependencies => {
                self.installer.install(self.runner, project_dir).await
            }
        }
    }

    /// Remove the project directory; `true` when nothing is left behind
    async fn cleanup(&self, project_dir: &Utf8Path) -> bool {
        match tokio::fs::remove_dir_all(project_dir).await {
            Ok(()) => {
                info!("Removed {}", project_dir);
                self.observer
                    .on_event(&ScaffoldEvent::CleanedUp(project_dir.to_path_buf()));
                true
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => true,
            Err(e) => {
                warn!("Failed to remove {}: {}", project_dir, e);
                self.observer.on_event(&ScaffoldEvent::CleanupFailed {
                    path: project_dir.to_path_buf(),
                    message: e.to_string(),
                });
                false
            }
        }
    }
}

struct Run {
    state: ScaffoldState,
    metadata: Option<ProjectMetadata>,
    manifest: ManifestUpdate,
}
