//! Create command: scaffold a project from a template

use anyhow::{Context, Result};
use camino::Utf8Path;
use indicatif::ProgressBar;
use seedkit_core::{
    Error, ManifestUpdate, ScaffoldEvent, ScaffoldObserver, Scaffolder, SystemRunner,
    TemplateResolver,
};
use std::sync::Mutex;

use crate::cli::CreateArgs;
use crate::output;
use crate::prompt::TerminalPrompter;

pub async fn run(args: CreateArgs, config: Option<&Utf8Path>) -> Result<()> {
    let config = super::load_config(config)?;
    let registry = config
        .registry()
        .context("Failed to load template registry")?;
    let prompter = TerminalPrompter;

    let template = match TemplateResolver::new(&registry)
        .resolve(args.template_name.as_deref(), &prompter)
    {
        Ok(template) => template,
        Err(e @ Error::TemplateNotFound { .. }) => {
            super::list::print_templates(&registry);
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    output::info(&format!(
        "Creating {} from template {}",
        args.project_directory, template.name
    ));

    let runner = SystemRunner::new();
    let progress = ProgressObserver::default();
    let result = Scaffolder::new(&runner, &prompter)
        .with_observer(&progress)
        .with_git_program(&config.git.program)
        .with_installer(config.installer())
        .run(&args.project_directory, template)
        .await;
    progress.clear();

    let report = result?;
    if report.manifest == ManifestUpdate::Missing {
        output::warning("Template has no package.json; project metadata was not written");
    }

    output::success(&format!(
        "Created {} ({} {})",
        report.project_dir, report.metadata.name, report.metadata.version
    ));
    println!();
    println!("Get started:");
    output::command(&format!("cd {}", args.project_directory));
    Ok(())
}

/// Shows a spinner per non-interactive step
#[derive(Default)]
struct ProgressObserver {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressObserver {
    fn replace(&self, next: Option<ProgressBar>) {
        let mut slot = self.spinner.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = slot.take() {
            previous.finish_and_clear();
        }
        *slot = next;
    }

    fn clear(&self) {
        self.replace(None);
    }
}

impl ScaffoldObserver for ProgressObserver {
    fn on_event(&self, event: &ScaffoldEvent) {
        match event {
            ScaffoldEvent::StepStarted(step) if step.is_interactive() => self.clear(),
            ScaffoldEvent::StepStarted(step) => self.replace(Some(output::spinner(step.label()))),
            ScaffoldEvent::StepCompleted(step) => {
                self.clear();
                if !step.is_interactive() {
                    output::success(step.label());
                }
            }
            ScaffoldEvent::ManifestSkipped => {}
            ScaffoldEvent::CleanedUp(path) => {
                self.clear();
                output::warning(&format!("Removed {}", path));
            }
            ScaffoldEvent::CleanupFailed { path, message } => {
                self.clear();
                output::warning(&format!(
                    "Could not remove {}: {}. Delete it before retrying.",
                    path, message
                ));
            }
        }
    }
}
