//! Interactive prompt abstraction
//!
//! The library never talks to the terminal directly. Callers supply a
//! [`Prompter`]; the CLI backs it with dialoguer and tests use a mock.

use crate::error::Result;
use crate::types::{default_project_name, ProjectMetadata, DEFAULT_VERSION};
use camino::Utf8Path;

/// Source of interactive answers
#[cfg_attr(test, mockall::automock)]
pub trait Prompter: Send + Sync {
    /// Single choice from `items`, returning the selected index
    fn select(&self, prompt: &str, items: &[String]) -> Result<usize>;

    /// Single line of text, falling back to `default` on empty input
    fn input(&self, prompt: &str, default: &str) -> Result<String>;
}

/// Ask for the four manifest fields
pub fn collect_metadata(prompter: &dyn Prompter, project_dir: &Utf8Path) -> Result<ProjectMetadata> {
    let default_name = default_project_name(project_dir);

    let name = prompter.input("Project name?", &default_name)?;
    let version = prompter.input("Version?", DEFAULT_VERSION)?;
    let description = prompter.input("Description?", "")?;
    let author = prompter.input("Author?", "")?;

    Ok(ProjectMetadata::from_answers(
        project_dir,
        &name,
        &version,
        &description,
        &author,
    ))
}
