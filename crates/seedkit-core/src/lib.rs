//! Core library for seedkit
//!
//! This crate provides:
//! - The template registry and resolver
//! - The scaffold workflow (clone, strip history, rewrite manifest, install)
//! - The codemod runner behind `seedkit update`
//! - Layered configuration loading
//!
//! Terminal interaction and process spawning sit behind the [`Prompter`] and
//! [`CommandRunner`] traits.

pub mod codemod;
pub mod config;
pub mod error;
pub mod git;
pub mod install;
pub mod manifest;
pub mod paths;
pub mod process;
pub mod prompt;
pub mod registry;
pub mod resolver;
pub mod scaffold;
pub mod types;

pub use codemod::{CodemodReport, CodemodRunner};
pub use config::{ConfigLoader, SeedkitConfig};
pub use error::{Error, Result};
pub use install::Installer;
pub use manifest::ManifestUpdate;
pub use process::{CommandOutput, CommandRunner, CommandSpec, StdioMode, SystemRunner};
pub use prompt::Prompter;
pub use registry::TemplateRegistry;
pub use resolver::TemplateResolver;
pub use scaffold::{
    NoopObserver, ScaffoldEvent, ScaffoldObserver, ScaffoldReport, ScaffoldState, ScaffoldStep,
    Scaffolder,
};
pub use types::{ProjectMetadata, TemplateDescriptor};
