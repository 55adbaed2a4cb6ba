//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// Seedkit - scaffold projects from template repositories
#[derive(Parser, Debug)]
#[command(name = "seedkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a seedkit config file
    #[arg(short, long, global = true, env = "SEEDKIT_CONFIG")]
    pub config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new project from a template
    Create(CreateArgs),

    /// List available templates
    List,

    /// Run codemods against a source directory
    #[command(visible_alias = "codemod")]
    Update(UpdateArgs),
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Directory to create the project in
    pub project_directory: Utf8PathBuf,

    /// Template name; prompts when omitted
    pub template_name: Option<String>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Source directory to transform
    #[arg(default_value = seedkit_core::codemod::DEFAULT_TARGET)]
    pub path: Utf8PathBuf,

    /// Apply fixes instead of only reporting them
    #[arg(long)]
    pub fix: bool,
}
