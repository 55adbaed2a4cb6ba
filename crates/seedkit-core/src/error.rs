//! Error types for seedkit-core

use thiserror::Error;

/// Result type alias using seedkit-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Scaffolding and codemod error types
#[derive(Error, Debug)]
pub enum Error {
    /// Requested template is not in the registry
    #[error("Template not found: {template}")]
    TemplateNotFound {
        template: String,
        available: Vec<String>,
    },

    /// Interactive selection was requested with nothing to choose from
    #[error("No templates are registered")]
    EmptyRegistry,

    /// Two registry entries share a name
    #[error("Duplicate template name in registry: {name}")]
    DuplicateTemplate { name: String },

    /// Registry entry failed validation
    #[error("Invalid template definition: {message}")]
    InvalidTemplate { message: String },

    /// Target project directory already exists
    #[error("Project directory already exists: {path}")]
    ProjectExists { path: String },

    /// Clone failed
    #[error("Failed to clone template: {message}")]
    CloneFailed { message: String },

    /// Manifest present but unreadable or unwritable
    #[error("Manifest I/O failed for {path}: {message}")]
    ManifestIo { path: String, message: String },

    /// Manifest present but not a JSON object
    #[error("Invalid manifest {path}: {message}")]
    InvalidManifest { path: String, message: String },

    /// Dependency installation failed
    #[error("Dependency installation failed: {detail}")]
    InstallFailed { detail: String },

    /// A transformation command exited non-zero
    #[error("Transformation command `{command}` failed{}", exit_suffix(.code))]
    TransformFailed { command: String, code: Option<i32> },

    /// Command not found
    #[error("Required command not found: {command}")]
    CommandNotFound { command: String },

    /// Process execution error
    #[error("Process execution failed: {0}")]
    ProcessExecution(String),

    /// Interactive prompt failed or was aborted
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Invalid path
    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    /// A scaffold step failed; the project directory has been rolled back
    #[error("{step} failed: {source}")]
    ScaffoldFailed {
        step: String,
        #[source]
        source: Box<Error>,
        cleaned_up: bool,
    },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn exit_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {code}"),
        None => " (terminated by signal)".to_string(),
    }
}

impl Error {
    /// Create a template not found error
    pub fn template_not_found(template: impl Into<String>, available: Vec<String>) -> Self {
        Self::TemplateNotFound {
            template: template.into(),
            available,
        }
    }

    /// Create a duplicate template error
    pub fn duplicate_template(name: impl Into<String>) -> Self {
        Self::DuplicateTemplate { name: name.into() }
    }

    /// Create an invalid template error
    pub fn invalid_template(message: impl Into<String>) -> Self {
        Self::InvalidTemplate {
            message: message.into(),
        }
    }

    /// Create a project exists error
    pub fn project_exists(path: impl Into<String>) -> Self {
        Self::ProjectExists { path: path.into() }
    }

    /// Create a clone failed error
    pub fn clone_failed(message: impl Into<String>) -> Self {
        Self::CloneFailed {
            message: message.into(),
        }
    }

    /// Create a manifest I/O error
    pub fn manifest_io(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ManifestIo {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid manifest error
    pub fn invalid_manifest(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidManifest {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an install failed error
    pub fn install_failed(detail: impl Into<String>) -> Self {
        Self::InstallFailed {
            detail: detail.into(),
        }
    }

    /// Create a transform failed error
    pub fn transform_failed(command: impl Into<String>, code: Option<i32>) -> Self {
        Self::TransformFailed {
            command: command.into(),
            code,
        }
    }

    /// Create a command not found error
    pub fn command_not_found(command: impl Into<String>) -> Self {
        Self::CommandNotFound {
            command: command.into(),
        }
    }

    /// Create a process execution error
    pub fn process_execution(message: impl Into<String>) -> Self {
        Self::ProcessExecution(message.into())
    }

    /// Create a prompt error
    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt(message.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an invalid path error
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath { path: path.into() }
    }

    /// Wrap a step failure after rollback
    pub fn scaffold_failed(step: impl Into<String>, source: Error, cleaned_up: bool) -> Self {
        Self::ScaffoldFailed {
            step: step.into(),
            source: Box::new(source),
            cleaned_up,
        }
    }

    /// The innermost error, looking through `ScaffoldFailed`
    pub fn root(&self) -> &Error {
        match self {
            Self::ScaffoldFailed { source, .. } => source.root(),
            other => other,
        }
    }
}
