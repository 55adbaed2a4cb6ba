//! Scaffold workflow states
//!
//! ```text
//! Pending -> Cloned -> HistoryRemoved -> MetadataCollected
//!         -> ManifestUpdated -> DependenciesInstalled -> Done
//! ```
//!
//! Each transition is driven by exactly one [`ScaffoldStep`]. The last
//! transition into `Done` reports success and has no step of its own.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldState {
    Pending,
    Cloned,
    HistoryRemoved,
    MetadataCollected,
    ManifestUpdated,
    DependenciesInstalled,
    Done,
}

impl ScaffoldState {
    /// The step that moves out of this state, if any work remains
    pub fn step(self) -> Option<ScaffoldStep> {
        match self {
            Self::Pending => Some(ScaffoldStep::Clone),
            Self::Cloned => Some(ScaffoldStep::RemoveHistory),
            Self::HistoryRemoved => Some(ScaffoldStep::CollectMetadata),
            Self::MetadataCollected => Some(ScaffoldStep::RewriteManifest),
            Self::ManifestUpdated => Some(ScaffoldStep::InstallDependencies),
            Self::DependenciesInstalled | Self::Done => None,
        }
    }

    /// Successor state, `None` once `Done`
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Pending => Some(Self::Cloned),
            Self::Cloned => Some(Self::HistoryRemoved),
            Self::HistoryRemoved => Some(Self::MetadataCollected),
            Self::MetadataCollected => Some(Self::ManifestUpdated),
            Self::ManifestUpdated => Some(Self::DependenciesInstalled),
            Self::DependenciesInstalled => Some(Self::Done),
            Self::Done => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Self::Done
    }
}

impl fmt::Display for ScaffoldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pending => "pending",
            Self::Cloned => "cloned",
            Self::HistoryRemoved => "history removed",
            Self::MetadataCollected => "metadata collected",
            Self::ManifestUpdated => "manifest updated",
            Self::DependenciesInstalled => "dependencies installed",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

/// A unit of scaffold work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldStep {
    Clone,
    RemoveHistory,
    CollectMetadata,
    RewriteManifest,
    InstallDependencies,
}

impl ScaffoldStep {
    /// Progress label, also used as the failing step in errors
    pub fn label(self) -> &'static str {
        match self {
            Self::Clone => "Cloning template",
            Self::RemoveHistory => "Removing git history",
            Self::CollectMetadata => "Collecting project metadata",
            Self::RewriteManifest => "Updating package.json",
            Self::InstallDependencies => "Installing dependencies",
        }
    }

    /// Whether the step waits on the user rather than a process or the filesystem
    pub fn is_interactive(self) -> bool {
        self == Self::CollectMetadata
    }
}

impl fmt::Display for ScaffoldStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
