//! Path helpers

use crate::error::{Error, Result};
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};

/// Resolve `path` against the current directory without touching the filesystem
///
/// `.` and `..` components are folded lexically, so `./app` and `x/../app`
/// both end in `app`.
pub fn absolute(path: &Utf8Path) -> Result<Utf8PathBuf> {
    if path.as_str().trim().is_empty() {
        return Err(Error::invalid_path(path.as_str()));
    }
    if path.is_absolute() {
        return Ok(normalize(path));
    }

    let cwd = std::env::current_dir()?;
    let cwd = Utf8PathBuf::try_from(cwd)
        .map_err(|e| Error::invalid_path(e.into_path_buf().to_string_lossy()))?;
    Ok(normalize(&cwd.join(path)))
}

/// Fold `.` and `..` without following symlinks; `..` never climbs above the root
pub fn normalize(path: &Utf8Path) -> Utf8PathBuf {
    let mut out = Utf8PathBuf::new();
    for component in path.components() {
        match component {
            Utf8Component::Prefix(_) | Utf8Component::RootDir => out.push(component.as_str()),
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir => {
                if out.file_name().is_some() {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            Utf8Component::Normal(part) => out.push(part),
        }
    }
    if out.as_str().is_empty() {
        out.push(".");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_keeps_absolute_paths() {
        let path = if cfg!(windows) { "C:\\work\\app" } else { "/work/app" };
        assert_eq!(absolute(Utf8Path::new(path)).unwrap(), Utf8Path::new(path));
    }

    #[test]
    fn test_absolute_joins_relative_paths() {
        let resolved = absolute(Utf8Path::new("my-app")).unwrap();
        assert!(resolved.is_absolute());
        assert_eq!(resolved.file_name(), Some("my-app"));

        let dotted = absolute(Utf8Path::new("./my-app")).unwrap();
        assert_eq!(dotted, resolved);
        assert!(!dotted.as_str().contains("/./"));
    }

    #[test]
    fn test_absolute_rejects_empty() {
        assert!(matches!(
            absolute(Utf8Path::new("")),
            Err(Error::InvalidPath { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_normalize_folds_parent_components() {
        assert_eq!(normalize(Utf8Path::new("/tmp/x/sub/../../x/..")), "/tmp");
        assert_eq!(normalize(Utf8Path::new("/tmp/./a/b/../c")), "/tmp/a/c");
        assert_eq!(normalize(Utf8Path::new("/..")), "/");
        assert_eq!(normalize(Utf8Path::new("../a")), "../a");
        assert_eq!(normalize(Utf8Path::new("a/..")), ".");
    }

    #[cfg(unix)]
    #[test]
    fn test_default_name_after_parent_components() {
        let resolved = absolute(Utf8Path::new("/tmp/x/sub/../../x/..")).unwrap();
        assert_eq!(crate::types::default_project_name(&resolved), "tmp");
    }
}
