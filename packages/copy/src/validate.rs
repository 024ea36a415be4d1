//! Input validation for a folder copy.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::Path;

use crate::error::CopyFolderError;
use crate::path::ResolvedPaths;

/// Validate resolved source and target folders.
///
/// Checks run in a fixed order and the first failure is returned. The target
/// folder is created (recursively) once both paths are known to be non-empty;
/// that directory is left in place if a later check fails.
///
/// # Errors
///
/// * [`CopyFolderError::MissingSource`] / [`CopyFolderError::MissingTarget`]
///   if a folder was not given
/// * [`CopyFolderError::SourceNotFound`] if the source does not exist
/// * [`CopyFolderError::TargetUncreatable`] if the target could not be created
/// * [`CopyFolderError::SourceNotDirectory`] / [`CopyFolderError::TargetNotDirectory`]
///   if either path is not a directory
/// * [`CopyFolderError::Overlap`] if one folder is inside the other
pub fn validate(paths: &ResolvedPaths) -> Result<(), CopyFolderError> {
    let ResolvedPaths { source, target } = paths;

    if source.is_empty() {
        return Err(CopyFolderError::MissingSource);
    }
    if target.is_empty() {
        return Err(CopyFolderError::MissingTarget);
    }

    // Failure is classified by the checks below.
    if let Err(e) = fs::create_dir_all(target) {
        log::debug!("Could not create target {target}: {e}");
    }

    let source_path = Path::new(source);
    let target_path = Path::new(target);

    if !source_path.exists() {
        return Err(CopyFolderError::SourceNotFound(source.clone()));
    }
    if !target_path.exists() {
        return Err(CopyFolderError::TargetUncreatable(target.clone()));
    }
    if !source_path.is_dir() {
        return Err(CopyFolderError::SourceNotDirectory(source.clone()));
    }
    if !target_path.is_dir() {
        return Err(CopyFolderError::TargetNotDirectory(target.clone()));
    }
    if is_overlap(source_path, target_path) {
        return Err(CopyFolderError::Overlap {
            source_folder: source.clone(),
            target_folder: target.clone(),
        });
    }

    Ok(())
}

/// Whether `a` and `b` are the same path or one contains the other.
fn is_overlap(a: &Path, b: &Path) -> bool {
    a.starts_with(b) || b.starts_with(a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn paths(source: &Path, target: &Path) -> ResolvedPaths {
        ResolvedPaths {
            source: source.to_string_lossy().to_string(),
            target: target.to_string_lossy().to_string(),
        }
    }

    #[test]
    fn test_missing_source() {
        let err = validate(&ResolvedPaths {
            source: String::new(),
            target: String::new(),
        })
        .unwrap_err();

        assert!(matches!(err, CopyFolderError::MissingSource));
        assert_eq!(
            err.to_string(),
            "[copy-folder] Must specify the source folder path."
        );
    }

    #[test]
    fn test_missing_target() {
        let err = validate(&ResolvedPaths {
            source: "/source-folder".to_string(),
            target: String::new(),
        })
        .unwrap_err();

        assert!(matches!(err, CopyFolderError::MissingTarget));
        assert_eq!(
            err.to_string(),
            "[copy-folder] Must specify the target folder path."
        );
    }

    #[test]
    fn test_source_not_found_still_creates_target() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("missing");
        let target = dir.path().join("out/nested");

        let err = validate(&paths(&source, &target)).unwrap_err();

        assert!(matches!(err, CopyFolderError::SourceNotFound(_)));
        assert!(err.to_string().ends_with("missing"));
        assert!(target.is_dir());
    }

    #[test]
    fn test_target_uncreatable() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source");
        fs::create_dir(&source).unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file").unwrap();
        let target = blocker.join("target");

        let err = validate(&paths(&source, &target)).unwrap_err();

        assert!(matches!(err, CopyFolderError::TargetUncreatable(_)));
        assert!(
            err.to_string()
                .starts_with("[copy-folder] Target folder cannot be created: ")
        );
    }

    #[test]
    fn test_source_not_directory() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("file.txt");
        fs::write(&source, "content").unwrap();
        let target = dir.path().join("target");

        let err = validate(&paths(&source, &target)).unwrap_err();

        assert!(matches!(err, CopyFolderError::SourceNotDirectory(_)));
    }

    #[test]
    fn test_target_not_directory() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source");
        fs::create_dir(&source).unwrap();
        let target = dir.path().join("target.txt");
        fs::write(&target, "content").unwrap();

        let err = validate(&paths(&source, &target)).unwrap_err();

        assert!(matches!(err, CopyFolderError::TargetNotDirectory(_)));
        assert!(err.is_validation());
    }

    #[test]
    fn test_overlap_rejected() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source");
        fs::create_dir(&source).unwrap();

        let nested = validate(&paths(&source, &source.join("copy"))).unwrap_err();
        let same = validate(&paths(&source, &source)).unwrap_err();
        let parent = validate(&paths(&source, dir.path())).unwrap_err();

        assert!(matches!(nested, CopyFolderError::Overlap { .. }));
        assert!(matches!(same, CopyFolderError::Overlap { .. }));
        assert!(matches!(parent, CopyFolderError::Overlap { .. }));
    }

    #[test]
    fn test_sibling_with_shared_prefix_is_not_overlap() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("assets");
        let target = dir.path().join("assets-out");
        fs::create_dir(&source).unwrap();

        validate(&paths(&source, &target)).unwrap();

        assert!(target.is_dir());
    }
}
