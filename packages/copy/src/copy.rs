//! Recursive filtered folder copy.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::error::CopyFolderError;
use crate::filter::Filter;
use crate::manifest::{CopyResult, ManifestBuilder};
use crate::options::CopyOptions;
use crate::path::{ResolvedPaths, to_posix};
use crate::validate::validate;

/// State shared by every level of the walk.
struct Walk<'a> {
    source: &'a Path,
    target: &'a Path,
    filter: &'a Filter<'a>,
    manifest: &'a mut ManifestBuilder,
}

/// Copy the contents of `source_folder` into `target_folder`.
///
/// Files are filtered by [`CopyOptions`] and the fixed OS-noise exclusions,
/// directory structure is mirrored, and existing target files are overwritten.
/// Pass an empty string for a folder that was not given.
///
/// # Arguments
///
/// * `source_folder` - Folder to copy from
/// * `target_folder` - Folder to copy into (created if missing)
/// * `options` - Filters and working directory
///
/// # Errors
///
/// * If validation of the source or target folder fails
/// * If reading the source tree or copying a file fails; files copied before
///   the failure are left in place
pub fn copy_folder(
    source_folder: &str,
    target_folder: &str,
    options: &CopyOptions,
) -> Result<CopyResult, CopyFolderError> {
    let started = Instant::now();
    let paths = ResolvedPaths::resolve(source_folder, target_folder, options);

    log::debug!("Copying folder: {} -> {}", paths.source, paths.target);

    validate(&paths)?;

    let filter = Filter::new(options);
    let mut manifest = ManifestBuilder::started_at(started);

    let mut walk = Walk {
        source: Path::new(&paths.source),
        target: Path::new(&paths.target),
        filter: &filter,
        manifest: &mut manifest,
    };
    walk_directory(&mut walk, Path::new(""))?;

    let result = manifest.finish(paths);

    log::debug!(
        "Copied {} files in {}ms",
        result.count,
        result.duration_millis()
    );

    Ok(result)
}

/// Visit one source directory, `relative` to the source root.
///
/// Entries are visited in file name order so the manifest is stable.
fn walk_directory(walk: &mut Walk<'_>, relative: &Path) -> Result<(), CopyFolderError> {
    let dir = walk.source.join(relative);

    let mut entries = fs::read_dir(&dir)
        .and_then(|entries| entries.collect::<Result<Vec<_>, _>>())
        .map_err(|e| CopyFolderError::ReadDir {
            path: dir.clone(),
            io_error: e,
        })?;
    entries.sort_by_key(fs::DirEntry::file_name);

    for entry in entries {
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();
        let source_path = entry.path();
        let entry_relative = relative.join(&file_name);

        // Does not follow symlinks.
        let file_type = entry.file_type().map_err(|e| CopyFolderError::Metadata {
            path: source_path.clone(),
            io_error: e,
        })?;

        if file_type.is_symlink() {
            copy_symlink_entry(walk, &source_path, &entry_relative, &name)?;
            continue;
        }

        if !file_type.is_dir() && !file_type.is_file() {
            log::debug!("Skipping special file {}", source_path.display());
            continue;
        }

        let decision = walk.filter.decide(&name, file_type.is_dir());

        if decision.descend {
            walk_directory(walk, &entry_relative)?;
        } else if decision.copy {
            let relative_posix = to_posix(&entry_relative);
            walk.manifest.record(relative_posix.clone(), relative_posix);
            copy_file(&source_path, &walk.target.join(&entry_relative))?;
        } else if file_type.is_dir() {
            log::debug!("Skipping excluded directory {}", source_path.display());
        } else {
            log::trace!("Skipping {}", source_path.display());
        }
    }

    Ok(())
}

/// Recreate a symlink entry in the target without walking through it.
///
/// A link to a directory is filtered like a directory and is not recorded in
/// the manifest. Any other link (including a dangling one) is filtered and
/// recorded like a file.
fn copy_symlink_entry(
    walk: &mut Walk<'_>,
    source_path: &Path,
    entry_relative: &Path,
    name: &str,
) -> Result<(), CopyFolderError> {
    let points_to_dir = fs::metadata(source_path).is_ok_and(|m| m.is_dir());
    let decision = walk.filter.decide(name, points_to_dir);

    if !decision.descend && !decision.copy {
        log::trace!("Skipping symlink {}", source_path.display());
        return Ok(());
    }

    if decision.copy {
        let relative_posix = to_posix(entry_relative);
        walk.manifest.record(relative_posix.clone(), relative_posix);
    }

    let target_path = walk.target.join(entry_relative);
    if let Some(parent) = target_path.parent() {
        fs::create_dir_all(parent).map_err(|e| CopyFolderError::CreateDir {
            path: parent.to_path_buf(),
            io_error: e,
        })?;
    }

    copy_symlink(source_path, &target_path)
}

/// Copy one accepted file, creating its parent directory.
fn copy_file(source: &Path, target: &Path) -> Result<(), CopyFolderError> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| CopyFolderError::CreateDir {
            path: parent.to_path_buf(),
            io_error: e,
        })?;
    }

    copy_file_with_reflink(source, target)
}

/// Copy a single file, trying reflink first then falling back to regular copy.
///
/// Reflink refuses an existing target, so re-copies go through `fs::copy`,
/// which overwrites.
fn copy_file_with_reflink(source: &Path, target: &Path) -> Result<(), CopyFolderError> {
    match reflink_copy::reflink(source, target) {
        Ok(()) => {
            log::trace!("Reflinked {} -> {}", source.display(), target.display());
            Ok(())
        }
        Err(_) => {
            fs::copy(source, target).map_err(|e| CopyFolderError::FileCopy {
                source_path: source.to_path_buf(),
                target_path: target.to_path_buf(),
                io_error: e,
            })?;
            log::trace!("Copied {} -> {}", source.display(), target.display());
            Ok(())
        }
    }
}

/// Copy a symlink, preserving it as a symlink.
///
/// An existing link or file at `target` is replaced.
fn copy_symlink(source: &Path, target: &Path) -> Result<(), CopyFolderError> {
    let link_target = fs::read_link(source).map_err(|e| CopyFolderError::ReadLink {
        path: source.to_path_buf(),
        io_error: e,
    })?;

    if fs::symlink_metadata(target).is_ok_and(|m| !m.is_dir()) {
        fs::remove_file(target).map_err(|e| CopyFolderError::CreateSymlink {
            path: target.to_path_buf(),
            io_error: e,
        })?;
    }

    #[cfg(unix)]
    {
        std::os::unix::fs::symlink(&link_target, target).map_err(|e| {
            CopyFolderError::CreateSymlink {
                path: target.to_path_buf(),
                io_error: e,
            }
        })?;
    }

    #[cfg(windows)]
    {
        if source.is_dir() {
            std::os::windows::fs::symlink_dir(&link_target, target).map_err(|e| {
                CopyFolderError::CreateSymlink {
                    path: target.to_path_buf(),
                    io_error: e,
                }
            })?;
        } else {
            std::os::windows::fs::symlink_file(&link_target, target).map_err(|e| {
                CopyFolderError::CreateSymlink {
                    path: target.to_path_buf(),
                    io_error: e,
                }
            })?;
        }
    }

    log::trace!(
        "Symlinked {} -> {} (target: {})",
        source.display(),
        target.display(),
        link_target.display()
    );

    Ok(())
}
