//! Path normalization into a slash-separated canonical form.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{MAIN_SEPARATOR, Path};

use path_clean::PathClean;

use crate::options::CopyOptions;

/// Source and target folders after working-directory prefixing and normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Absolute, slash-separated source folder (empty if none was given).
    pub source: String,
    /// Absolute, slash-separated target folder (empty if none was given).
    pub target: String,
}

impl ResolvedPaths {
    /// Resolve raw folder arguments using the options' working directory.
    #[must_use]
    pub fn resolve(source_folder: &str, target_folder: &str, options: &CopyOptions) -> Self {
        let working_directory = options.working_directory();
        Self {
            source: resolve_folder(source_folder, working_directory),
            target: resolve_folder(target_folder, working_directory),
        }
    }
}

/// Normalize a raw path string.
///
/// Platform separators become `/`, `.` and `..` segments are resolved
/// lexically, and a trailing slash is removed (the root `/` is kept).
/// An empty input yields an empty string.
#[must_use]
pub fn normalize_path(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let slashed = raw.replace(MAIN_SEPARATOR, "/");
    let cleaned = Path::new(&slashed).clean();
    let mut normalized = cleaned.to_string_lossy().replace(MAIN_SEPARATOR, "/");

    if normalized.len() > 1 && normalized.ends_with('/') {
        normalized.pop();
    }

    normalized
}

/// Render a path in slash-separated form with any leading drive
/// designator (`C:`) removed.
#[must_use]
pub fn to_posix(path: &Path) -> String {
    let slashed = path.to_string_lossy().replace(MAIN_SEPARATOR, "/");
    strip_drive(&slashed).to_string()
}

fn strip_drive(path: &str) -> &str {
    let bytes = path.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        &path[2..]
    } else {
        path
    }
}

/// Resolve a raw source or target folder into an absolute normalized path.
///
/// When `working_directory` is set the raw folder is prefixed with it
/// (`working_directory + '/' + raw`) before normalization. Relative results
/// are anchored at the process current directory. An empty `raw` stays empty
/// so validation can report it as missing.
#[must_use]
pub fn resolve_folder(raw: &str, working_directory: Option<&str>) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let prefixed = working_directory.map_or_else(
        || raw.to_string(),
        |dir| format!("{}/{raw}", normalize_path(dir)),
    );
    let normalized = normalize_path(&prefixed);

    if Path::new(&normalized).is_absolute() {
        return normalized;
    }

    match std::env::current_dir() {
        Ok(cwd) => normalize_path(&cwd.join(&normalized).to_string_lossy()),
        Err(e) => {
            log::debug!("Cannot read current directory, keeping {normalized} relative: {e}");
            normalized
        }
    }
}
