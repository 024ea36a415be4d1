//! Inclusion and exclusion rules applied to each entry of the walk.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

use crate::options::CopyOptions;

/// File names that are never copied.
pub const EXCLUDED_FILES: &[&str] = &[".DS_Store", "Thumbs.db", "desktop.ini"];

/// Directory names that are never descended into.
pub const EXCLUDED_DIRECTORIES: &[&str] = &[".git", "node_modules"];

/// Outcome of filtering a single entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterDecision {
    /// The entry is a directory the walk should descend into.
    pub descend: bool,
    /// The entry is a file that should be copied.
    pub copy: bool,
}

/// Per-entry filter built once from [`CopyOptions`].
///
/// Decisions depend only on the entry name and whether it is a directory.
#[derive(Debug, Clone)]
pub struct Filter<'a> {
    basename: Option<&'a str>,
    extensions: &'a [String],
}

impl<'a> Filter<'a> {
    /// Create a filter from copy options.
    #[must_use]
    pub fn new(options: &'a CopyOptions) -> Self {
        Self {
            basename: options.basename_filter(),
            extensions: &options.file_extensions,
        }
    }

    /// Whether the walk should descend into a directory named `name`.
    #[must_use]
    pub fn keep_directory(name: &str) -> bool {
        !EXCLUDED_DIRECTORIES.contains(&name)
    }

    /// Whether a file named `name` should be copied.
    #[must_use]
    pub fn keep_file(&self, name: &str) -> bool {
        let basename_matches = self.basename.is_none_or(|b| strip_extensions(name) == b);
        let extension_matches = self.extensions.is_empty()
            || extension(name).is_some_and(|ext| self.extensions.iter().any(|e| *e == ext));

        basename_matches && extension_matches && !EXCLUDED_FILES.contains(&name)
    }

    /// Decide what to do with an entry.
    #[must_use]
    pub fn decide(&self, name: &str, is_dir: bool) -> FilterDecision {
        if is_dir {
            FilterDecision {
                descend: Self::keep_directory(name),
                copy: false,
            }
        } else {
            FilterDecision {
                descend: false,
                copy: self.keep_file(name),
            }
        }
    }
}

/// A file name with everything from the first `.` removed.
///
/// `mock2.min.css` becomes `mock2`; a dotfile such as `.env` becomes empty.
#[must_use]
pub fn strip_extensions(name: &str) -> &str {
    name.split_once('.').map_or(name, |(stem, _)| stem)
}

/// The final extension of a file name, including the leading dot.
///
/// Follows [`Path::extension`], so `.gitignore` has no extension and
/// `archive.` has the extension `.`.
#[must_use]
pub fn extension(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
}
