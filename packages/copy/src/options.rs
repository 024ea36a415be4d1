//! Options controlling which files a folder copy includes.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use serde::{Deserialize, Serialize};

/// Options for [`copy_folder`](crate::copy_folder).
///
/// The default value disables every filter: all files except OS noise are
/// copied, and source/target are resolved against the current directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyOptions {
    /// Only copy files whose name, with all extensions stripped, equals this value.
    ///
    /// `None` or an empty string disables basename filtering.
    #[serde(default)]
    pub basename: Option<String>,

    /// Directory prepended to both the source and target folder before resolution.
    #[serde(default)]
    pub working_directory: Option<String>,

    /// Only copy files whose final extension (with the leading dot, e.g. `.js`)
    /// is in this list.
    ///
    /// An empty list disables extension filtering.
    #[serde(default)]
    pub file_extensions: Vec<String>,
}

impl CopyOptions {
    /// Restrict the copy to files with the given basename.
    #[must_use]
    pub fn with_basename(mut self, basename: impl Into<String>) -> Self {
        self.basename = Some(basename.into());
        self
    }

    /// Resolve source and target relative to `working_directory`.
    #[must_use]
    pub fn with_working_directory(mut self, working_directory: impl Into<String>) -> Self {
        self.working_directory = Some(working_directory.into());
        self
    }

    /// Restrict the copy to files with one of the given extensions.
    #[must_use]
    pub fn with_file_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.file_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// The configured basename, treating an empty string as unset.
    #[must_use]
    pub fn basename_filter(&self) -> Option<&str> {
        self.basename.as_deref().filter(|b| !b.is_empty())
    }

    /// The configured working directory, treating an empty string as unset.
    #[must_use]
    pub fn working_directory(&self) -> Option<&str> {
        self.working_directory.as_deref().filter(|d| !d.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_disables_filters() {
        let options = CopyOptions::default();

        assert_eq!(options.basename_filter(), None);
        assert_eq!(options.working_directory(), None);
        assert!(options.file_extensions.is_empty());
    }

    #[test]
    fn test_empty_strings_are_unset() {
        let options = CopyOptions::default()
            .with_basename("")
            .with_working_directory("");

        assert_eq!(options.basename_filter(), None);
        assert_eq!(options.working_directory(), None);
    }

    #[test]
    fn test_builders() {
        let options = CopyOptions::default()
            .with_basename("mock2")
            .with_working_directory("spec/fixtures")
            .with_file_extensions([".js", ".css"]);

        assert_eq!(options.basename_filter(), Some("mock2"));
        assert_eq!(options.working_directory(), Some("spec/fixtures"));
        assert_eq!(options.file_extensions, vec![".js", ".css"]);
    }
}
