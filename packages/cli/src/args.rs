//! CLI argument definitions.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use clap::Parser;
use copy_folder_core::CopyOptions;

/// CLI arguments for copy-folder.
#[derive(Debug, Parser)]
#[command(
    name = "copy-folder",
    about = "Copy the files of a folder into another folder, skipping OS noise",
    version
)]
pub struct Args {
    /// Folder to copy from.
    #[arg(index = 1)]
    pub source: Option<String>,

    /// Folder to copy into (created if missing).
    #[arg(index = 2)]
    pub target: Option<String>,

    /// Only copy files with this name (all extensions removed).
    #[arg(long)]
    pub basename: Option<String>,

    /// Resolve source and target relative to this directory.
    #[arg(long = "cd", value_name = "DIR")]
    pub working_directory: Option<String>,

    /// Only copy files with these extensions (comma separated, e.g. `js,css`).
    #[arg(long = "ext", value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Load options from a TOML or JSON file. Flags override file values.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Free-form comment, ignored.
    #[arg(long)]
    pub note: Option<String>,

    /// List every copied file.
    #[arg(long)]
    pub summary: bool,

    /// Print the full report as JSON.
    #[arg(long, conflicts_with = "quiet")]
    pub json: bool,

    /// Print nothing on success.
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Enable verbose output.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Args {
    /// Apply the flags on top of `base` options (usually loaded from a file).
    #[must_use]
    pub fn apply_to(&self, mut base: CopyOptions) -> CopyOptions {
        if let Some(basename) = &self.basename {
            base.basename = Some(basename.clone());
        }
        if let Some(dir) = &self.working_directory {
            base.working_directory = Some(dir.clone());
        }
        let extensions: Vec<String> = self
            .extensions
            .iter()
            .map(String::as_str)
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(normalize_extension)
            .collect();
        if !extensions.is_empty() {
            base.file_extensions = extensions;
        }
        base
    }

    /// Source folder, or an empty string if not given.
    #[must_use]
    pub fn source(&self) -> &str {
        self.source.as_deref().unwrap_or("")
    }

    /// Target folder, or an empty string if not given.
    #[must_use]
    pub fn target(&self) -> &str {
        self.target.as_deref().unwrap_or("")
    }
}

/// Prefix an extension with `.` if it lacks one.
fn normalize_extension(extension: &str) -> String {
    if extension.starts_with('.') {
        extension.to_string()
    } else {
        format!(".{extension}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positional_and_flags() {
        let args = Args::parse_from([
            "copy-folder",
            "src/web",
            "dist",
            "--basename",
            "app",
            "--cd",
            "project",
            "--ext",
            "js,.css",
            "--summary",
        ]);

        assert_eq!(args.source(), "src/web");
        assert_eq!(args.target(), "dist");
        assert!(args.summary);
        assert!(!args.quiet);

        let options = args.apply_to(CopyOptions::default());
        assert_eq!(options.basename.as_deref(), Some("app"));
        assert_eq!(options.working_directory.as_deref(), Some("project"));
        assert_eq!(options.file_extensions, vec![".js", ".css"]);
    }

    #[test]
    fn test_missing_positionals_are_empty() {
        let args = Args::parse_from(["copy-folder"]);

        assert_eq!(args.source(), "");
        assert_eq!(args.target(), "");
    }

    #[test]
    fn test_flags_override_base_options() {
        let args = Args::parse_from(["copy-folder", "a", "b", "--ext", "html"]);
        let base = CopyOptions::default()
            .with_basename("index")
            .with_file_extensions([".js"]);

        let options = args.apply_to(base);

        assert_eq!(options.basename.as_deref(), Some("index"));
        assert_eq!(options.file_extensions, vec![".html"]);
    }

    #[test]
    fn test_json_conflicts_with_quiet() {
        let result = Args::try_parse_from(["copy-folder", "a", "b", "--json", "--quiet"]);

        assert!(result.is_err());
    }
}
