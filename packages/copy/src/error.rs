//! Error types for folder copy operations.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during a folder copy.
///
/// Validation failures carry the fixed `[copy-folder]` prefix in their message.
/// The remaining variants wrap the underlying IO error of the walk or copy.
#[derive(Debug, Error)]
pub enum CopyFolderError {
    /// No source folder was given.
    #[error("[copy-folder] Must specify the source folder path.")]
    MissingSource,

    /// No target folder was given.
    #[error("[copy-folder] Must specify the target folder path.")]
    MissingTarget,

    /// The source folder does not exist.
    #[error("[copy-folder] Source folder does not exist: {0}")]
    SourceNotFound(String),

    /// The target folder does not exist and could not be created.
    #[error("[copy-folder] Target folder cannot be created: {0}")]
    TargetUncreatable(String),

    /// The source path is not a directory.
    #[error("[copy-folder] Source is not a folder: {0}")]
    SourceNotDirectory(String),

    /// The target path is not a directory.
    #[error("[copy-folder] Target is not a folder: {0}")]
    TargetNotDirectory(String),

    /// Source and target are the same folder or nested in one another.
    #[error("[copy-folder] Source and target folders overlap: {source_folder} <-> {target_folder}")]
    Overlap {
        /// Resolved source folder.
        source_folder: String,
        /// Resolved target folder.
        target_folder: String,
    },

    /// Failed to read a source directory.
    #[error("Failed to read directory {}: {io_error}", path.display())]
    ReadDir {
        /// The directory path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        io_error: std::io::Error,
    },

    /// Failed to get entry metadata.
    #[error("Failed to get metadata for {}: {io_error}", path.display())]
    Metadata {
        /// The entry path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        io_error: std::io::Error,
    },

    /// Failed to create a target directory.
    #[error("Failed to create directory {}: {io_error}", path.display())]
    CreateDir {
        /// The directory path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        io_error: std::io::Error,
    },

    /// Failed to copy a file.
    #[error("Failed to copy {} to {}: {io_error}", source_path.display(), target_path.display())]
    FileCopy {
        /// Source file path.
        source_path: PathBuf,
        /// Target file path.
        target_path: PathBuf,
        /// The underlying IO error.
        #[source]
        io_error: std::io::Error,
    },

    /// Failed to read symlink target.
    #[error("Failed to read symlink {}: {io_error}", path.display())]
    ReadLink {
        /// The symlink path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        io_error: std::io::Error,
    },

    /// Failed to create symlink.
    #[error("Failed to create symlink {}: {io_error}", path.display())]
    CreateSymlink {
        /// The symlink path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        io_error: std::io::Error,
    },
}

impl CopyFolderError {
    /// Whether this error was raised while validating the inputs,
    /// before any file was copied.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingSource
                | Self::MissingTarget
                | Self::SourceNotFound(_)
                | Self::TargetUncreatable(_)
                | Self::SourceNotDirectory(_)
                | Self::TargetNotDirectory(_)
                | Self::Overlap { .. }
        )
    }
}
