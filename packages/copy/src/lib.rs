//! Filtered recursive folder copy with a manifest of copied files.
//!
//! This crate copies the contents of one folder into another for asset staging:
//!
//! * Optional filtering by basename and by file extension
//! * OS noise (`.DS_Store`, `Thumbs.db`, `desktop.ini`, `.git`, `node_modules`)
//!   is always skipped
//! * Directory structure is mirrored for every copied file
//! * Copy-on-write support via `reflink-copy` (APFS, Btrfs, `ReFS`)
//! * A [`CopyResult`] listing every copied file and the elapsed time
//!
//! # Example
//!
//! ```rust,ignore
//! use copy_folder_core::{CopyOptions, copy_folder};
//!
//! let options = CopyOptions::default().with_file_extensions([".js", ".css"]);
//! let result = copy_folder("src/static", "dist/static", &options)?;
//! println!("{} files copied in {}ms", result.count, result.duration_millis());
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod copy;
mod error;
mod filter;
mod manifest;
mod options;
mod path;
mod validate;

pub use copy::copy_folder;
pub use error::CopyFolderError;
pub use filter::{
    EXCLUDED_DIRECTORIES, EXCLUDED_FILES, Filter, FilterDecision, extension, strip_extensions,
};
pub use manifest::{CopyResult, FileRecord, ManifestBuilder};
pub use options::CopyOptions;
pub use path::{ResolvedPaths, normalize_path, resolve_folder, to_posix};
pub use validate::validate;
