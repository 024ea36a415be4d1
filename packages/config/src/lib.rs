//! Options file loading for copy-folder.
//!
//! Loads [`CopyOptions`] from a file so a build can keep its copy rules
//! next to its sources.
//!
//! # Supported Formats
//!
//! * TOML (`*.toml`)
//! * JSON (`*.json`)
//!
//! Keys use the same camelCase names in both formats:
//!
//! ```toml
//! basename = "app"
//! workingDirectory = "web"
//! fileExtensions = [".js", ".css"]
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod json_loader;
mod toml_loader;

pub use error::ConfigError;
pub use json_loader::load_json_options;
pub use toml_loader::load_toml_options;

use std::path::Path;

use copy_folder_core::CopyOptions;

/// Load an options file, auto-detecting the format based on extension.
///
/// # Arguments
///
/// * `path` - Path to the options file
///
/// # Errors
///
/// * If the file extension is not supported
/// * If the file cannot be read
/// * If the file cannot be parsed
pub fn load_options(path: &Path) -> Result<CopyOptions, ConfigError> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    match extension {
        "toml" => load_toml_options(path),
        "json" => load_json_options(path),
        _ => Err(ConfigError::UnsupportedFormat(extension.to_string())),
    }
}
