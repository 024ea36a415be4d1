//! JSON options file loader.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::Path;

use copy_folder_core::CopyOptions;

use crate::error::ConfigError;

/// Load copy options from a JSON file.
///
/// # Errors
///
/// * If the file cannot be read
/// * If the file cannot be parsed as JSON
pub fn load_json_options(path: &Path) -> Result<CopyOptions, ConfigError> {
    log::debug!("Loading JSON options from {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| ConfigError::JsonParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_json_options() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "basename": null, "fileExtensions": [".html"] }}"#).unwrap();

        let options = load_json_options(file.path()).unwrap();

        assert_eq!(options.basename, None);
        assert_eq!(options.working_directory, None);
        assert_eq!(options.file_extensions, vec![".html"]);
    }

    #[test]
    fn test_load_missing_json_options() {
        let err = load_json_options(Path::new("/nonexistent/copy-folder.json")).unwrap_err();

        assert!(matches!(err, ConfigError::ReadError { .. }));
    }
}
