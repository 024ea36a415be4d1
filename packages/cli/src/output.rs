//! Terminal output formatting.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use colored::Colorize;
use copy_folder_core::CopyResult;

/// One-line summary of a finished copy.
#[must_use]
pub fn format_report(result: &CopyResult) -> String {
    format!(
        "{} {} → {} (files: {}, {}ms)",
        "copy-folder".bold(),
        result.source.cyan(),
        result.target.cyan(),
        result.count,
        result.duration_millis()
    )
}

/// Print the one-line summary of a finished copy.
pub fn print_report(result: &CopyResult) {
    println!("{}", format_report(result));
}

/// Print every copied file.
pub fn print_files(result: &CopyResult) {
    for file in &result.files {
        println!("  {} {}", "•".dimmed(), file.origin.yellow());
    }
}

/// Print error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}

/// Print a dimmed hint line.
pub fn print_hint(message: &str) {
    eprintln!("{}", message.dimmed());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_format_report() {
        colored::control::set_override(false);
        let result = CopyResult {
            source: "/web/src".to_string(),
            target: "/web/dist".to_string(),
            count: 6,
            duration: Duration::from_millis(12),
            files: Vec::new(),
        };

        assert_eq!(
            format_report(&result),
            "copy-folder /web/src → /web/dist (files: 6, 12ms)"
        );
    }
}
