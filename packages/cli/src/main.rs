//! copy-folder CLI entry point.
//!
//! Copies the files of a folder into another folder, optionally filtered by
//! basename and extension, and reports what was copied.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod args;
mod output;

use std::env;

use clap::Parser;

use args::Args;
use copy_folder_config::load_options;
use copy_folder_core::{CopyFolderError, CopyOptions, copy_folder};

fn main() {
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        // SAFETY: We're setting this before any other threads are spawned
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    pretty_env_logger::init();

    if let Err(e) = run(&args) {
        output::print_error(&e.to_string());
        let code = exit_code(&*e);
        if code == 2 {
            output::print_hint("Usage: copy-folder <SOURCE> <TARGET> [OPTIONS] (see --help)");
        }
        std::process::exit(code);
    }
}

/// Exit code for a failed run.
///
/// Returns 2 when the source or target folder was rejected before copying,
/// 1 for any other failure.
fn exit_code(error: &(dyn std::error::Error + 'static)) -> i32 {
    match error.downcast_ref::<CopyFolderError>() {
        Some(e) if e.is_validation() => 2,
        _ => 1,
    }
}

/// Main application logic.
fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let base = match &args.config {
        Some(path) => load_options(path)?,
        None => CopyOptions::default(),
    };
    let options = args.apply_to(base);

    if let Some(note) = &args.note {
        log::debug!("Note: {note}");
    }

    let result = copy_folder(args.source(), args.target(), &options)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if !args.quiet {
        output::print_report(&result);
        if args.summary {
            output::print_files(&result);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Args {
        Args::parse_from(std::iter::once("copy-folder").chain(args.iter().copied()))
    }

    #[test]
    fn test_run_with_config_file() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source");
        fs::create_dir_all(source.join("css")).unwrap();
        fs::write(source.join("app.js"), "js").unwrap();
        fs::write(source.join("css/app.css"), "css").unwrap();
        fs::write(source.join("index.html"), "html").unwrap();
        let config = dir.path().join("copy-folder.toml");
        fs::write(&config, "fileExtensions = [\".css\"]\n").unwrap();

        let cd = dir.path().to_string_lossy().to_string();
        let config_arg = config.to_string_lossy().to_string();
        let args = parse(&[
            "source",
            "target",
            "--cd",
            cd.as_str(),
            "--config",
            config_arg.as_str(),
            "--quiet",
        ]);

        run(&args).unwrap();

        assert!(dir.path().join("target/css/app.css").is_file());
        assert!(!dir.path().join("target/app.js").exists());
        assert!(!dir.path().join("target/index.html").exists());
    }

    #[test]
    fn test_run_reports_missing_source() {
        let err = run(&parse(&["--quiet"])).unwrap_err();

        assert_eq!(
            err.to_string(),
            "[copy-folder] Must specify the source folder path."
        );
        assert_eq!(exit_code(&*err), 2);
    }

    #[test]
    fn test_exit_code_for_other_errors() {
        let err = run(&parse(&["a", "b", "--config", "options.yaml"])).unwrap_err();

        assert_eq!(err.to_string(), "Unsupported config format: yaml");
        assert_eq!(exit_code(&*err), 1);
    }
}
