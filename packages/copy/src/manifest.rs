//! Manifest of copied files and the final copy report.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::time::{Duration, Instant};

use serde::{Serialize, Serializer};

use crate::path::ResolvedPaths;

/// One copied file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    /// Path relative to the source folder, slash-separated.
    pub origin: String,
    /// Path relative to the target folder, slash-separated.
    pub dest: String,
}

/// Report returned by a successful [`copy_folder`](crate::copy_folder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyResult {
    /// Resolved source folder.
    pub source: String,
    /// Resolved target folder.
    pub target: String,
    /// Number of files copied.
    pub count: usize,
    /// Wall-clock time of the whole operation (serialized as milliseconds).
    #[serde(serialize_with = "serialize_millis")]
    pub duration: Duration,
    /// Copied files in walk order.
    pub files: Vec<FileRecord>,
}

impl CopyResult {
    /// Elapsed time in whole milliseconds.
    #[must_use]
    pub fn duration_millis(&self) -> u64 {
        u64::try_from(self.duration.as_millis()).unwrap_or(u64::MAX)
    }
}

fn serialize_millis<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
}

/// Accumulates [`FileRecord`]s during the walk.
#[derive(Debug)]
pub struct ManifestBuilder {
    started: Instant,
    files: Vec<FileRecord>,
}

impl ManifestBuilder {
    /// Start a manifest whose duration is measured from `started`.
    #[must_use]
    pub const fn started_at(started: Instant) -> Self {
        Self {
            started,
            files: Vec::new(),
        }
    }

    /// Record an accepted file.
    pub fn record(&mut self, origin: String, dest: String) {
        log::trace!("Recorded {origin} -> {dest}");
        self.files.push(FileRecord { origin, dest });
    }

    /// Finish the manifest into a [`CopyResult`].
    #[must_use]
    pub fn finish(self, paths: ResolvedPaths) -> CopyResult {
        CopyResult {
            source: paths.source,
            target: paths.target,
            count: self.files.len(),
            duration: self.started.elapsed(),
            files: self.files,
        }
    }
}
