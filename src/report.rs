//! Run report: what the walk found and what enactment did (or would do).

use crate::index::{DirectoryRecord, FileRecord};
use crate::roots::RootSet;
use crate::tree::WalkOutcome;
use crate::types::{RelPath, RootIndex, Timestamp};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// Per-directory decision.
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryPlan {
    pub relpath: RelPath,
    /// Whether the subtree is wanted (contains eligible files)
    pub valid: bool,
    pub present_in: Vec<RootIndex>,
    /// Roots where the directory was (or would be) created
    pub created_in: Vec<RootIndex>,
}

impl DirectoryPlan {
    pub fn new(relpath: RelPath, record: &DirectoryRecord) -> Self {
        Self {
            relpath,
            valid: record.valid,
            present_in: record.present_in.iter().copied().collect(),
            created_in: Vec::new(),
        }
    }
}

/// Per-file decision.
#[derive(Debug, Clone, Serialize)]
pub struct FilePlan {
    pub relpath: RelPath,
    /// Root holding the master version
    pub owner: RootIndex,
    pub size: u64,
    pub permissions: u32,
    pub modified: DateTime<Utc>,
    /// Roots whose copy was (or would be) overwritten
    pub targets: Vec<RootIndex>,
}

impl FilePlan {
    pub fn new(relpath: RelPath, record: &FileRecord, targets: Vec<RootIndex>) -> Self {
        Self {
            relpath,
            owner: record.owner,
            size: record.size,
            permissions: record.permissions,
            modified: to_datetime(record.modified),
            targets,
        }
    }
}

/// Per-root walk summary.
#[derive(Debug, Clone, Serialize)]
pub struct RootSummary {
    pub index: RootIndex,
    pub path: PathBuf,
    pub found_file: bool,
    pub files: usize,
    pub directories: usize,
    pub skipped: usize,
}

/// Synchronization run report
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    pub dry_run: bool,
    pub started_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
    pub roots: Vec<RootSummary>,
    pub directories: Vec<DirectoryPlan>,
    pub files: Vec<FilePlan>,
    pub created_dirs: usize,
    pub copied_files: usize,
    pub bytes_copied: u64,
}

impl SyncReport {
    pub fn new(roots: &RootSet, dry_run: bool) -> Self {
        Self {
            dry_run,
            started_at: Utc::now(),
            finished_at: None,
            roots: roots
                .iter()
                .map(|(index, path)| RootSummary {
                    index,
                    path: path.to_path_buf(),
                    found_file: false,
                    files: 0,
                    directories: 0,
                    skipped: 0,
                })
                .collect(),
            directories: Vec::new(),
            files: Vec::new(),
            created_dirs: 0,
            copied_files: 0,
            bytes_copied: 0,
        }
    }

    pub fn record_walk(&mut self, root: RootIndex, outcome: &WalkOutcome) {
        if let Some(summary) = self.roots.get_mut(root) {
            summary.found_file = outcome.found_file;
            summary.files = outcome.files;
            summary.directories = outcome.directories;
            summary.skipped = outcome.skipped;
        }
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Directories actually wanted in at least one root.
    pub fn wanted_directories(&self) -> impl Iterator<Item = &DirectoryPlan> {
        self.directories.iter().filter(|d| d.valid)
    }

    /// Nothing was (or would be) changed on disk.
    pub fn is_noop(&self) -> bool {
        self.created_dirs == 0 && self.copied_files == 0
    }
}

fn to_datetime(time: Timestamp) -> DateTime<Utc> {
    DateTime::from_timestamp(time.unix_seconds(), time.nanoseconds()).unwrap_or_default()
}
