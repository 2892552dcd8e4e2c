//! Path index entries: the per-relpath record of a file or directory.

use crate::types::{RootIndex, Timestamp};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs::Metadata;

/// Best-known version of a regular file at one relpath.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Root currently holding the master version
    pub owner: RootIndex,
    pub size: u64,
    /// Full mode bits as reported by stat
    pub permissions: u32,
    pub modified: Timestamp,
}

impl FileRecord {
    /// Seed a record from an entry's metadata.
    pub fn from_metadata(owner: RootIndex, metadata: &Metadata) -> Self {
        Self {
            owner,
            size: metadata.len(),
            permissions: permission_bits(metadata),
            modified: Timestamp::from_last_modification_time(metadata),
        }
    }
}

/// Directory presence across roots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DirectoryRecord {
    /// Every root where this relpath exists as a directory
    pub present_in: BTreeSet<RootIndex>,
    /// Whether the subtree holds at least one eligible file
    pub valid: bool,
}

impl DirectoryRecord {
    pub fn new(root: RootIndex) -> Self {
        let mut present_in = BTreeSet::new();
        present_in.insert(root);
        Self {
            present_in,
            valid: false,
        }
    }

    /// Record that `root` also has this directory. Idempotent.
    pub fn mark_present(&mut self, root: RootIndex) {
        self.present_in.insert(root);
    }

    /// Roots out of `0..root_count` that lack this directory.
    pub fn missing_from(&self, root_count: usize) -> Vec<RootIndex> {
        (0..root_count)
            .filter(|root| !self.present_in.contains(root))
            .collect()
    }
}

/// Index value: a relpath is either a file or a directory for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathEntry {
    File(FileRecord),
    Directory(DirectoryRecord),
}

#[cfg(unix)]
fn permission_bits(metadata: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode()
}

#[cfg(not(unix))]
fn permission_bits(metadata: &Metadata) -> u32 {
    if metadata.permissions().readonly() {
        0o444
    } else {
        0o666
    }
}
