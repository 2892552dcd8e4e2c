//! Path Index
//!
//! Maps a relpath to the [`PathEntry`] known for it across all roots. The
//! index tracks a logical capacity that doubles once occupancy passes 75%
//! and halves (never below [`DEFAULT_CAPACITY`]) once it drops under 25%,
//! reserving or releasing storage in the backing map to match.
//!
//! Iteration order is unspecified; processing order comes from the
//! discovery queues.

pub mod entry;

pub use entry::{DirectoryRecord, FileRecord, PathEntry};

use crate::error::{EntryKind, SyncError};
use crate::types::RelPath;
use std::collections::HashMap;
use std::path::Path;

/// Starting capacity and the floor for shrinking.
pub const DEFAULT_CAPACITY: usize = 100;

/// Relpath to entry index for one synchronization run.
#[derive(Debug)]
pub struct PathIndex {
    entries: HashMap<RelPath, PathEntry>,
    capacity: usize,
}

impl PathIndex {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(DEFAULT_CAPACITY);
        Self {
            entries: HashMap::with_capacity(capacity),
            capacity,
        }
    }

    /// Insert or overwrite the entry for `key`, returning the previous one.
    pub fn put(&mut self, key: RelPath, value: PathEntry) -> Option<PathEntry> {
        let previous = self.entries.insert(key, value);
        if self.entries.len() * 4 > self.capacity * 3 {
            self.capacity *= 2;
            let additional = self.capacity.saturating_sub(self.entries.len());
            self.entries.reserve(additional);
        }
        previous
    }

    pub fn get(&self, key: &Path) -> Option<&PathEntry> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &Path) -> Option<&mut PathEntry> {
        self.entries.get_mut(key)
    }

    /// Remove the entry for `key`, returning it if present.
    pub fn delete(&mut self, key: &Path) -> Option<PathEntry> {
        let removed = self.entries.remove(key);
        if removed.is_some()
            && self.entries.len() * 4 < self.capacity
            && self.capacity > DEFAULT_CAPACITY
        {
            self.capacity = (self.capacity / 2).max(DEFAULT_CAPACITY);
            self.entries.shrink_to(self.capacity);
        }
        removed
    }

    pub fn contains(&self, key: &Path) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Logical capacity governed by the grow/shrink thresholds.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// File record for a relpath taken from the file discovery queue.
    pub fn file(&self, key: &Path) -> Result<&FileRecord, SyncError> {
        match self.entries.get(key) {
            Some(PathEntry::File(record)) => Ok(record),
            Some(PathEntry::Directory(_)) => Err(SyncError::KindConflict {
                relpath: key.to_path_buf(),
                expected: EntryKind::File,
                found: EntryKind::Directory,
            }),
            None => Err(missing_entry(key)),
        }
    }

    /// Directory record for a relpath taken from the directory discovery queue.
    pub fn directory(&self, key: &Path) -> Result<&DirectoryRecord, SyncError> {
        match self.entries.get(key) {
            Some(PathEntry::Directory(record)) => Ok(record),
            Some(PathEntry::File(_)) => Err(SyncError::KindConflict {
                relpath: key.to_path_buf(),
                expected: EntryKind::Directory,
                found: EntryKind::File,
            }),
            None => Err(missing_entry(key)),
        }
    }
}

impl Default for PathIndex {
    fn default() -> Self {
        Self::new()
    }
}

fn missing_entry(key: &Path) -> SyncError {
    SyncError::Internal(format!(
        "queued path \"{}\" has no index entry",
        key.display()
    ))
}
