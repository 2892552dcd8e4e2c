//! Tree Walker
//!
//! Scans one root at a time into a shared [`PathIndex`], appending newly seen
//! relpaths to the [`DiscoveryQueues`]. Roots must be walked in index order
//! for the master tie-break to favour the lowest root.

use crate::error::{EntryKind, SyncError};
use crate::filter::EntryFilter;
use crate::index::{DirectoryRecord, FileRecord, PathEntry, PathIndex};
use crate::select::{self, Selection};
use crate::tree::queues::DiscoveryQueues;
use crate::types::{RelPath, RootIndex};
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Walker configuration
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Descend into subdirectories; without it directories are ignored entirely
    pub recursive: bool,
}

/// What a single root contributed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkOutcome {
    /// At least one eligible file was found, directly or transitively
    pub found_file: bool,
    pub files: usize,
    pub directories: usize,
    pub skipped: usize,
}

/// Scans roots into an index and discovery queues owned by the caller.
pub struct Walker<'a, F: EntryFilter + ?Sized> {
    config: WalkerConfig,
    filter: &'a F,
    index: &'a mut PathIndex,
    queues: &'a mut DiscoveryQueues,
}

impl<'a, F: EntryFilter + ?Sized> Walker<'a, F> {
    pub fn new(
        config: WalkerConfig,
        filter: &'a F,
        index: &'a mut PathIndex,
        queues: &'a mut DiscoveryQueues,
    ) -> Self {
        Self {
            config,
            filter,
            index,
            queues,
        }
    }

    /// Walk `root` and merge its entries into the index.
    ///
    /// Any unreadable directory or unstattable entry aborts the walk.
    pub fn walk(&mut self, root: &Path, root_index: RootIndex) -> Result<WalkOutcome, SyncError> {
        info!(root = %root.display(), index = root_index, "Reading directory");
        let filter = self.filter;
        let max_depth = if self.config.recursive { usize::MAX } else { 1 };
        let mut outcome = WalkOutcome::default();

        let entries = WalkDir::new(root)
            .min_depth(1)
            .max_depth(max_depth)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                // The root itself may be a dot-directory.
                if entry.depth() == 0 {
                    return true;
                }
                let name = entry.file_name().to_string_lossy();
                if filter.skips_hidden(&name) {
                    info!(path = %entry.path().display(), "Skipping hidden entry");
                    return false;
                }
                true
            });

        for entry in entries {
            let entry = entry.map_err(|e| scan_error(root, e))?;
            let relpath = entry
                .path()
                .strip_prefix(root)
                .map_err(|_| {
                    SyncError::Internal(format!(
                        "{} is not under root {}",
                        entry.path().display(),
                        root.display()
                    ))
                })?
                .to_path_buf();
            let file_type = entry.file_type();

            if file_type.is_dir() {
                if !self.config.recursive {
                    debug!(relpath = %relpath.display(), "Skipping directory");
                    outcome.skipped += 1;
                    continue;
                }
                self.record_directory(relpath, root_index)?;
                outcome.directories += 1;
            } else if file_type.is_file() {
                let name = entry.file_name().to_string_lossy();
                if !filter.admits(&name) {
                    info!(relpath = %relpath.display(), "Skipping file excluded by pattern");
                    outcome.skipped += 1;
                    continue;
                }
                let metadata = entry.metadata().map_err(|e| scan_error(root, e))?;
                let candidate = FileRecord::from_metadata(root_index, &metadata);
                self.mark_ancestors_valid(&relpath);
                self.record_file(relpath, candidate)?;
                outcome.found_file = true;
                outcome.files += 1;
            }
        }

        Ok(outcome)
    }

    fn record_directory(&mut self, relpath: RelPath, root_index: RootIndex) -> Result<(), SyncError> {
        match self.index.get_mut(&relpath) {
            None => {
                debug!(relpath = %relpath.display(), root = root_index, "Found new directory");
                self.queues.push_directory(relpath.clone());
                self.index
                    .put(relpath, PathEntry::Directory(DirectoryRecord::new(root_index)));
                Ok(())
            }
            Some(PathEntry::Directory(record)) => {
                record.mark_present(root_index);
                Ok(())
            }
            Some(PathEntry::File(_)) => Err(SyncError::KindConflict {
                relpath,
                expected: EntryKind::File,
                found: EntryKind::Directory,
            }),
        }
    }

    fn record_file(&mut self, relpath: RelPath, candidate: FileRecord) -> Result<(), SyncError> {
        match self.index.get_mut(&relpath) {
            None => {
                debug!(relpath = %relpath.display(), root = candidate.owner, "Found new file");
                self.queues.push_file(relpath.clone());
                self.index.put(relpath, PathEntry::File(candidate));
                Ok(())
            }
            Some(PathEntry::File(record)) => {
                let root = candidate.owner;
                match select::offer(record, candidate) {
                    Selection::Replaced { previous } => info!(
                        relpath = %relpath.display(),
                        root,
                        previous,
                        "Replaced master as the edit time is newer"
                    ),
                    Selection::Kept => info!(
                        relpath = %relpath.display(),
                        root,
                        master = record.owner,
                        "Kept master as the edit time is not newer"
                    ),
                }
                Ok(())
            }
            Some(PathEntry::Directory(_)) => Err(SyncError::KindConflict {
                relpath,
                expected: EntryKind::Directory,
                found: EntryKind::File,
            }),
        }
    }

    /// Every directory above an eligible file is valid.
    fn mark_ancestors_valid(&mut self, relpath: &Path) {
        for ancestor in relpath.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            if let Some(PathEntry::Directory(record)) = self.index.get_mut(ancestor) {
                // Ancestors of a valid directory were marked with it.
                if record.valid {
                    break;
                }
                record.valid = true;
            }
        }
    }
}

fn scan_error(root: &Path, err: walkdir::Error) -> SyncError {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.to_path_buf());
    let message = err.to_string();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, message));
    if path.is_dir() {
        SyncError::OpenDir { path, source }
    } else {
        SyncError::Stat { path, source }
    }
}
