//! Discovery queues: first-seen order of relpaths for the enactor.

use crate::types::RelPath;
use std::collections::VecDeque;

/// Insertion-ordered relpaths, split by kind.
///
/// Directories are queued before anything beneath them, so draining the
/// directory queue in order always creates parents before children.
#[derive(Debug, Default, Clone)]
pub struct DiscoveryQueues {
    directories: VecDeque<RelPath>,
    files: VecDeque<RelPath>,
}

impl DiscoveryQueues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_directory(&mut self, relpath: RelPath) {
        self.directories.push_back(relpath);
    }

    pub fn push_file(&mut self, relpath: RelPath) {
        self.files.push_back(relpath);
    }

    pub fn next_directory(&mut self) -> Option<RelPath> {
        self.directories.pop_front()
    }

    pub fn next_file(&mut self) -> Option<RelPath> {
        self.files.pop_front()
    }

    pub fn directories(&self) -> impl Iterator<Item = &RelPath> {
        self.directories.iter()
    }

    pub fn directory_count(&self) -> usize {
        self.directories.len()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directories.is_empty() && self.files.is_empty()
    }
}
