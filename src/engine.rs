//! Synchronization engine
//!
//! Drives one run through `Idle -> Walking -> MaterializingDirs ->
//! PropagatingFiles -> Done`. The whole index is built before anything is
//! written, so a directory's validity is final before any file beneath it
//! is copied.

use crate::enact::{EnactOptions, Enactor};
use crate::error::SyncError;
use crate::filter::EntryFilter;
use crate::index::PathIndex;
use crate::report::SyncReport;
use crate::roots::RootSet;
use crate::tree::{DiscoveryQueues, Walker, WalkerConfig};
use tracing::{debug, info};

/// Run options
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Descend into subdirectories
    pub recursive: bool,
    /// Copy permission bits and modification time to the copies
    pub preserve_metadata: bool,
    /// Walk and report without mutating disk
    pub dry_run: bool,
}

impl SyncOptions {
    fn walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            recursive: self.recursive,
        }
    }

    fn enact_options(&self) -> EnactOptions {
        EnactOptions {
            dry_run: self.dry_run,
            preserve_metadata: self.preserve_metadata,
        }
    }
}

/// Phase of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Walking,
    MaterializingDirs,
    PropagatingFiles,
    Done,
}

/// Converges a set of roots.
pub struct Synchronizer<F: EntryFilter> {
    options: SyncOptions,
    filter: F,
    state: RunState,
}

impl<F: EntryFilter> Synchronizer<F> {
    pub fn new(options: SyncOptions, filter: F) -> Self {
        Self {
            options,
            filter,
            state: RunState::Idle,
        }
    }

    /// Phase reached by the last run; a failed run stays in the phase that failed.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Run one synchronization over `roots`.
    ///
    /// Each call scans from scratch with fresh index and queues. The first
    /// error aborts the run; changes already made stay in place.
    pub fn run(&mut self, roots: &RootSet) -> Result<SyncReport, SyncError> {
        let mut index = PathIndex::new();
        let mut queues = DiscoveryQueues::new();
        let mut report = SyncReport::new(roots, self.options.dry_run);

        self.transition(RunState::Walking);
        {
            let mut walker = Walker::new(
                self.options.walker_config(),
                &self.filter,
                &mut index,
                &mut queues,
            );
            for (root_index, root) in roots.iter() {
                let outcome = walker.walk(root, root_index)?;
                report.record_walk(root_index, &outcome);
            }
        }
        info!(
            entries = index.len(),
            directories = queues.directory_count(),
            files = queues.file_count(),
            "Finished reading directories"
        );

        let enactor = Enactor::new(roots, &index, self.options.enact_options());

        self.transition(RunState::MaterializingDirs);
        enactor.materialize_directories(&mut queues, &mut report)?;

        self.transition(RunState::PropagatingFiles);
        enactor.propagate_files(&mut queues, &mut report)?;

        self.transition(RunState::Done);
        report.finish();
        Ok(report)
    }

    fn transition(&mut self, next: RunState) {
        debug!(from = ?self.state, to = ?next, "Run state change");
        self.state = next;
    }
}

/// Convenience wrapper: one run with a fresh [`Synchronizer`].
pub fn synchronize<F: EntryFilter>(
    roots: &RootSet,
    options: SyncOptions,
    filter: F,
) -> Result<SyncReport, SyncError> {
    Synchronizer::new(options, filter).run(roots)
}
