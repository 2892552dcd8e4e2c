//! Convergence Enactor
//!
//! Applies a finished walk to disk in two phases: directories first, in
//! discovery order, then files. The index is read-only here; the queues are
//! drained.

pub mod dirs;
pub mod files;

use crate::error::SyncError;
use crate::index::PathIndex;
use crate::report::SyncReport;
use crate::roots::RootSet;
use crate::tree::DiscoveryQueues;

/// Enactment switches
#[derive(Debug, Clone, Copy, Default)]
pub struct EnactOptions {
    /// Record intended actions without touching disk
    pub dry_run: bool,
    /// Copy permission bits and modification time from the master
    pub preserve_metadata: bool,
}

/// Applies one run's index to the roots.
pub struct Enactor<'a> {
    roots: &'a RootSet,
    index: &'a PathIndex,
    options: EnactOptions,
}

impl<'a> Enactor<'a> {
    pub fn new(roots: &'a RootSet, index: &'a PathIndex, options: EnactOptions) -> Self {
        Self {
            roots,
            index,
            options,
        }
    }

    /// Phase A: create every valid directory in the roots that lack it.
    pub fn materialize_directories(
        &self,
        queues: &mut DiscoveryQueues,
        report: &mut SyncReport,
    ) -> Result<(), SyncError> {
        while let Some(relpath) = queues.next_directory() {
            let record = self.index.directory(&relpath)?;
            let plan = dirs::materialize(self.roots, &relpath, record, self.options)?;
            report.created_dirs += plan.created_in.len();
            report.directories.push(plan);
        }
        Ok(())
    }

    /// Phase B: copy every master file over its counterparts in the other roots.
    pub fn propagate_files(
        &self,
        queues: &mut DiscoveryQueues,
        report: &mut SyncReport,
    ) -> Result<(), SyncError> {
        while let Some(relpath) = queues.next_file() {
            let record = self.index.file(&relpath)?;
            let (plan, written) = files::propagate(self.roots, &relpath, record, self.options)?;
            report.copied_files += plan.targets.len();
            report.bytes_copied += written;
            report.files.push(plan);
        }
        Ok(())
    }
}
