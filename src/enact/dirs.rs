//! Placeholder directory creation.

use super::EnactOptions;
use crate::error::SyncError;
use crate::index::DirectoryRecord;
use crate::report::DirectoryPlan;
use crate::roots::RootSet;
use std::fs::DirBuilder;
use std::path::Path;
use tracing::info;

/// Create `relpath` in every root missing it, unless the directory is invalid.
///
/// Parents are expected to exist already; discovery order guarantees that.
pub fn materialize(
    roots: &RootSet,
    relpath: &Path,
    record: &DirectoryRecord,
    options: EnactOptions,
) -> Result<DirectoryPlan, SyncError> {
    let mut plan = DirectoryPlan::new(relpath.to_path_buf(), record);
    if !record.valid {
        info!(relpath = %relpath.display(), "Directory not wanted, skipping");
        return Ok(plan);
    }

    for root in record.missing_from(roots.len()) {
        let path = roots.join(root, relpath);
        if !options.dry_run {
            create_dir(&path)?;
        }
        info!(path = %path.display(), "Created directory as it did not exist");
        plan.created_in.push(root);
    }
    Ok(plan)
}

fn create_dir(path: &Path) -> Result<(), SyncError> {
    let mut builder = DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o777);
    }
    builder.create(path).map_err(|source| SyncError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}
