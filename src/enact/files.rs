//! Master file propagation.
//!
//! The master is read once; every chunk is written to all targets before the
//! next chunk is read.

use super::EnactOptions;
use crate::error::SyncError;
use crate::format::permission_string;
use crate::index::FileRecord;
use crate::report::FilePlan;
use crate::roots::RootSet;
use crate::types::RootIndex;
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Copy buffers hold at most this many pages.
pub const COPY_PAGES: usize = 16;

/// Page size used when the platform cannot report one.
pub const FALLBACK_PAGE_SIZE: usize = 4096;

/// Overwrite `relpath` in every non-owning root with the master's bytes.
///
/// Returns the plan and the number of bytes written (or that would be
/// written) across all targets. A target that resolves to the master file
/// itself, for example through a symlink, is left alone.
pub fn propagate(
    roots: &RootSet,
    relpath: &Path,
    record: &FileRecord,
    options: EnactOptions,
) -> Result<(FilePlan, u64), SyncError> {
    let master = roots.join(record.owner, relpath);
    let mut seen = vec![resolve(&master)];
    let mut targets: Vec<RootIndex> = Vec::new();
    let mut paths: Vec<PathBuf> = Vec::new();
    for root in (0..roots.len()).filter(|i| *i != record.owner) {
        let path = roots.join(root, relpath);
        let resolved = resolve(&path);
        if seen.contains(&resolved) {
            info!(
                master = %master.display(),
                target = %path.display(),
                "Skipping copy as the target is the same file"
            );
            continue;
        }
        seen.push(resolved);
        targets.push(root);
        paths.push(path);
    }

    if options.preserve_metadata {
        info!(
            master = %master.display(),
            permissions = %permission_string(record.permissions),
            mtime = record.modified.unix_seconds(),
            "Master file metadata"
        );
    }

    let per_target = if options.dry_run || paths.is_empty() {
        record.size
    } else {
        stream_copy(&master, record.size, &paths)?
    };
    for path in &paths {
        info!(from = %master.display(), to = %path.display(), "Copied master file");
        if options.preserve_metadata {
            if !options.dry_run {
                apply_metadata(path, record)?;
            }
            info!(from = %master.display(), to = %path.display(), "Copied permissions and time");
        }
    }

    let written = per_target * paths.len() as u64;
    Ok((FilePlan::new(relpath.to_path_buf(), record, targets), written))
}

/// Canonical location of `path`, or `path` itself when it does not exist yet.
fn resolve(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Copy `source` to every target in a single read pass.
pub fn stream_copy(source: &Path, size: u64, targets: &[PathBuf]) -> Result<u64, SyncError> {
    let mut input = File::open(source).map_err(|e| SyncError::OpenFile {
        path: source.to_path_buf(),
        source: e,
    })?;
    // Nothing is truncated until every target has opened.
    let mut outputs = Vec::with_capacity(targets.len());
    for target in targets {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(target)
            .map_err(|e| SyncError::OpenFile {
                path: target.clone(),
                source: e,
            })?;
        outputs.push((target, file));
    }
    for (target, output) in outputs.iter() {
        output.set_len(0).map_err(|e| SyncError::OpenFile {
            path: target.to_path_buf(),
            source: e,
        })?;
    }

    let mut buffer = vec![0u8; copy_buffer_size(size)];
    let mut copied = 0u64;
    loop {
        let read = match input.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(SyncError::Read {
                    path: source.to_path_buf(),
                    source: e,
                })
            }
        };
        for (target, output) in outputs.iter_mut() {
            output
                .write_all(&buffer[..read])
                .map_err(|e| SyncError::Copy {
                    from: source.to_path_buf(),
                    to: target.to_path_buf(),
                    source: e,
                })?;
        }
        copied += read as u64;
    }
    Ok(copied)
}

/// `min(size, 16 pages)`, never zero.
pub fn copy_buffer_size(size: u64) -> usize {
    let cap = COPY_PAGES * page_size();
    let size = usize::try_from(size).unwrap_or(usize::MAX);
    size.min(cap).max(1)
}

#[cfg(unix)]
pub fn page_size() -> usize {
    use nix::unistd::{sysconf, SysconfVar};
    match sysconf(SysconfVar::PAGE_SIZE) {
        Ok(Some(size)) if size > 0 => size as usize,
        _ => FALLBACK_PAGE_SIZE,
    }
}

#[cfg(not(unix))]
pub fn page_size() -> usize {
    FALLBACK_PAGE_SIZE
}

fn apply_metadata(path: &Path, record: &FileRecord) -> Result<(), SyncError> {
    filetime::set_file_times(path, record.modified, record.modified).map_err(|e| {
        SyncError::SetTimes {
            path: path.to_path_buf(),
            source: e,
        }
    })?;
    set_permission_bits(path, record.permissions).map_err(|e| SyncError::SetPermissions {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(unix)]
fn set_permission_bits(path: &Path, mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode & 0o7777))
}

#[cfg(not(unix))]
fn set_permission_bits(path: &Path, mode: u32) -> std::io::Result<()> {
    let mut permissions = std::fs::metadata(path)?.permissions();
    permissions.set_readonly(mode & 0o222 == 0);
    std::fs::set_permissions(path, permissions)
}
