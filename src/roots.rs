//! Root set: the ordered directories being converged.

use crate::error::SyncError;
use crate::types::RootIndex;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Minimum number of roots for a run.
pub const MIN_ROOTS: usize = 2;

/// Ordered, validated root directories. Index order is tie-break order.
#[derive(Debug, Clone, Serialize)]
pub struct RootSet {
    roots: Vec<PathBuf>,
}

impl RootSet {
    /// Validate and canonicalize the given directories.
    ///
    /// Fails with a configuration error when fewer than two are given or any
    /// of them is missing or not a directory.
    pub fn new<I, P>(paths: I) -> Result<Self, SyncError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let paths: Vec<PathBuf> = paths.into_iter().map(|p| p.as_ref().to_path_buf()).collect();
        if paths.len() < MIN_ROOTS {
            return Err(SyncError::TooFewRoots { given: paths.len() });
        }

        let mut roots = Vec::with_capacity(paths.len());
        for path in paths {
            let metadata = match std::fs::metadata(&path) {
                Ok(m) => m,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    tracing::debug!(path = %path.display(), "root does not exist");
                    return Err(SyncError::MissingRoot { path });
                }
                Err(source) => return Err(SyncError::Stat { path, source }),
            };
            if !metadata.is_dir() {
                return Err(SyncError::NotADirectory { path });
            }
            let canonical = dunce::canonicalize(&path)
                .map_err(|source| SyncError::Stat { path: path.clone(), source })?;
            if roots.contains(&canonical) {
                return Err(SyncError::DuplicateRoot { path });
            }
            roots.push(canonical);
        }
        tracing::debug!(count = roots.len(), "all directories exist");
        Ok(Self { roots })
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn path(&self, index: RootIndex) -> &Path {
        &self.roots[index]
    }

    /// Absolute location of `relpath` under root `index`.
    pub fn join(&self, index: RootIndex, relpath: &Path) -> PathBuf {
        self.roots[index].join(relpath)
    }

    pub fn iter(&self) -> impl Iterator<Item = (RootIndex, &Path)> {
        self.roots.iter().enumerate().map(|(i, p)| (i, p.as_path()))
    }
}
