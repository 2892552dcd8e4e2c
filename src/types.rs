//! Core types shared by the walker, index and enactor.

use std::path::PathBuf;

/// RootIndex: stable position of a root in the root set for one run.
///
/// Lower indices win modification-time ties.
pub type RootIndex = usize;

/// RelPath: path of an entry with its owning root stripped; the key that
/// unifies the same logical object across roots.
pub type RelPath = PathBuf;

/// Timestamp: file modification time with sub-second precision.
pub type Timestamp = filetime::FileTime;
