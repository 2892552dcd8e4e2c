//! Error types for synchronization runs.
//!
//! Every failure is fatal to the run that produced it. Components return
//! [`SyncError`] and the binary decides the process exit code from
//! [`SyncError::exit_code`].

use std::path::PathBuf;
use thiserror::Error;

/// Broad class of a [`SyncError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad invocation or setup; nothing was scanned or mutated.
    Configuration,
    /// A root or subdirectory could not be read.
    Scan,
    /// Applying a planned change to disk failed.
    Enactment,
    /// The same relpath is a file in one root and a directory in another.
    Integrity,
    /// Index and discovery queues disagree.
    Internal,
}

/// Kind of filesystem object recorded for a relpath.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::File => write!(f, "file"),
            EntryKind::Directory => write!(f, "directory"),
        }
    }
}

/// Synchronization errors
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("At least two directories are required, got {given}")]
    TooFewRoots { given: usize },

    #[error("Directory does not exist: {}", path.display())]
    MissingRoot { path: PathBuf },

    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Directory given more than once: {}", path.display())]
    DuplicateRoot { path: PathBuf },

    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not open directory {}: {source}", path.display())]
    OpenDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not get file info for {}: {source}", path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not open file {}: {source}", path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not set permissions on {}: {source}", path.display())]
    SetPermissions {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not set modification time on {}: {source}", path.display())]
    SetTimes {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("\"{}\" is a {expected} in one directory but a {found} in another", relpath.display())]
    KindConflict {
        relpath: PathBuf,
        expected: EntryKind,
        found: EntryKind,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SyncError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SyncError::TooFewRoots { .. }
            | SyncError::MissingRoot { .. }
            | SyncError::NotADirectory { .. }
            | SyncError::DuplicateRoot { .. }
            | SyncError::InvalidPattern { .. }
            | SyncError::Config(_) => ErrorKind::Configuration,
            SyncError::OpenDir { .. } | SyncError::Stat { .. } => ErrorKind::Scan,
            SyncError::CreateDir { .. }
            | SyncError::OpenFile { .. }
            | SyncError::Read { .. }
            | SyncError::Copy { .. }
            | SyncError::SetPermissions { .. }
            | SyncError::SetTimes { .. } => ErrorKind::Enactment,
            SyncError::KindConflict { .. } => ErrorKind::Integrity,
            SyncError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Process exit code for this error: 2 for configuration, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::Configuration => 2,
            _ => 1,
        }
    }
}

impl From<config::ConfigError> for SyncError {
    fn from(err: config::ConfigError) -> Self {
        SyncError::Config(err.to_string())
    }
}
