//! Configuration
//!
//! Layered settings for a run: built-in defaults, the global config file,
//! an explicit `--config` file and `POLYSYNC__*` environment variables, in
//! increasing precedence. Command-line flags are folded in last by the CLI.

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;
pub use paths::xdg_root as xdg;

use crate::engine::SyncOptions;
use crate::error::SyncError;
use crate::filter::PatternFilter;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncConfig {
    #[serde(default)]
    pub sync: SyncSection,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// `[sync]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncSection {
    /// Include dotfiles and dot-directories
    #[serde(default)]
    pub include_hidden: bool,
    /// Descend into subdirectories
    #[serde(default)]
    pub recursive: bool,
    /// Copy permission bits and modification time from the master
    #[serde(default)]
    pub preserve_metadata: bool,
    /// Report without mutating disk
    #[serde(default)]
    pub dry_run: bool,
    /// Narrate every decision
    #[serde(default)]
    pub verbose: bool,
    /// Globs of file names to exclude
    #[serde(default)]
    pub ignore: Vec<String>,
    /// Globs of file names to restrict to
    #[serde(default)]
    pub only: Vec<String>,
}

impl SyncConfig {
    /// Engine options derived from the `[sync]` section.
    pub fn options(&self) -> SyncOptions {
        SyncOptions {
            recursive: self.sync.recursive,
            preserve_metadata: self.sync.preserve_metadata,
            dry_run: self.sync.dry_run,
        }
    }

    /// Compile the ignore/only globs into a filter.
    pub fn filter(&self) -> Result<PatternFilter, SyncError> {
        PatternFilter::from_globs(&self.sync.ignore, &self.sync.only, self.sync.include_hidden)
    }

    /// Dry runs narrate by default.
    pub fn is_verbose(&self) -> bool {
        self.sync.verbose || self.sync.dry_run
    }
}
