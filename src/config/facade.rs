//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::SyncConfig;
use crate::error::SyncError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the global file, an optional explicit file and environment.
    pub fn load(explicit: Option<&Path>) -> Result<SyncConfig, SyncError> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(SyncError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
        }
        Ok(MergeService::load(explicit)?)
    }
}
