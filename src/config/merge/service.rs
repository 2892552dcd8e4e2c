//! MergeService: orchestrates sources, applies merge policy, deserializes to SyncConfig.

use crate::config::sources::{environment, explicit_file, global_file};
use crate::config::SyncConfig;
use config::{ConfigError, Map};
use std::path::Path;

use super::merge_policy;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config from standard sources.
    /// Precedence: defaults (lowest) -> global file -> explicit file -> environment (highest).
    pub fn load(explicit: Option<&Path>) -> Result<SyncConfig, ConfigError> {
        let global = global_file::default_path();
        Self::load_layers(global.as_deref(), explicit, None)
    }

    /// Load from the given layers. `env` replaces the process environment when set.
    pub fn load_layers(
        global: Option<&Path>,
        explicit: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> Result<SyncConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = match global {
            Some(path) => global_file::add_to_builder(builder, path)?,
            None => builder,
        };
        let builder = match explicit {
            Some(path) => explicit_file::add_to_builder(builder, path)?,
            None => builder,
        };
        let builder = environment::add_to_builder(builder, env)?;

        let config = builder.build()?;
        config.try_deserialize()
    }
}
