//! Built-in defaults, the lowest-precedence layer.

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};

/// Builder seeded with default values for every scalar key.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    config::Config::builder()
        .set_default("sync.include_hidden", false)?
        .set_default("sync.recursive", false)?
        .set_default("sync.preserve_metadata", false)?
        .set_default("sync.dry_run", false)?
        .set_default("sync.verbose", false)?
        .set_default("logging.level", "warn")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")
}
