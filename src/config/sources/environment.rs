//! Environment variable source: POLYSYNC_* prefix with __ separator

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment, Map};

/// Add environment variable overlay to builder.
/// Uses POLYSYNC_ prefix and __ as separator for nested keys; list keys are comma separated.
/// `source` replaces the process environment when given.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    source: Option<Map<String, String>>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("POLYSYNC")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("sync.ignore")
            .with_list_parse_key("sync.only")
            .source(source),
    );
    Ok(builder)
}
