//! Global config file: $XDG_CONFIG_HOME/polysync/config.toml (optional).

use crate::config::xdg;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File, FileFormat};
use std::path::{Path, PathBuf};

/// Default location of the global config file, if a home directory is known.
pub fn default_path() -> Option<PathBuf> {
    xdg::config_home()
        .ok()
        .map(|home| home.join("polysync").join("config.toml"))
}

/// Add the global file as an optional TOML source.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(builder.add_source(File::from(path).format(FileFormat::Toml).required(false)))
}
