//! Configuration loading and merging
//!
//! Builds the process configuration in three passes with per-field
//! precedence: compiled-in defaults, then an optional YAML/TOML file, then
//! flags and `GTS_*` environment variables. Explicit overrides beat the file,
//! and the file beats flag defaults.

pub mod error;
pub mod keys;
pub mod loader;
pub mod overrides;
pub mod resolve;
pub mod types;

use std::path::Path;

pub use error::{ConfigError, DecodeError, OverrideError};
pub use keys::{SettingKey, SettingKind};
pub use loader::load_file;
pub use overrides::{EnvOverrides, Layered, OverrideSource, RegistryDefaults};
pub use resolve::apply_overrides;
pub use types::{Config, DbConfig};

impl Config {
    /// Defaults, replaced wholesale by the file at `path` when one is given.
    ///
    /// An empty path means "no file".
    pub fn new(path: Option<&Path>) -> Result<Config, ConfigError> {
        match path {
            Some(path) if !path.as_os_str().is_empty() => load_file(path),
            _ => Ok(Config::default()),
        }
    }
}

/// Build the fully resolved configuration for this process.
///
/// The file location is itself read from `overrides` (`config-path` /
/// `GTS_CONFIG_PATH`).
pub fn build_config(overrides: &dyn OverrideSource) -> Result<Config, ConfigError> {
    let config_path = overrides.string(SettingKey::ConfigPath)?;
    let mut config = if config_path.is_empty() {
        tracing::debug!("No config file given, starting from defaults");
        Config::default()
    } else {
        Config::new(Some(Path::new(&config_path)))?
    };

    apply_overrides(&mut config, overrides)?;
    tracing::debug!(
        log_level = %config.log_level,
        application_name = %config.application_name,
        db_type = %config.db.db_type,
        "Configuration resolved"
    );
    Ok(config)
}
