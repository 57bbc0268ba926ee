//! Config file loading

use crate::config::error::{ConfigError, DecodeError};
use crate::config::Config;
use std::fs;
use std::path::Path;

/// Read and decode the file at `path` into a fresh [`Config`].
///
/// Fields the file leaves out stay at their sentinel; nothing is merged from
/// an existing configuration. `.toml` files decode as TOML, everything else as
/// YAML (which also covers JSON).
pub fn load_file(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)
        .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "toml" => parse_toml_config(&content),
        _ => parse_yaml_config(&content),
    }
    .map_err(|source| ConfigError::Decode { path: path.to_path_buf(), source })?;

    tracing::debug!("Loaded config file {}", path.display());
    Ok(parsed)
}

fn parse_toml_config(content: &str) -> Result<Config, DecodeError> {
    Ok(toml::from_str(content)?)
}

fn parse_yaml_config(content: &str) -> Result<Config, DecodeError> {
    // serde_yaml rejects a document with no nodes; treat it like an empty mapping.
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(content)?)
}
