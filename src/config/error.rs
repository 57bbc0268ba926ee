//! Configuration error types

use crate::config::keys::{SettingKey, SettingKind};
use std::path::PathBuf;
use thiserror::Error;

/// Failure while building the process configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file at path {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not decode config file at path {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    #[error("could not apply overrides: {0}")]
    Override(#[from] OverrideError),
}

/// Decoder failure for one of the supported file formats.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

/// Failure reading a value from an override source.
#[derive(Debug, Error)]
pub enum OverrideError {
    #[error("setting {key} holds {expected} values, value {value:?} does not fit")]
    TypeMismatch {
        key: SettingKey,
        expected: SettingKind,
        value: String,
    },

    #[error("setting {key} is {actual}, requested as {requested}")]
    WrongKind {
        key: SettingKey,
        actual: SettingKind,
        requested: SettingKind,
    },
}
