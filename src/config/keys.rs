//! Setting key registry
//!
//! Every operator-tunable setting has one logical key, one command-line flag
//! and one environment variable. The names here are fixed for the life of the
//! process and shared by the override sources and the CLI help surface.

use std::fmt;

/// Type of value a setting carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    Text,
    Integer,
}

impl fmt::Display for SettingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingKind::Text => f.write_str("text"),
            SettingKind::Integer => f.write_str("integer"),
        }
    }
}

/// Logical name of a configuration setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    LogLevel,
    ApplicationName,
    ConfigPath,
    DbType,
    DbAddress,
    DbPort,
    DbUser,
    DbPassword,
    DbDatabase,
}

impl SettingKey {
    /// Every registered key, in help order.
    pub const ALL: [SettingKey; 9] = [
        SettingKey::LogLevel,
        SettingKey::ApplicationName,
        SettingKey::ConfigPath,
        SettingKey::DbType,
        SettingKey::DbAddress,
        SettingKey::DbPort,
        SettingKey::DbUser,
        SettingKey::DbPassword,
        SettingKey::DbDatabase,
    ];

    /// Keys that back a field of [`crate::config::Config`].
    ///
    /// `ConfigPath` is absent: it locates the file rather than populating it.
    pub const FIELDS: [SettingKey; 8] = [
        SettingKey::LogLevel,
        SettingKey::ApplicationName,
        SettingKey::DbType,
        SettingKey::DbAddress,
        SettingKey::DbPort,
        SettingKey::DbUser,
        SettingKey::DbPassword,
        SettingKey::DbDatabase,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SettingKey::LogLevel => "log_level",
            SettingKey::ApplicationName => "application_name",
            SettingKey::ConfigPath => "config_path",
            SettingKey::DbType => "db_type",
            SettingKey::DbAddress => "db_address",
            SettingKey::DbPort => "db_port",
            SettingKey::DbUser => "db_user",
            SettingKey::DbPassword => "db_password",
            SettingKey::DbDatabase => "db_database",
        }
    }

    /// Command-line flag, without the leading `--`.
    pub fn flag(self) -> &'static str {
        match self {
            SettingKey::LogLevel => "log-level",
            SettingKey::ApplicationName => "application-name",
            SettingKey::ConfigPath => "config-path",
            SettingKey::DbType => "db-type",
            SettingKey::DbAddress => "db-address",
            SettingKey::DbPort => "db-port",
            SettingKey::DbUser => "db-user",
            SettingKey::DbPassword => "db-password",
            SettingKey::DbDatabase => "db-database",
        }
    }

    /// Environment variable consulted when the flag is absent.
    pub fn env(self) -> &'static str {
        match self {
            SettingKey::LogLevel => "GTS_LOG_LEVEL",
            SettingKey::ApplicationName => "GTS_APPLICATION_NAME",
            SettingKey::ConfigPath => "GTS_CONFIG_PATH",
            SettingKey::DbType => "GTS_DB_TYPE",
            SettingKey::DbAddress => "GTS_DB_ADDRESS",
            SettingKey::DbPort => "GTS_DB_PORT",
            SettingKey::DbUser => "GTS_DB_USER",
            SettingKey::DbPassword => "GTS_DB_PASSWORD",
            SettingKey::DbDatabase => "GTS_DB_DATABASE",
        }
    }

    pub fn kind(self) -> SettingKind {
        match self {
            SettingKey::DbPort => SettingKind::Integer,
            _ => SettingKind::Text,
        }
    }

    /// Value the flag carries when the operator supplies nothing.
    pub fn default_value(self) -> Option<&'static str> {
        match self {
            SettingKey::LogLevel => Some("info"),
            SettingKey::ApplicationName => Some("gotosocial"),
            SettingKey::ConfigPath => None,
            SettingKey::DbType => Some("postgres"),
            SettingKey::DbAddress => Some("localhost"),
            SettingKey::DbPort => Some("5432"),
            SettingKey::DbUser => Some("postgres"),
            SettingKey::DbPassword => Some("postgres"),
            SettingKey::DbDatabase => Some("postgres"),
        }
    }

    pub fn help(self) -> &'static str {
        match self {
            SettingKey::LogLevel => "Log level to run at: debug, info, warn, fatal",
            SettingKey::ApplicationName => {
                "Name of the application, used in various places internally"
            }
            SettingKey::ConfigPath => {
                "Path to a yaml file containing gotosocial configuration. Values set in this \
                 file will be overwritten by values set as env vars or arguments"
            }
            SettingKey::DbType => "Database type eg., postgres",
            SettingKey::DbAddress => "Database ipv4 address or hostname",
            SettingKey::DbPort => "Database port",
            SettingKey::DbUser => "Database username",
            SettingKey::DbPassword => "Database password",
            SettingKey::DbDatabase => "Database name",
        }
    }

    /// Reverse lookup from a flag spelling.
    pub fn from_flag(flag: &str) -> Option<SettingKey> {
        let flag = flag.trim_start_matches("--");
        Self::ALL.into_iter().find(|key| key.flag() == flag)
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
