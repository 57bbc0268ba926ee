//! Configuration shape
//!
//! Every scalar uses its type's empty value (`""`, `0`) as the "not yet
//! configured" sentinel; the resolver relies on that to decide whether a
//! flag default may fill a field. A file that sets `port: 0` or an empty
//! string is indistinguishable from one that leaves the field out.

use serde::{Deserialize, Deserializer, Serialize};

const MASK: &str = "********";

/// Everything the server needs to start.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(rename = "logLevel")]
    pub log_level: String,

    #[serde(rename = "applicationName")]
    pub application_name: String,

    #[serde(deserialize_with = "null_as_default")]
    pub db: DbConfig,
}

/// Database connection settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DbConfig {
    #[serde(rename = "type")]
    pub db_type: String,
    pub address: String,
    pub port: i64,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl Config {
    /// Copy suitable for showing to an operator: secrets are masked.
    pub fn redacted(&self) -> Config {
        let mut shown = self.clone();
        if !shown.db.password.is_empty() {
            shown.db.password = MASK.to_string();
        }
        shown
    }
}

/// A `db:` key with no body (`db: ~`) still yields an allocated group.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_sentinels() {
        let cfg = Config::default();
        assert!(cfg.log_level.is_empty());
        assert!(cfg.application_name.is_empty());
        assert_eq!(cfg.db, DbConfig::default());
        assert_eq!(cfg.db.port, 0);
        assert!(cfg.db.password.is_empty());
    }

    #[test]
    fn test_redacted_masks_password_only() {
        let mut cfg = Config::default();
        cfg.db.user = "gts".into();
        cfg.db.password = "hunter2".into();

        let shown = cfg.redacted();
        assert_eq!(shown.db.password, MASK);
        assert_eq!(shown.db.user, "gts");
        assert_eq!(cfg.db.password, "hunter2");
    }

    #[test]
    fn test_redacted_leaves_empty_password_empty() {
        let shown = Config::default().redacted();
        assert!(shown.db.password.is_empty());
    }

    #[test]
    fn test_serializes_with_file_tags() {
        let mut cfg = Config::default();
        cfg.log_level = "debug".into();
        cfg.db.db_type = "postgres".into();
        let value = serde_json::to_value(&cfg).expect("json");
        assert_eq!(value["logLevel"], "debug");
        assert_eq!(value["db"]["type"], "postgres");
        assert_eq!(value["db"]["port"], 0);
    }
}
