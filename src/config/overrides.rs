//! Runtime override sources
//!
//! An override source answers three questions about a setting: its text
//! value, its integer value, and whether the operator supplied it explicitly
//! on this run. A value that only comes from a compiled-in default is
//! readable but not explicitly set.

use crate::config::error::OverrideError;
use crate::config::keys::{SettingKey, SettingKind};
use std::collections::HashMap;

pub trait OverrideSource {
    /// Text value for `key`, or `""` when the source has nothing.
    fn string(&self, key: SettingKey) -> Result<String, OverrideError>;

    /// Integer value for `key`, or `0` when the source has nothing.
    fn int(&self, key: SettingKey) -> Result<i64, OverrideError>;

    /// Whether the operator supplied `key` on this run.
    fn is_set(&self, key: SettingKey) -> bool;
}

pub(crate) fn ensure_kind(key: SettingKey, requested: SettingKind) -> Result<(), OverrideError> {
    let actual = key.kind();
    if actual != requested {
        return Err(OverrideError::WrongKind { key, actual, requested });
    }
    Ok(())
}

pub(crate) fn parse_int(key: SettingKey, raw: &str) -> Result<i64, OverrideError> {
    raw.trim().parse::<i64>().map_err(|_| OverrideError::TypeMismatch {
        key,
        expected: SettingKind::Integer,
        value: raw.to_string(),
    })
}

/// Override source backed by `GTS_*` environment variables.
///
/// Variables that are present but empty count as unset.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    values: HashMap<SettingKey, String>,
}

impl EnvOverrides {
    /// Snapshot the registered variables from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(
            SettingKey::ALL
                .iter()
                .filter_map(|key| std::env::var(key.env()).ok().map(|v| (key.env(), v))),
        )
    }

    /// Build from explicit `(NAME, value)` pairs; unregistered names are ignored.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut values = HashMap::new();
        for (name, value) in vars {
            let Some(key) = SettingKey::ALL.into_iter().find(|k| k.env() == name.as_ref()) else {
                continue;
            };
            let value = value.into();
            if !value.is_empty() {
                values.insert(key, value);
            }
        }
        Self { values }
    }
}

impl OverrideSource for EnvOverrides {
    fn string(&self, key: SettingKey) -> Result<String, OverrideError> {
        ensure_kind(key, SettingKind::Text)?;
        Ok(self.values.get(&key).cloned().unwrap_or_default())
    }

    fn int(&self, key: SettingKey) -> Result<i64, OverrideError> {
        ensure_kind(key, SettingKind::Integer)?;
        match self.values.get(&key) {
            Some(raw) => parse_int(key, raw),
            None => Ok(0),
        }
    }

    fn is_set(&self, key: SettingKey) -> bool {
        self.values.contains_key(&key)
    }
}

/// Consults `primary` first and falls back to `fallback`.
///
/// A key is explicitly set when either source says so. Values come from the
/// first source that has the key set; when neither does, the primary answers,
/// so its defaults still apply.
#[derive(Debug, Clone)]
pub struct Layered<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> Layered<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: OverrideSource, F: OverrideSource> OverrideSource for Layered<P, F> {
    fn string(&self, key: SettingKey) -> Result<String, OverrideError> {
        if !self.primary.is_set(key) && self.fallback.is_set(key) {
            return self.fallback.string(key);
        }
        self.primary.string(key)
    }

    fn int(&self, key: SettingKey) -> Result<i64, OverrideError> {
        if !self.primary.is_set(key) && self.fallback.is_set(key) {
            return self.fallback.int(key);
        }
        self.primary.int(key)
    }

    fn is_set(&self, key: SettingKey) -> bool {
        self.primary.is_set(key) || self.fallback.is_set(key)
    }
}

/// Source that only knows the registry's compiled-in defaults.
///
/// Nothing is ever explicitly set.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistryDefaults;

impl OverrideSource for RegistryDefaults {
    fn string(&self, key: SettingKey) -> Result<String, OverrideError> {
        ensure_kind(key, SettingKind::Text)?;
        Ok(key.default_value().unwrap_or_default().to_string())
    }

    fn int(&self, key: SettingKey) -> Result<i64, OverrideError> {
        ensure_kind(key, SettingKind::Integer)?;
        key.default_value().map_or(Ok(0), |raw| parse_int(key, raw))
    }

    fn is_set(&self, _key: SettingKey) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_reads_registered_vars() {
        let env = EnvOverrides::from_vars([("GTS_LOG_LEVEL", "debug"), ("GTS_DB_PORT", "5433")]);
        assert!(env.is_set(SettingKey::LogLevel));
        assert!(env.is_set(SettingKey::DbPort));
        assert!(!env.is_set(SettingKey::DbUser));
        assert_eq!(env.string(SettingKey::LogLevel).expect("text"), "debug");
        assert_eq!(env.int(SettingKey::DbPort).expect("int"), 5433);
    }

    #[test]
    fn test_from_env_matches_process_environment() {
        let env = EnvOverrides::from_env();
        for key in SettingKey::ALL {
            let present = std::env::var(key.env()).map(|v| !v.is_empty()).unwrap_or(false);
            assert_eq!(env.is_set(key), present, "{key}");
        }
    }

    #[test]
    fn test_env_absent_values_are_sentinels() {
        let env = EnvOverrides::default();
        assert_eq!(env.string(SettingKey::DbAddress).expect("text"), "");
        assert_eq!(env.int(SettingKey::DbPort).expect("int"), 0);
    }

    #[test]
    fn test_env_ignores_empty_and_foreign_vars() {
        let env = EnvOverrides::from_vars([("GTS_DB_USER", ""), ("HOME", "/root")]);
        assert!(!env.is_set(SettingKey::DbUser));
        assert!(SettingKey::ALL.iter().all(|k| !env.is_set(*k)));
    }

    #[test]
    fn test_env_non_numeric_port_is_type_mismatch() {
        let env = EnvOverrides::from_vars([("GTS_DB_PORT", "fivefour")]);
        let err = env.int(SettingKey::DbPort).expect_err("mismatch");
        assert!(matches!(err, OverrideError::TypeMismatch { key: SettingKey::DbPort, .. }));
    }

    #[test]
    fn test_wrong_kind_request_is_rejected() {
        let env = EnvOverrides::from_vars([("GTS_LOG_LEVEL", "debug")]);
        assert!(matches!(
            env.int(SettingKey::LogLevel),
            Err(OverrideError::WrongKind { requested: SettingKind::Integer, .. })
        ));
        assert!(matches!(env.string(SettingKey::DbPort), Err(OverrideError::WrongKind { .. })));
    }

    #[test]
    fn test_layered_prefers_explicit_primary() {
        let flags = EnvOverrides::from_vars([("GTS_DB_PORT", "1111")]);
        let env = EnvOverrides::from_vars([("GTS_DB_PORT", "2222"), ("GTS_DB_USER", "gts")]);
        let layered = Layered::new(flags, env);

        assert_eq!(layered.int(SettingKey::DbPort).expect("int"), 1111);
        assert_eq!(layered.string(SettingKey::DbUser).expect("text"), "gts");
        assert!(layered.is_set(SettingKey::DbUser));
        assert!(!layered.is_set(SettingKey::DbAddress));
    }

    #[test]
    fn test_layered_falls_back_to_primary_defaults() {
        let env = EnvOverrides::from_vars([("GTS_DB_USER", "gts")]);
        let layered = Layered::new(RegistryDefaults, env);

        assert_eq!(layered.string(SettingKey::DbAddress).expect("text"), "localhost");
        assert_eq!(layered.int(SettingKey::DbPort).expect("int"), 5432);
        assert_eq!(layered.string(SettingKey::DbUser).expect("text"), "gts");
        assert!(!layered.is_set(SettingKey::DbAddress));
    }

    #[test]
    fn test_registry_defaults_never_explicit() {
        for key in SettingKey::ALL {
            assert!(!RegistryDefaults.is_set(key), "{key}");
        }
        assert_eq!(RegistryDefaults.string(SettingKey::ConfigPath).expect("text"), "");
    }
}
