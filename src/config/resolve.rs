//! Apply runtime overrides onto a loaded configuration
//!
//! Per field: if the field is still empty, or the operator set the key
//! explicitly, the override source's value wins. Otherwise the value from the
//! file stays. A new setting must be added here and to
//! [`SettingKey::FIELDS`](crate::config::keys::SettingKey::FIELDS) together.

use crate::config::error::OverrideError;
use crate::config::keys::SettingKey;
use crate::config::overrides::OverrideSource;
use crate::config::Config;

pub fn apply_overrides(
    config: &mut Config,
    overrides: &dyn OverrideSource,
) -> Result<(), OverrideError> {
    // general
    resolve_text(&mut config.log_level, SettingKey::LogLevel, overrides)?;
    resolve_text(&mut config.application_name, SettingKey::ApplicationName, overrides)?;

    // db
    let db = &mut config.db;
    resolve_text(&mut db.db_type, SettingKey::DbType, overrides)?;
    resolve_text(&mut db.address, SettingKey::DbAddress, overrides)?;
    resolve_int(&mut db.port, SettingKey::DbPort, overrides)?;
    resolve_text(&mut db.user, SettingKey::DbUser, overrides)?;
    resolve_text(&mut db.password, SettingKey::DbPassword, overrides)?;
    resolve_text(&mut db.database, SettingKey::DbDatabase, overrides)?;

    Ok(())
}

fn resolve_text(
    field: &mut String,
    key: SettingKey,
    overrides: &dyn OverrideSource,
) -> Result<(), OverrideError> {
    let explicit = overrides.is_set(key);
    if field.is_empty() || explicit {
        *field = overrides.string(key)?;
        if key == SettingKey::DbPassword {
            tracing::trace!(setting = %key, explicit, "Resolved setting from overrides");
        } else {
            tracing::trace!(
                setting = %key,
                explicit,
                value = %field,
                "Resolved setting from overrides"
            );
        }
    }
    Ok(())
}

fn resolve_int(
    field: &mut i64,
    key: SettingKey,
    overrides: &dyn OverrideSource,
) -> Result<(), OverrideError> {
    let explicit = overrides.is_set(key);
    if *field == 0 || explicit {
        *field = overrides.int(key)?;
        tracing::trace!(
            setting = %key,
            explicit,
            value = *field,
            "Resolved setting from overrides"
        );
    }
    Ok(())
}
