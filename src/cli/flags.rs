//! Setting flags and the clap-backed override source.

use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches};

use crate::config::error::OverrideError;
use crate::config::keys::{SettingKey, SettingKind};
use crate::config::overrides::{ensure_kind, parse_int, OverrideSource};

/// One flag per registered setting, each with its `GTS_*` fallback.
///
/// Values are kept as text; integer settings are parsed on read so a bad
/// value surfaces as a configuration error rather than a usage error.
pub fn setting_args() -> Vec<Arg> {
    SettingKey::ALL
        .into_iter()
        .map(|key| {
            let arg = Arg::new(key.flag())
                .long(key.flag())
                .env(key.env())
                .help(key.help())
                .value_name(match key.kind() {
                    SettingKind::Text => "VALUE",
                    SettingKind::Integer => "NUMBER",
                })
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(String))
                .help_heading("Settings");
            match key.default_value() {
                Some(default) => arg.default_value(default),
                None => arg,
            }
        })
        .collect()
}

/// Override source over parsed command-line matches.
///
/// A setting counts as explicitly set when it came from the command line or
/// from its environment variable; flag defaults do not.
pub struct ClapOverrides<'a> {
    matches: &'a ArgMatches,
}

impl<'a> ClapOverrides<'a> {
    pub fn new(matches: &'a ArgMatches) -> Self {
        Self { matches }
    }

    fn raw(&self, key: SettingKey) -> Option<&'a String> {
        match self.matches.try_get_one::<String>(key.flag()) {
            Ok(value) => value,
            // The command is built from the registry; a miss means it was
            // assembled without `setting_args`.
            Err(err) => panic!("setting {key} is not declared on this command: {err}"),
        }
    }
}

impl OverrideSource for ClapOverrides<'_> {
    fn string(&self, key: SettingKey) -> Result<String, OverrideError> {
        ensure_kind(key, SettingKind::Text)?;
        Ok(self.raw(key).cloned().unwrap_or_default())
    }

    fn int(&self, key: SettingKey) -> Result<i64, OverrideError> {
        ensure_kind(key, SettingKind::Integer)?;
        self.raw(key).map_or(Ok(0), |raw| parse_int(key, raw))
    }

    fn is_set(&self, key: SettingKey) -> bool {
        matches!(
            self.matches.value_source(key.flag()),
            Some(ValueSource::CommandLine | ValueSource::EnvVariable)
        )
    }
}
