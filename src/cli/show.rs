//! `config show` and `config keys`

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use crate::config::{Config, SettingKey};

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,
}

pub fn show(config: &Config, args: &ShowArgs) -> Result<()> {
    let shown = config.redacted();
    let rendered = match args.format {
        OutputFormat::Yaml => serde_yaml::to_string(&shown).context("rendering config as YAML")?,
        OutputFormat::Json => {
            serde_json::to_string_pretty(&shown).context("rendering config as JSON")? + "\n"
        }
    };
    print!("{}", rendered);
    Ok(())
}

pub fn keys() {
    print!("{}", render_keys());
}

fn render_keys() -> String {
    let mut out = format!("{:<18} {:<20} {:<22} {}\n", "SETTING", "FLAG", "ENV", "DEFAULT");
    for key in SettingKey::ALL {
        out.push_str(&format!(
            "{:<18} {:<20} {:<22} {}\n",
            key.name(),
            format!("--{}", key.flag()),
            key.env(),
            key.default_value().unwrap_or("-")
        ));
    }
    out
}
