//! Command-line interface for gotosocial
//!
//! Settings flags sit on the top-level command (`gotosocial --db-port 5433
//! config show`) and are generated from the setting key registry.

use anyhow::{Context, Result};
use clap::{Command, CommandFactory, FromArgMatches, Parser, Subcommand};
use clap_complete::Shell;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub mod flags;
mod show;

use crate::config::{build_config, Config};
use flags::{setting_args, ClapOverrides};

/// GoToSocial server configuration
#[derive(Parser)]
#[command(name = "gotosocial")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Resolve the configuration and print it (secrets masked)
    Show(show::ShowArgs),

    /// List every setting with its flag, environment variable and default
    Keys,
}

/// The full command, including the generated settings flags.
pub fn command() -> Command {
    Cli::command().args(setting_args())
}

pub fn run() -> Result<()> {
    let matches = command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    match cli.command {
        Commands::Config(ConfigCommand::Show(args)) => {
            let config = resolve(&matches, cli.verbose)?;
            show::show(&config, &args)
        }
        Commands::Config(ConfigCommand::Keys) => {
            show::keys();
            Ok(())
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut command(), "gotosocial", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Resolve the configuration, then install logging at the resolved level.
///
/// Resolution itself logs through a temporary subscriber driven only by
/// `RUST_LOG` and `--verbose`.
fn resolve(matches: &clap::ArgMatches, verbose: bool) -> Result<Config> {
    let overrides = ClapOverrides::new(matches);
    let (bootstrap, _) = log_filter(verbose, None);
    let config = tracing::subscriber::with_default(subscriber(bootstrap), || {
        build_config(&overrides)
    })
    .context("error creating config")?;

    let (filter, unrecognised) = log_filter(verbose, Some(&config.log_level));
    let _ = subscriber(filter).try_init();
    if unrecognised {
        tracing::warn!("Unrecognised log level {:?}, using info", config.log_level);
    }
    tracing::debug!(application_name = %config.application_name, "Configuration ready");
    Ok(config)
}

fn subscriber(filter: EnvFilter) -> impl tracing::Subscriber + Send + Sync {
    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)).with(filter)
}

/// `RUST_LOG` always wins; then `--verbose`; then the configured level.
///
/// The second value is true when `log_level` was given but not understood.
fn log_filter(verbose: bool, log_level: Option<&str>) -> (EnvFilter, bool) {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return (filter, false);
    }
    if verbose {
        return (EnvFilter::default().add_directive(LevelFilter::DEBUG.into()), false);
    }
    let (level, unrecognised) = match log_level {
        None => (LevelFilter::WARN, false),
        Some(name) => match level_from_name(name) {
            Some(level) => (level, false),
            None => (LevelFilter::INFO, true),
        },
    };
    (EnvFilter::default().add_directive(level.into()), unrecognised)
}

fn level_from_name(name: &str) -> Option<LevelFilter> {
    match name.trim().to_ascii_lowercase().as_str() {
        "" => Some(LevelFilter::INFO),
        "fatal" | "panic" => Some(LevelFilter::ERROR),
        "warning" => Some(LevelFilter::WARN),
        other => other.parse().ok(),
    }
}
