//! gotosocial: configuration core for the GoToSocial server
//!
//! Resolves one [`config::Config`] at start-up from compiled-in defaults, an
//! optional YAML or TOML file, and `GTS_*` environment variables or
//! command-line flags. The result is built once and then passed by reference
//! to whatever needs it.

pub mod cli;
pub mod config;
