//! gotosocial: resolve and inspect server configuration
//!
//! Merges compiled-in defaults, an optional config file, and flag or
//! environment overrides into a single configuration.

use anyhow::Result;

fn main() -> Result<()> {
    gotosocial::cli::run()
}
