//! CLI argument parsing and execution

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use peribolos_builder::builder;

/// Peribolos config builder - merge org and team fragments into one org config
#[derive(Parser, Debug)]
#[command(name = "peribolos-builder")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Root directory holding one subdirectory per organization.
    #[arg(long, value_name = "DIR", env = "PERIBOLOS_CONFIG", default_value = "config")]
    config: PathBuf,

    /// Set log level (error, warn, info, debug, trace)
    ///
    /// `RUST_LOG` takes precedence when set.
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

impl Cli {
    /// Initialize `env_logger` on stderr so stdout only carries the document.
    pub fn init_logging(&self) {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(self.log_level.as_str()),
        )
        .format_timestamp_secs()
        .init();
    }

    /// Build the full config and print it to stdout.
    pub fn execute(self) -> Result<()> {
        let rendered = builder::build_yaml(&self.config)
            .with_context(|| format!("Failed to load orgs from {}", self.config.display()))?;

        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(rendered.as_bytes())
            .context("Failed to write org config")?;
        stdout.flush().context("Failed to write org config")?;
        Ok(())
    }
}
