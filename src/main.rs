//! Metasync - a metadata synchronizer for static sites.

mod cli;
mod config;
mod logger;
mod rewrite;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{ConfigError, SiteConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    // Verbose gates debug! output, including config load diagnostics
    let Commands::Sync { args } = &cli.command;
    logger::set_verbose(args.verbose);

    let config = match SiteConfig::load(&cli) {
        Ok(config) => config,
        Err(err) => {
            // Missing/empty domain is the dedicated configuration error:
            // report and exit 2 before any file is touched.
            if matches!(
                err.downcast_ref::<ConfigError>(),
                Some(ConfigError::MissingDomain)
            ) {
                log!("error"; "{err}");
                std::process::exit(2);
            }
            return Err(err);
        }
    };

    match &cli.command {
        Commands::Sync { args } => cli::sync::run_sync(&config, args),
    }
}
