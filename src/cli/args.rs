//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Metasync static-site metadata synchronizer CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Project root directory containing the site files
    #[arg(short, long, default_value = ".", value_hint = clap::ValueHint::DirPath)]
    pub root: PathBuf,

    /// Config file path (default: site.json at the project root,
    /// or the SITE_JSON environment variable)
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Rewrite pages, feed, sitemap and robots to the configured domain
    #[command(visible_alias = "s")]
    Sync {
        #[command(flatten)]
        args: SyncArgs,
    },
}

/// Sync command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct SyncArgs {
    /// Report files that would change without writing anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

#[allow(unused)]
impl Cli {
    pub const fn is_sync(&self) -> bool {
        matches!(self.command, Commands::Sync { .. })
    }
}
