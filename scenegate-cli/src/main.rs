//! Scenegate CLI - Command-line interface
//!
//! This binary checks whether a batch of satellite scenes can be submitted
//! for processing: every scene must exist in the catalog and intersect the
//! DEM coverage map.

mod commands;
mod error;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::config::ConfigCommands;
use commands::validate::ValidateArgs;
use runner::GlobalOptions;

#[derive(Parser)]
#[command(name = "scenegate")]
#[command(version, about = "Validate satellite scenes for processing job submission", long_about = None)]
struct Cli {
    /// Config file (default: ~/.scenegate/config.ini)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Mirror log output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug-level logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that scenes exist in the catalog and have DEM coverage
    ///
    /// Exits 0 when every scene is accepted, 2 when the batch is rejected,
    /// and 1 when the check could not be performed.
    Validate {
        /// Scene identifiers (e.g. S1A_IW_SLC__1SDV_...)
        #[arg(required = true)]
        scenes: Vec<String>,

        /// Catalog search endpoint
        #[arg(long)]
        catalog_url: Option<String>,

        /// Catalog request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// GeoJSON coverage map overriding the configured one
        #[arg(long)]
        coverage: Option<PathBuf>,

        /// Regex every scene identifier must match
        #[arg(long, conflicts_with = "strict_names")]
        name_pattern: Option<String>,

        /// Require Sentinel-1 IW SLC product names
        #[arg(long)]
        strict_names: bool,
    },

    /// Summarize the DEM coverage map
    Coverage {
        /// GeoJSON coverage map overriding the configured one
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let options = GlobalOptions {
        config: cli.config,
        verbose: cli.verbose,
        debug: cli.debug,
    };

    let result = match cli.command {
        Commands::Validate {
            scenes,
            catalog_url,
            timeout,
            coverage,
            name_pattern,
            strict_names,
        } => {
            commands::validate::run(
                &options,
                ValidateArgs {
                    scenes,
                    catalog_url,
                    timeout,
                    coverage,
                    name_pattern,
                    strict_names,
                },
            )
            .await
        }
        Commands::Coverage { file } => commands::coverage::run(&options, file),
        Commands::Config(command) => commands::config::run(options.config.as_deref(), command),
    };

    if let Err(e) = result {
        e.exit();
    }
}
