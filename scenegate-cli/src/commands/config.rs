//! Configuration management CLI commands.
//!
//! Provides `config path`, `config show` and `config init` for viewing and
//! creating the configuration file.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use scenegate::config::{config_file_path, ConfigFile};

use crate::error::CliError;
use crate::runner::load_config;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the configuration file path
    Path,

    /// Print the effective configuration as INI
    Show,

    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Run a config subcommand.
pub fn run(config_path: Option<&Path>, command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Path => run_path(config_path),
        ConfigCommands::Show => run_show(config_path),
        ConfigCommands::Init { force } => run_init(config_path, force),
    }
}

fn target_path(config_path: Option<&Path>) -> PathBuf {
    config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(config_file_path)
}

/// Show the configuration file path.
fn run_path(config_path: Option<&Path>) -> Result<(), CliError> {
    let path = target_path(config_path);
    println!("{}", path.display());
    if !path.exists() {
        println!("(file does not exist; defaults are in effect)");
    }
    Ok(())
}

/// Print the effective configuration.
fn run_show(config_path: Option<&Path>) -> Result<(), CliError> {
    let config = load_config(config_path)?;
    print!("{}", config.to_ini_string());
    Ok(())
}

/// Write the default configuration.
fn run_init(config_path: Option<&Path>, force: bool) -> Result<(), CliError> {
    let path = target_path(config_path);
    if path.exists() && !force {
        return Err(CliError::Config(format!(
            "'{}' already exists (use --force to overwrite)",
            path.display()
        )));
    }

    ConfigFile::default().save_to(&path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}
