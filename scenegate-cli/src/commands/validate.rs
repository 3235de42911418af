//! Validate command - accept or reject a batch of scene identifiers.

use std::path::PathBuf;
use std::sync::Arc;

use scenegate::config::ConfigFile;
use scenegate::scene_id::SENTINEL1_SLC_PATTERN;

use crate::error::CliError;
use crate::runner::{CliRunner, GlobalOptions};

/// Arguments for the validate command.
pub struct ValidateArgs {
    pub scenes: Vec<String>,
    pub catalog_url: Option<String>,
    pub timeout: Option<u64>,
    pub coverage: Option<PathBuf>,
    pub name_pattern: Option<String>,
    pub strict_names: bool,
}

/// Run the validate command.
pub async fn run(options: &GlobalOptions, args: ValidateArgs) -> Result<(), CliError> {
    let mut runner = CliRunner::new(options)?;
    runner.log_startup("validate");

    apply_overrides(runner.config_mut(), &args)?;

    let coverage = Arc::new(runner.load_coverage()?);
    let engine = runner.create_engine(coverage)?;

    engine.validate(&args.scenes).await?;

    println!("OK: {} scene(s) found with DEM coverage", args.scenes.len());
    Ok(())
}

/// Applies CLI flags on top of the loaded config file.
///
/// Flags are held to the same rules as the matching INI keys.
fn apply_overrides(config: &mut ConfigFile, args: &ValidateArgs) -> Result<(), CliError> {
    if let Some(url) = &args.catalog_url {
        let url = url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(CliError::Config(format!(
                "--catalog-url '{}' must be an http:// or https:// URL",
                url
            )));
        }
        config.catalog.url = url.to_string();
    }
    if let Some(timeout) = args.timeout {
        if timeout == 0 {
            return Err(CliError::Config(
                "--timeout must be a positive number of seconds".to_string(),
            ));
        }
        config.catalog.timeout = timeout;
    }
    if let Some(path) = &args.coverage {
        config.coverage.file = Some(path.clone());
    }
    if args.strict_names {
        config.validation.name_pattern = Some(SENTINEL1_SLC_PATTERN.to_string());
    } else if let Some(pattern) = &args.name_pattern {
        config.validation.name_pattern = Some(pattern.clone());
    }
    Ok(())
}
