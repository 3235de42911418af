//! CLI runner for common setup and operations.
//!
//! Encapsulates config loading, logging initialization, and construction of
//! the coverage map and validation engine to reduce duplication across
//! command handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use scenegate::catalog::{AsyncReqwestClient, CmrCatalog};
use scenegate::config::{CatalogConfig, ConfigFile};
use scenegate::coverage::{load_coverage, CoverageMap};
use scenegate::logging::{init_logging, LoggingGuard};
use scenegate::scene_id::NamePattern;
use scenegate::validation::ValidationEngine;
use tracing::info;

use crate::error::CliError;

/// Global options shared by every command.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Explicit config file path
    pub config: Option<PathBuf>,
    /// Mirror logs to stderr
    pub verbose: bool,
    /// Force debug-level logging
    pub debug: bool,
}

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
}

impl CliRunner {
    /// Create a new CLI runner, loading config and initializing logging.
    pub fn new(options: &GlobalOptions) -> Result<Self, CliError> {
        let config = load_config(options.config.as_deref())?;

        let log_path = &config.logging.file;
        let log_dir = log_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let log_file = log_path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| scenegate::logging::default_log_file().to_string());

        let logging_guard = init_logging(&log_dir, &log_file, options.verbose, options.debug)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Log startup information.
    pub fn log_startup(&self, command: &str) {
        info!(
            version = scenegate::VERSION,
            command = command,
            log_file = %self.config.logging.file.display(),
            "scenegate starting"
        );
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Get a mutable reference to the configuration for CLI overrides.
    pub fn config_mut(&mut self) -> &mut ConfigFile {
        &mut self.config
    }

    /// Load the coverage map: the configured file if set, else the bundled map.
    pub fn load_coverage(&self) -> Result<CoverageMap, CliError> {
        let map = match &self.config.coverage.file {
            Some(path) => {
                info!(path = %path.display(), "Loading DEM coverage map from file");
                CoverageMap::from_path(path)?
            }
            None => load_coverage()?,
        };
        Ok(map)
    }

    /// Build a validation engine over the configured CMR catalog.
    pub fn create_engine(
        &self,
        coverage: Arc<CoverageMap>,
    ) -> Result<ValidationEngine<CmrCatalog<AsyncReqwestClient>>, CliError> {
        let catalog_config = CatalogConfig::from(&self.config.catalog);
        let http_client = AsyncReqwestClient::with_timeout(catalog_config.timeout())?;
        let engine = ValidationEngine::new(CmrCatalog::new(http_client, catalog_config), coverage);

        match &self.config.validation.name_pattern {
            Some(pattern) => {
                let pattern = NamePattern::new(pattern).map_err(|e| {
                    CliError::Config(format!("invalid validation.name_pattern: {}", e))
                })?;
                Ok(engine.with_name_pattern(pattern))
            }
            None => Ok(engine),
        }
    }
}

/// Load the config file from an explicit path or the default location.
pub fn load_config(path: Option<&Path>) -> Result<ConfigFile, CliError> {
    let config = match path {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::Config(format!(
                    "config file '{}' does not exist",
                    path.display()
                )));
            }
            ConfigFile::load_from(path)?
        }
        None => ConfigFile::load()?,
    };
    Ok(config)
}
