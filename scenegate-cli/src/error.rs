//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use scenegate::catalog::CatalogError;
use scenegate::config::ConfigFileError;
use scenegate::coverage::CoverageError;
use scenegate::validation::{ValidateError, ValidationFailure};

/// Exit code for a batch that was checked and rejected.
pub const EXIT_REJECTED: i32 = 2;

/// Exit code for configuration, coverage or catalog failures.
pub const EXIT_FAILURE: i32 = 1;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Failed to load the coverage map
    Coverage(CoverageError),
    /// Catalog lookup failed
    Catalog(CatalogError),
    /// Batch was rejected
    Rejected(ValidationFailure),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        if let CliError::Rejected(failure) = self {
            println!("REJECTED: {}", failure);
            process::exit(EXIT_REJECTED);
        }

        eprintln!("Error: {}", self);

        match self {
            CliError::Catalog(e) if e.is_unavailable() => {
                eprintln!();
                eprintln!("The scene catalog could not be reached. Check that:");
                eprintln!("  1. catalog.url in the config file points at a granule search endpoint");
                eprintln!("  2. The network allows outbound HTTPS to the catalog host");
                eprintln!("  3. catalog.timeout is long enough for large batches");
            }
            CliError::Catalog(CatalogError::BatchTooLarge { page_size, .. }) => {
                eprintln!();
                eprintln!(
                    "Split the batch into groups of at most {} scenes, or raise catalog.page_size.",
                    page_size
                );
            }
            CliError::Coverage(_) => {
                eprintln!();
                eprintln!("Remove coverage.file from the config file to use the bundled map.");
            }
            _ => {}
        }

        process::exit(EXIT_FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Coverage(e) => write!(f, "Failed to load DEM coverage map: {}", e),
            CliError::Catalog(e) => write!(f, "Scene catalog error: {}", e),
            CliError::Rejected(failure) => write!(f, "{}", failure),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Coverage(e) => Some(e),
            CliError::Catalog(e) => Some(e),
            CliError::Rejected(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<CoverageError> for CliError {
    fn from(e: CoverageError) -> Self {
        CliError::Coverage(e)
    }
}

impl From<CatalogError> for CliError {
    fn from(e: CatalogError) -> Self {
        CliError::Catalog(e)
    }
}

impl From<ValidateError> for CliError {
    fn from(e: ValidateError) -> Self {
        match e {
            ValidateError::Catalog(e) => CliError::Catalog(e),
            ValidateError::Rejected(failure) => CliError::Rejected(failure),
        }
    }
}
