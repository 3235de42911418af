//! Configuration for scenegate components.
//!
//! - [`ConfigFile`] is the user-facing INI file (`~/.scenegate/config.ini`),
//!   one settings struct per `[section]`.
//! - [`CatalogConfig`] is the component configuration handed to the catalog
//!   client, built from the file or directly in code.
//!
//! # Example
//!
//! ```
//! use scenegate::config::{CatalogConfig, ConfigFile};
//!
//! let file = ConfigFile::default();
//! let catalog = CatalogConfig::from(&file.catalog);
//! assert_eq!(catalog.timeout_secs(), 30);
//! ```

mod catalog;
mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use catalog::CatalogConfig;
pub use defaults::*;
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{
    CatalogSettings, ConfigFile, CoverageSettings, LoggingSettings, ValidationSettings,
};
