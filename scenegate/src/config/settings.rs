//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    /// Scene catalog settings
    pub catalog: CatalogSettings,
    /// DEM coverage map settings
    pub coverage: CoverageSettings,
    /// Validation settings
    pub validation: ValidationSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Scene catalog configuration.
#[derive(Debug, Clone)]
pub struct CatalogSettings {
    /// Catalog search endpoint
    pub url: String,
    /// Data provider the query is scoped to
    pub provider: String,
    /// Accepted product types
    pub short_names: Vec<String>,
    /// Request timeout in seconds
    pub timeout: u64,
    /// Entries requested per query
    pub page_size: usize,
}

/// DEM coverage configuration.
#[derive(Debug, Clone)]
pub struct CoverageSettings {
    /// GeoJSON file overriding the bundled coverage map
    pub file: Option<PathBuf>,
}

/// Validation configuration.
#[derive(Debug, Clone)]
pub struct ValidationSettings {
    /// Regex every scene identifier must match before the catalog is queried
    pub name_pattern: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}
