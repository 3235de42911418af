//! Default values and constants for all configuration settings.
//!
//! Contains all `DEFAULT_*` constants and the `ConfigFile::default()`
//! implementation.

use super::file::config_directory;
use super::settings::*;

// =============================================================================
// Catalog
// =============================================================================

/// Default catalog search endpoint (CMR granule search, JSON format).
pub const DEFAULT_CATALOG_URL: &str = "https://cmr.earthdata.nasa.gov/search/granules.json";

/// Default catalog provider.
pub const DEFAULT_CATALOG_PROVIDER: &str = "ASF";

/// Product types accepted for processing.
pub const DEFAULT_SHORT_NAMES: [&str; 2] = ["SENTINEL-1A_SLC", "SENTINEL-1B_SLC"];

/// Default catalog request timeout in seconds.
pub const DEFAULT_CATALOG_TIMEOUT_SECS: u64 = 30;

/// Default number of catalog entries requested per query.
pub const DEFAULT_PAGE_SIZE: usize = 2000;

/// Smallest accepted page size.
pub const MIN_PAGE_SIZE: usize = 1;

/// Largest page size the catalog will honor.
pub const MAX_PAGE_SIZE: usize = 2000;

/// Clamps the page size to the catalog's accepted range and logs a warning if clamped.
pub(super) fn clamp_page_size(value: usize) -> usize {
    if value < MIN_PAGE_SIZE {
        tracing::warn!(
            requested = value,
            min = MIN_PAGE_SIZE,
            "page_size below minimum, clamping to {}",
            MIN_PAGE_SIZE
        );
        MIN_PAGE_SIZE
    } else if value > MAX_PAGE_SIZE {
        tracing::warn!(
            requested = value,
            max = MAX_PAGE_SIZE,
            "page_size above maximum, clamping to {}",
            MAX_PAGE_SIZE
        );
        MAX_PAGE_SIZE
    } else {
        value
    }
}

// =============================================================================
// Logging
// =============================================================================

/// Default log file name.
pub const DEFAULT_LOG_FILE: &str = "scenegate.log";

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            catalog: CatalogSettings {
                url: DEFAULT_CATALOG_URL.to_string(),
                provider: DEFAULT_CATALOG_PROVIDER.to_string(),
                short_names: DEFAULT_SHORT_NAMES.iter().map(|s| s.to_string()).collect(),
                timeout: DEFAULT_CATALOG_TIMEOUT_SECS,
                page_size: DEFAULT_PAGE_SIZE,
            },
            coverage: CoverageSettings { file: None },
            validation: ValidationSettings { name_pattern: None },
            logging: LoggingSettings {
                file: config_directory().join("logs").join(DEFAULT_LOG_FILE),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_page_size_within_range() {
        assert_eq!(clamp_page_size(50), 50);
        assert_eq!(clamp_page_size(MIN_PAGE_SIZE), MIN_PAGE_SIZE);
        assert_eq!(clamp_page_size(MAX_PAGE_SIZE), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_clamp_page_size_out_of_range() {
        assert_eq!(clamp_page_size(0), MIN_PAGE_SIZE);
        assert_eq!(clamp_page_size(10_000), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_default_short_names() {
        let config = ConfigFile::default();
        assert_eq!(
            config.catalog.short_names,
            vec!["SENTINEL-1A_SLC", "SENTINEL-1B_SLC"]
        );
    }
}
