//! Catalog client configuration.

use std::time::Duration;

use super::defaults::{
    clamp_page_size, DEFAULT_CATALOG_PROVIDER, DEFAULT_CATALOG_TIMEOUT_SECS, DEFAULT_CATALOG_URL,
    DEFAULT_PAGE_SIZE, DEFAULT_SHORT_NAMES,
};
use super::settings::CatalogSettings;

/// Configuration for scene catalog queries.
///
/// Groups the endpoint and the fixed query scope (provider and accepted
/// product types) used for every batch lookup.
///
/// # Example
///
/// ```
/// use scenegate::config::CatalogConfig;
///
/// let config = CatalogConfig::default();
/// assert_eq!(config.provider(), "ASF");
/// assert_eq!(config.short_names().len(), 2);
///
/// let config = CatalogConfig::new()
///     .with_url("http://localhost:3003/granules.json")
///     .with_timeout_secs(5);
/// assert_eq!(config.timeout_secs(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    url: String,
    provider: String,
    short_names: Vec<String>,
    page_size: usize,
    timeout_secs: u64,
}

impl CatalogConfig {
    /// Create a new catalog configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the catalog search endpoint.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the provider queries are scoped to. Default: `ASF`.
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    /// Set the accepted product types.
    pub fn with_short_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.short_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set how many entries are requested per query. Default: 2000.
    ///
    /// Clamped to `1..=2000`. A batch with more distinct scenes than this
    /// is refused rather than truncated.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = clamp_page_size(page_size);
        self
    }

    /// Set the request timeout in seconds. Default: 30 seconds.
    pub fn with_timeout_secs(mut self, timeout: u64) -> Self {
        self.timeout_secs = timeout;
        self
    }

    /// Get the catalog search endpoint.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the provider.
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Get the accepted product types.
    pub fn short_names(&self) -> &[String] {
        &self.short_names
    }

    /// Get the page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Get the request timeout in seconds.
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    /// Get the request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_CATALOG_URL.to_string(),
            provider: DEFAULT_CATALOG_PROVIDER.to_string(),
            short_names: DEFAULT_SHORT_NAMES.iter().map(|s| s.to_string()).collect(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout_secs: DEFAULT_CATALOG_TIMEOUT_SECS,
        }
    }
}

impl From<&CatalogSettings> for CatalogConfig {
    fn from(settings: &CatalogSettings) -> Self {
        Self {
            url: settings.url.clone(),
            provider: settings.provider.clone(),
            short_names: settings.short_names.clone(),
            page_size: clamp_page_size(settings.page_size),
            timeout_secs: settings.timeout,
        }
    }
}
