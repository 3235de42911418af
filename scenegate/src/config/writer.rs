//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let coverage_file = config
        .coverage
        .file
        .as_ref()
        .map(|p| path_to_string(p))
        .unwrap_or_default();
    let name_pattern = config.validation.name_pattern.as_deref().unwrap_or("");

    format!(
        r#"[catalog]
; Scene catalog search endpoint (CMR granule search, JSON format)
url = {}
; Data provider queries are scoped to
provider = {}
; Accepted product types, comma separated
short_names = {}
; Request timeout in seconds
timeout = {}
; Entries requested per query (1-2000)
page_size = {}

[coverage]
; GeoJSON DEM coverage mask; leave empty to use the bundled map
file = {}

[validation]
; Optional regex every scene identifier must match before the catalog is queried
name_pattern = {}

[logging]
; Log file path
file = {}
"#,
        config.catalog.url,
        config.catalog.provider,
        config.catalog.short_names.join(","),
        config.catalog.timeout,
        config.catalog.page_size,
        coverage_file,
        name_pattern,
        path_to_string(&config.logging.file),
    )
}

fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().to_string()
}
