//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This module contains the `parse_ini()` function and its helpers.
//! It is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use regex::Regex;
use std::path::PathBuf;

use super::defaults::clamp_page_size;
use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [catalog] section
    if let Some(section) = ini.section(Some("catalog")) {
        if let Some(v) = section.get("url") {
            let v = v.trim();
            if !(v.starts_with("http://") || v.starts_with("https://")) {
                return Err(invalid("catalog", "url", v, "must be an http:// or https:// URL"));
            }
            config.catalog.url = v.to_string();
        }
        if let Some(v) = section.get("provider") {
            let v = v.trim();
            if v.is_empty() {
                return Err(invalid("catalog", "provider", v, "must not be empty"));
            }
            config.catalog.provider = v.to_string();
        }
        if let Some(v) = section.get("short_names") {
            let names: Vec<String> = v
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            if names.is_empty() {
                return Err(invalid(
                    "catalog",
                    "short_names",
                    v,
                    "expected a comma-separated list of product types",
                ));
            }
            config.catalog.short_names = names;
        }
        if let Some(v) = section.get("timeout") {
            config.catalog.timeout = v
                .trim()
                .parse()
                .ok()
                .filter(|t| *t > 0)
                .ok_or_else(|| {
                    invalid("catalog", "timeout", v, "must be a positive integer (seconds)")
                })?;
        }
        if let Some(v) = section.get("page_size") {
            let size: usize = v
                .trim()
                .parse()
                .map_err(|_| invalid("catalog", "page_size", v, "must be a positive integer"))?;
            config.catalog.page_size = clamp_page_size(size);
        }
    }

    // [coverage] section
    if let Some(section) = ini.section(Some("coverage")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.coverage.file = Some(expand_tilde(v));
            }
        }
    }

    // [validation] section
    if let Some(section) = ini.section(Some("validation")) {
        if let Some(v) = section.get("name_pattern") {
            let v = v.trim();
            if !v.is_empty() {
                Regex::new(v).map_err(|e| {
                    invalid("validation", "name_pattern", v, &format!("invalid regex: {}", e))
                })?;
                config.validation.name_pattern = Some(v.to_string());
            }
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = expand_tilde(v);
            }
        }
    }

    Ok(config)
}

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Expand a leading `~/` to the user's home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::*;
    use tempfile::TempDir;

    fn load(content: &str) -> Result<ConfigFile, ConfigFileError> {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");
        std::fs::write(&config_path, content).unwrap();
        ConfigFile::load_from(&config_path)
    }

    #[test]
    fn test_catalog_section_overrides_defaults() {
        let config = load(
            r#"
[catalog]
url = https://cmr.uat.earthdata.nasa.gov/search/granules.json
provider = ASF
short_names = SENTINEL-1A_SLC, SENTINEL-1B_SLC, SENTINEL-1C_SLC
timeout = 10
page_size = 500
"#,
        )
        .unwrap();

        assert_eq!(
            config.catalog.url,
            "https://cmr.uat.earthdata.nasa.gov/search/granules.json"
        );
        assert_eq!(config.catalog.short_names.len(), 3);
        assert_eq!(config.catalog.short_names[2], "SENTINEL-1C_SLC");
        assert_eq!(config.catalog.timeout, 10);
        assert_eq!(config.catalog.page_size, 500);
    }

    #[test]
    fn test_missing_sections_keep_defaults() {
        let config = load("[logging]\n").unwrap();
        assert_eq!(config.catalog.url, DEFAULT_CATALOG_URL);
        assert_eq!(config.catalog.timeout, DEFAULT_CATALOG_TIMEOUT_SECS);
    }

    #[test]
    fn test_invalid_url() {
        let err = load("[catalog]\nurl = ftp://example.com\n").unwrap_err();
        assert!(err.to_string().contains("catalog.url"));
    }

    #[test]
    fn test_invalid_timeout() {
        let err = load("[catalog]\ntimeout = soon\n").unwrap_err();
        assert!(err.to_string().contains("positive integer"));

        assert!(load("[catalog]\ntimeout = 0\n").is_err());
    }

    #[test]
    fn test_empty_short_names() {
        let err = load("[catalog]\nshort_names = , ,\n").unwrap_err();
        assert!(matches!(err, ConfigFileError::InvalidValue { ref key, .. } if key == "short_names"));
    }

    #[test]
    fn test_page_size_is_clamped() {
        let config = load("[catalog]\npage_size = 99999\n").unwrap();
        assert_eq!(config.catalog.page_size, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_invalid_name_pattern() {
        let err = load("[validation]\nname_pattern = S1[AB\n").unwrap_err();
        assert!(err.to_string().contains("invalid regex"));
    }

    #[test]
    fn test_coverage_file_expands_tilde() {
        let config = load("[coverage]\nfile = ~/masks/dem.geojson\n").unwrap();
        let path = config.coverage.file.unwrap();
        assert!(path.ends_with("masks/dem.geojson"));
    }

    #[test]
    fn test_expand_tilde_leaves_absolute_paths() {
        assert_eq!(expand_tilde("/var/log/x.log"), PathBuf::from("/var/log/x.log"));
    }
}
