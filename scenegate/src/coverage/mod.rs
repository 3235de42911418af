//! DEM coverage map.
//!
//! The [`CoverageMap`] is the set of regions where auxiliary elevation data
//! exists. A scene can only be processed if its footprint intersects at
//! least one coverage polygon.
//!
//! The map is loaded once from a GeoJSON resource (bundled by default, see
//! [`load_coverage`]) and shared read-only afterwards:
//!
//! ```
//! use std::sync::Arc;
//! use scenegate::coverage::load_coverage;
//!
//! let coverage = Arc::new(load_coverage().unwrap());
//! assert!(!coverage.is_empty());
//! ```

mod geojson;
mod map;

use std::path::PathBuf;

use thiserror::Error;

pub use map::{load_coverage, CoverageMap, BUNDLED_COVERAGE_GEOJSON};

/// Errors raised while loading a coverage map.
#[derive(Debug, Error)]
pub enum CoverageError {
    /// Coverage file could not be read
    #[error("failed to read coverage file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document is not valid JSON or does not have the expected shape
    #[error("invalid coverage GeoJSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The feature collection is empty
    #[error("coverage GeoJSON has no features")]
    NoFeatures,

    /// The first feature has no geometry
    #[error("first coverage feature has no geometry")]
    MissingGeometry,

    /// The first feature is not a polygon or multi-polygon
    #[error("unsupported coverage geometry type '{0}' (expected Polygon or MultiPolygon)")]
    UnsupportedGeometry(String),

    /// A vertex is missing a coordinate or is not finite
    #[error("invalid coverage position: {0}")]
    InvalidPosition(String),

    /// Normalization left no polygons
    #[error("coverage geometry is empty after normalization")]
    Empty,
}
