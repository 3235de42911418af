//! Catalog types and traits

use std::future::Future;

use geo::Polygon;
use thiserror::Error;

use crate::geometry::GeometryError;

/// Errors that can occur while querying the scene catalog.
///
/// Every variant aborts the whole batch; none of them says anything about
/// whether the requested scenes are valid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// HTTP client could not be built
    #[error("failed to create catalog HTTP client: {0}")]
    Client(String),

    /// Transport-level failure (connect, timeout, body read)
    #[error("catalog request failed: {0}")]
    Unavailable(String),

    /// Catalog answered with a non-success status
    #[error("catalog returned HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// Batch has more distinct scenes than fit in one result page
    #[error("batch of {requested} scenes exceeds the catalog page size of {page_size}")]
    BatchTooLarge { requested: usize, page_size: usize },

    /// Response body is not the expected JSON document
    #[error("invalid catalog response: {0}")]
    InvalidResponse(String),

    /// Catalog entry lists no footprint polygon
    #[error("catalog entry {scene} has no footprint polygon")]
    MissingFootprint { scene: String },

    /// Catalog entry footprint could not be decoded
    #[error("catalog entry {scene} has a malformed footprint: {source}")]
    MalformedGeometry {
        scene: String,
        #[source]
        source: GeometryError,
    },
}

impl CatalogError {
    /// True for failures reaching the catalog, as opposed to bad catalog data.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            Self::Client(_) | Self::Unavailable(_) | Self::Status { .. }
        )
    }
}

/// Catalog metadata for one scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneMetadata {
    /// Scene identifier as reported by the catalog
    pub name: String,
    /// Ground footprint in `(lon, lat)` order
    pub footprint: Polygon<f64>,
}

/// A source of scene metadata.
///
/// Implementors look up a whole batch of identifiers in one call and
/// return one entry per scene found. Scenes that do not exist are simply
/// absent from the result.
pub trait SceneCatalog: Send + Sync {
    /// Looks up metadata for every identifier in `scene_ids`.
    fn query(
        &self,
        scene_ids: &[String],
    ) -> impl Future<Output = Result<Vec<SceneMetadata>, CatalogError>> + Send;
}
