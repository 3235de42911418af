//! Scene catalog client.
//!
//! This module looks up scene existence and footprints in an external
//! catalog. [`SceneCatalog`] is the seam the validation engine depends on;
//! [`CmrCatalog`] implements it against a CMR granule search endpoint.
//!
//! ```ignore
//! use scenegate::catalog::{AsyncReqwestClient, CmrCatalog};
//! use scenegate::config::CatalogConfig;
//!
//! let config = CatalogConfig::default();
//! let http_client = AsyncReqwestClient::with_timeout(config.timeout())?;
//! let catalog = CmrCatalog::new(http_client, config);
//! let scenes = catalog.query(&scene_ids).await?;
//! ```

mod cmr;
mod http;
mod types;

pub use cmr::CmrCatalog;
pub use http::{AsyncHttpClient, AsyncReqwestClient};
pub use types::{CatalogError, SceneCatalog, SceneMetadata};

#[cfg(test)]
pub use http::tests::{MockAsyncHttpClient, RecordedRequest};
