//! CMR granule search client.
//!
//! Looks up a batch of scenes with a single form-encoded POST to the CMR
//! granule search endpoint:
//!
//! ```text
//! producer_granule_id=<id>   (repeated, one per requested scene)
//! provider=ASF
//! short_name=SENTINEL-1A_SLC (repeated, one per accepted product type)
//! page_size=<n>
//! ```
//!
//! The JSON response lists one `feed.entry[]` per scene found. Each entry
//! carries `polygons`, a list of footprints, each a list of ring strings in
//! `"lat lon lat lon ..."` order. Only the first ring of the first footprint
//! is used.

use std::collections::HashSet;

use serde::Deserialize;
use tracing::{debug, warn};

use super::http::AsyncHttpClient;
use super::types::{CatalogError, SceneCatalog, SceneMetadata};
use crate::config::CatalogConfig;
use crate::geometry::footprint_from_point_string;

#[derive(Debug, Deserialize)]
struct CmrResponse {
    feed: CmrFeed,
}

#[derive(Debug, Deserialize)]
struct CmrFeed {
    #[serde(default)]
    entry: Vec<CmrEntry>,
}

#[derive(Debug, Deserialize)]
struct CmrEntry {
    producer_granule_id: String,
    #[serde(default)]
    polygons: Vec<Vec<String>>,
}

impl CmrEntry {
    fn into_metadata(self) -> Result<SceneMetadata, CatalogError> {
        let ring = self
            .polygons
            .first()
            .and_then(|footprint| footprint.first())
            .ok_or_else(|| CatalogError::MissingFootprint {
                scene: self.producer_granule_id.clone(),
            })?;

        let footprint =
            footprint_from_point_string(ring).map_err(|source| CatalogError::MalformedGeometry {
                scene: self.producer_granule_id.clone(),
                source,
            })?;

        Ok(SceneMetadata {
            name: self.producer_granule_id,
            footprint,
        })
    }
}

/// Scene catalog backed by a CMR granule search endpoint.
pub struct CmrCatalog<C: AsyncHttpClient> {
    http_client: C,
    config: CatalogConfig,
}

impl<C: AsyncHttpClient> CmrCatalog<C> {
    /// Creates a catalog client.
    ///
    /// The request timeout is a property of `http_client`; build it from
    /// [`CatalogConfig::timeout`] to honor the configured value.
    pub fn new(http_client: C, config: CatalogConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// The configuration this client queries with.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Builds the form body for one batch query.
    fn form_params(&self, scene_ids: &[&str]) -> Vec<(String, String)> {
        let mut params: Vec<(String, String)> = scene_ids
            .iter()
            .map(|id| ("producer_granule_id".to_string(), id.to_string()))
            .collect();
        params.push(("provider".to_string(), self.config.provider().to_string()));
        params.extend(
            self.config
                .short_names()
                .iter()
                .map(|name| ("short_name".to_string(), name.clone())),
        );
        params.push((
            "page_size".to_string(),
            self.config.page_size().to_string(),
        ));
        params
    }
}

impl<C: AsyncHttpClient> SceneCatalog for CmrCatalog<C> {
    async fn query(&self, scene_ids: &[String]) -> Result<Vec<SceneMetadata>, CatalogError> {
        if scene_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut seen = HashSet::new();
        let distinct: Vec<&str> = scene_ids
            .iter()
            .map(String::as_str)
            .filter(|id| seen.insert(*id))
            .collect();

        // A truncated page would turn found scenes into missing ones
        if distinct.len() > self.config.page_size() {
            warn!(
                requested = distinct.len(),
                page_size = self.config.page_size(),
                "Batch does not fit in one catalog page"
            );
            return Err(CatalogError::BatchTooLarge {
                requested: distinct.len(),
                page_size: self.config.page_size(),
            });
        }

        let params = self.form_params(&distinct);
        debug!(
            url = self.config.url(),
            scenes = distinct.len(),
            "Querying scene catalog"
        );

        let body = self.http_client.post_form(self.config.url(), &params).await?;

        let response: CmrResponse = serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, bytes = body.len(), "Catalog response is not valid JSON");
            CatalogError::InvalidResponse(e.to_string())
        })?;

        let scenes = response
            .feed
            .entry
            .into_iter()
            .map(CmrEntry::into_metadata)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            requested = scene_ids.len(),
            found = scenes.len(),
            "Catalog query complete"
        );
        Ok(scenes)
    }
}
