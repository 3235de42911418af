//! Job-submission scene validation.
//!
//! The [`ValidationEngine`] gatekeeps processing jobs: given the scenes a
//! user asked for, it checks that each one exists in the catalog and that
//! its footprint intersects the DEM coverage map. Problems are collected
//! across the whole batch and returned together as a [`ValidationFailure`].
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use scenegate::catalog::{AsyncReqwestClient, CmrCatalog};
//! use scenegate::config::CatalogConfig;
//! use scenegate::coverage::load_coverage;
//! use scenegate::validation::{ValidateError, ValidationEngine};
//!
//! let coverage = Arc::new(load_coverage()?);
//! let config = CatalogConfig::default();
//! let catalog = CmrCatalog::new(AsyncReqwestClient::with_timeout(config.timeout())?, config);
//! let engine = ValidationEngine::new(catalog, coverage);
//!
//! match engine.validate(&scene_ids).await {
//!     Ok(()) => submit(scene_ids),
//!     Err(ValidateError::Rejected(failure)) => reject_request(failure.to_string()),
//!     Err(ValidateError::Catalog(e)) => service_unavailable(e),
//! }
//! ```

mod engine;
mod problem;

pub use engine::ValidationEngine;
pub use problem::{Problem, ProblemKind, ValidateError, ValidationFailure};
