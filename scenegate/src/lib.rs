//! Scenegate - scene validation for processing job submission
//!
//! Before an expensive processing job is queued, every requested satellite
//! scene must exist in the scene catalog and fall inside the region covered
//! by auxiliary DEM data. This crate makes that accept/reject decision.
//!
//! # Modules
//!
//! - [`coverage`] - DEM coverage map, loaded once and shared read-only
//! - [`geometry`] - catalog footprint string parsing
//! - [`catalog`] - batched scene metadata lookup over HTTP
//! - [`validation`] - the validation engine and its outcome types
//! - [`scene_id`] - optional identifier syntax checks
//! - [`config`] - configuration file and component configs
//! - [`logging`] - tracing subscriber setup

pub mod catalog;
pub mod config;
pub mod coverage;
pub mod geometry;
pub mod logging;
pub mod scene_id;
pub mod validation;

/// Version of the scenegate library and CLI.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
