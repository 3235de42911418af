//! CLI command implementations.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration file management (path, show, init)
//! - [`coverage`] - DEM coverage map summary
//! - [`validate`] - Accept or reject a batch of scenes

pub mod config;
pub mod coverage;
pub mod validate;
