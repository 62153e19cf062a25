//! GitHub deployment resource
//!
//! A pipeline resource that tracks the deployments of a GitHub repository.
//! `check` reports new deployment IDs as versions and `in` writes a chosen
//! deployment's fields to disk for later steps to read.

pub use resource_core::{ResourceError, ResourceResult};

/// Core module re-exported from `resource-core`.
pub mod core {
    pub use resource_core::core::*;
}

/// Source configuration.
pub mod config;

/// GitHub API client and types.
pub mod github;

/// Dependency injection infrastructure.
pub mod di;

/// The `check` and `in` operations.
pub mod resource;
