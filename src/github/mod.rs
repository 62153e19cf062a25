//! GitHub integration
//!
//! This module provides functionality for interacting with GitHub to:
//! - List a repository's deployments, with ETag-based conditional requests
//! - Fetch a single deployment
//! - Fetch a deployment's status history

pub mod client;
pub mod types;

pub use client::GitHubClient;
pub use types::{Deployment, DeploymentStatus, User};
