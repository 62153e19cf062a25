//! Trait definitions for dependency injection

use crate::core::ResourceResult;
use crate::github::types::{Deployment, DeploymentStatus};
use async_trait::async_trait;

/// Trait for GitHub deployment operations
///
/// Abstracts the GitHub API so commands can be exercised against
/// an in-memory implementation.
#[async_trait]
pub trait GitHubProvider: Send + Sync {
    /// List the repository's deployments.
    ///
    /// `prior_etag` is sent as a conditional-request validator. Returns the
    /// deployments together with the ETag of the response; when nothing
    /// changed since `prior_etag` the list is empty and the ETag equals it.
    async fn list_deployments(&self, prior_etag: &str)
        -> ResourceResult<(Vec<Deployment>, String)>;

    /// Get a single deployment, or `None` if it does not exist
    async fn get_deployment(&self, id: i64) -> ResourceResult<Option<Deployment>>;

    /// List a deployment's statuses, newest first
    async fn list_deployment_statuses(&self, id: i64) -> ResourceResult<Vec<DeploymentStatus>>;
}
