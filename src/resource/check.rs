use crate::config::Source;
use crate::core::ResourceResult;
use crate::di::GitHubProvider;
use crate::github::types::Deployment;
use crate::resource::models::{CheckRequest, Version};
use std::sync::Arc;
use tracing::{debug, info};

/// Discovers new deployment versions
pub struct CheckCommand {
    github: Arc<dyn GitHubProvider>,
}

impl CheckCommand {
    pub fn new(github: Arc<dyn GitHubProvider>) -> Self {
        Self { github }
    }

    /// Return the versions at or after `request.version`, oldest first.
    ///
    /// On the very first check (no prior version ID) only the newest
    /// deployment is returned.
    pub async fn run(&self, request: &CheckRequest) -> ResourceResult<Vec<Version>> {
        info!("getting deployments list");
        let (deployments, etag) = self.github.list_deployments(&request.version.etag).await?;

        if !etag.is_empty() && etag == request.version.etag {
            debug!(%etag, "deployments unchanged");
            return Ok(vec![request.version.clone()]);
        }

        let versions = select_versions(&request.source, &request.version, &deployments, &etag);
        debug!(count = versions.len(), "selected versions");
        Ok(versions)
    }
}

/// Pick the versions to report from an already-fetched deployment list
pub fn select_versions(
    source: &Source,
    prior: &Version,
    deployments: &[Deployment],
    etag: &str,
) -> Vec<Version> {
    let prior_id = prior.numeric_id();

    let mut ids: Vec<i64> = deployments
        .iter()
        .filter(|d| source.tracks_environment(d.environment()))
        .map(|d| d.id)
        .filter(|id| prior_id.map_or(true, |prior_id| *id >= prior_id))
        .collect();

    if ids.is_empty() {
        return Vec::new();
    }

    ids.sort();

    if prior.id.is_empty() {
        return ids
            .last()
            .map(|id| vec![Version::new(*id, etag)])
            .unwrap_or_default();
    }

    ids.into_iter().map(|id| Version::new(id, etag)).collect()
}
