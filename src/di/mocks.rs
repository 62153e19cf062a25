//! Mock implementations of service traits for testing

use super::traits::GitHubProvider;
use crate::core::{ResourceError, ResourceResult};
use crate::github::types::{Deployment, DeploymentStatus};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock GitHub provider for testing
///
/// Serves deployments and statuses from memory and records the calls it
/// receives.
///
/// # Example
///
/// ```
/// use deployment_resource::di::mocks::MockGitHubProvider;
/// use deployment_resource::github::Deployment;
///
/// let github = MockGitHubProvider::new();
/// github.set_deployments(vec![Deployment::new(1), Deployment::new(2)], "etag-1");
/// ```
#[derive(Clone, Default)]
pub struct MockGitHubProvider {
    deployments: Arc<Mutex<Vec<Deployment>>>,
    etag: Arc<Mutex<String>>,
    statuses: Arc<Mutex<HashMap<i64, Vec<DeploymentStatus>>>>,
    failures: Arc<Mutex<HashMap<&'static str, String>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockGitHubProvider {
    /// Create a new mock GitHub provider with no deployments
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the deployment list and the ETag returned with it
    pub fn set_deployments(&self, deployments: Vec<Deployment>, etag: &str) {
        *self.deployments.lock().unwrap() = deployments;
        *self.etag.lock().unwrap() = etag.to_string();
    }

    /// Add a single deployment
    pub fn add_deployment(&self, deployment: Deployment) {
        self.deployments.lock().unwrap().push(deployment);
    }

    /// Set the statuses of a deployment (newest first)
    pub fn set_statuses(&self, id: i64, statuses: Vec<DeploymentStatus>) {
        self.statuses.lock().unwrap().insert(id, statuses);
    }

    /// Make every subsequent call fail with `message`
    pub fn fail_with(&self, message: &str) {
        self.fail_call("*", message);
    }

    /// Make subsequent calls of `method` (e.g. `"list_deployment_statuses"`)
    /// fail with `message`
    pub fn fail_call(&self, method: &'static str, message: &str) {
        self.failures
            .lock()
            .unwrap()
            .insert(method, message.to_string());
    }

    /// Calls received so far, e.g. `list_deployments(abc)`
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, method: &'static str, arg: impl std::fmt::Display) -> ResourceResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{}({})", method, arg));
        let failures = self.failures.lock().unwrap();
        match failures.get(method).or_else(|| failures.get("*")) {
            Some(message) => Err(ResourceError::GitHub {
                status: 500,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl GitHubProvider for MockGitHubProvider {
    async fn list_deployments(
        &self,
        prior_etag: &str,
    ) -> ResourceResult<(Vec<Deployment>, String)> {
        self.record("list_deployments", prior_etag)?;
        let etag = self.etag.lock().unwrap().clone();
        if !etag.is_empty() && etag == prior_etag {
            return Ok((Vec::new(), etag));
        }
        Ok((self.deployments.lock().unwrap().clone(), etag))
    }

    async fn get_deployment(&self, id: i64) -> ResourceResult<Option<Deployment>> {
        self.record("get_deployment", id)?;
        Ok(self
            .deployments
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.id == id)
            .cloned())
    }

    async fn list_deployment_statuses(&self, id: i64) -> ResourceResult<Vec<DeploymentStatus>> {
        self.record("list_deployment_statuses", id)?;
        Ok(self
            .statuses
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .unwrap_or_default())
    }
}
