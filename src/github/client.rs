//! GitHub API client implementation

use crate::config::Source;
use crate::core::{ResourceError, ResourceResult};
use crate::di::traits::GitHubProvider;
use crate::github::types::{ApiErrorBody, Deployment, DeploymentStatus};
use async_trait::async_trait;
use reqwest::{header, Client as HttpClient, StatusCode};
use std::time::Duration;
use tracing::debug;

/// GitHub API client scoped to one repository
pub struct GitHubClient {
    http_client: HttpClient,
    api_url: String,
    owner: String,
    repo: String,
}

impl GitHubClient {
    /// Create a new GitHub client for the repository named by `source`
    pub fn new(source: &Source) -> ResourceResult<Self> {
        source.validate()?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("github-deployment-resource"),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        if let Some(token) = source.token() {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("token {}", token))
                    .map_err(|e| ResourceError::Config(format!("Invalid access token: {}", e)))?,
            );
        }

        let http_client = HttpClient::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http_client,
            api_url: source.api_url(),
            owner: source.user.clone(),
            repo: source.repository.clone(),
        })
    }

    fn deployments_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/deployments",
            self.api_url,
            urlencoding::encode(&self.owner),
            urlencoding::encode(&self.repo)
        )
    }

    /// List deployments, sending `prior_etag` as `If-None-Match`
    pub async fn list_deployments(
        &self,
        prior_etag: &str,
    ) -> ResourceResult<(Vec<Deployment>, String)> {
        let url = self.deployments_url();
        debug!(%url, prior_etag, "listing deployments");

        let mut request = self.http_client.get(&url).query(&[("per_page", "100")]);
        if !prior_etag.is_empty() {
            request = request.header(header::IF_NONE_MATCH, prior_etag);
        }
        let response = request.send().await?;

        if response.status() == StatusCode::NOT_MODIFIED {
            debug!("deployments not modified");
            return Ok((Vec::new(), prior_etag.to_string()));
        }

        let response = Self::check_status(response).await?;
        let etag = response
            .headers()
            .get(header::ETAG)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let deployments: Vec<Deployment> = response.json().await?;

        debug!(count = deployments.len(), %etag, "listed deployments");
        Ok((deployments, etag))
    }

    /// Get a single deployment; a 404 is reported as `None`
    pub async fn get_deployment(&self, id: i64) -> ResourceResult<Option<Deployment>> {
        let url = format!("{}/{}", self.deployments_url(), id);
        debug!(%url, "getting deployment");

        let response = self.http_client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = Self::check_status(response).await?;
        Ok(Some(response.json().await?))
    }

    /// List statuses of a deployment, newest first
    pub async fn list_deployment_statuses(
        &self,
        id: i64,
    ) -> ResourceResult<Vec<DeploymentStatus>> {
        let url = format!("{}/{}/statuses", self.deployments_url(), id);
        debug!(%url, "listing deployment statuses");

        let response = self
            .http_client
            .get(&url)
            .query(&[("per_page", "100")])
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Turn a non-success response into a `GitHub` error
    async fn check_status(response: reqwest::Response) -> ResourceResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|b| b.message)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("unexpected response")
                    .to_string()
            });

        Err(ResourceError::GitHub {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl GitHubProvider for GitHubClient {
    async fn list_deployments(
        &self,
        prior_etag: &str,
    ) -> ResourceResult<(Vec<Deployment>, String)> {
        Self::list_deployments(self, prior_etag).await
    }

    async fn get_deployment(&self, id: i64) -> ResourceResult<Option<Deployment>> {
        Self::get_deployment(self, id).await
    }

    async fn list_deployment_statuses(&self, id: i64) -> ResourceResult<Vec<DeploymentStatus>> {
        Self::list_deployment_statuses(self, id).await
    }
}
