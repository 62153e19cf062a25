use crate::core::{ResourceError, ResourceResult};
use serde::{Deserialize, Serialize};

/// Default GitHub REST API endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Environment variable consulted when the source has no access token
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// The `source` block of a resource definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Source {
    /// Owner of the repository (user or organization)
    #[serde(default)]
    pub user: String,

    /// Repository name
    #[serde(default)]
    pub repository: String,

    /// Token used to authenticate against the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// API endpoint, for GitHub Enterprise installations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_api_url: Option<String>,

    /// Only deployments to these environments are tracked.
    /// Empty means every environment.
    #[serde(default)]
    pub environments: Vec<String>,
}

impl Source {
    /// Check that the fields needed to address a repository are set
    pub fn validate(&self) -> ResourceResult<()> {
        if self.user.trim().is_empty() {
            return Err(ResourceError::Config("source.user must be set".to_string()));
        }
        if self.repository.trim().is_empty() {
            return Err(ResourceError::Config("source.repository must be set".to_string()));
        }
        Ok(())
    }

    /// API base URL without a trailing slash
    pub fn api_url(&self) -> String {
        self.github_api_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string()
    }

    /// Access token from the source, falling back to `GITHUB_TOKEN`
    pub fn token(&self) -> Option<String> {
        self.access_token
            .clone()
            .filter(|t| !t.is_empty())
            .or_else(|| std::env::var(TOKEN_ENV_VAR).ok().filter(|t| !t.is_empty()))
    }

    /// Whether a deployment to `environment` should be tracked
    pub fn tracks_environment(&self, environment: Option<&str>) -> bool {
        if self.environments.is_empty() {
            return true;
        }
        match environment {
            Some(env) => self.environments.iter().any(|e| e == env),
            None => false,
        }
    }
}
