use crate::core::path::{ensure_dir, write_file};
use crate::core::{ResourceError, ResourceResult};
use crate::di::GitHubProvider;
use crate::resource::metadata::metadata_from_deployment;
use crate::resource::models::{InRequest, InResponse, Version};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Names of the files `in` writes into the destination directory
pub mod files {
    pub const ID: &str = "id";
    pub const REF: &str = "ref";
    pub const SHA: &str = "sha";
    pub const TASK: &str = "task";
    pub const ENVIRONMENT: &str = "environment";
    pub const DESCRIPTION: &str = "description";
    pub const DEPLOYMENT_JSON: &str = "deploymentJSON";
}

/// Materializes one deployment version onto disk
pub struct InCommand {
    github: Arc<dyn GitHubProvider>,
}

impl InCommand {
    pub fn new(github: Arc<dyn GitHubProvider>) -> Self {
        Self { github }
    }

    /// Fetch the deployment named by `request.version` and write it to `dest_dir`.
    ///
    /// Files are written one at a time; an error part way through leaves the
    /// files written so far in place.
    pub async fn run(&self, dest_dir: &Path, request: &InRequest) -> ResourceResult<InResponse> {
        ensure_dir(dest_dir)?;

        let id = request.version.id.parse::<i64>().unwrap_or_else(|e| {
            warn!(id = %request.version.id, error = %e, "invalid version id, using 0");
            0
        });

        info!("getting deployment");
        let deployment = self
            .github
            .get_deployment(id)
            .await?
            .ok_or(ResourceError::NoDeployment)?;

        write_file(dest_dir, files::ID, &request.version.id)?;
        write_file(dest_dir, files::REF, deployment.ref_.as_deref().unwrap_or_default())?;
        write_file(dest_dir, files::SHA, deployment.sha.as_deref().unwrap_or_default())?;

        let optional = [
            (files::TASK, &deployment.task),
            (files::ENVIRONMENT, &deployment.environment),
            (files::DESCRIPTION, &deployment.description),
        ];
        for (name, value) in optional {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                write_file(dest_dir, name, value)?;
            }
        }

        let json = serde_json::to_vec(&deployment)?;
        write_file(dest_dir, files::DEPLOYMENT_JSON, json)?;
        debug!(dest = %dest_dir.display(), "wrote deployment files");

        info!("getting deployment statuses list");
        let statuses = self.github.list_deployment_statuses(deployment.id).await?;
        let latest_status = statuses
            .first()
            .and_then(|s| s.state.clone())
            .unwrap_or_default();

        Ok(InResponse {
            version: Version {
                id: deployment.id.to_string(),
                etag: String::new(),
                statuses: latest_status,
            },
            metadata: metadata_from_deployment(&deployment, &statuses),
        })
    }
}
