use crate::github::types::{Deployment, DeploymentStatus};
use crate::resource::models::MetadataPair;
use chrono::SecondsFormat;

/// Build the display metadata for a fetched deployment.
///
/// Empty or absent fields are skipped. `statuses` is newest first.
pub fn metadata_from_deployment(
    deployment: &Deployment,
    statuses: &[DeploymentStatus],
) -> Vec<MetadataPair> {
    let mut metadata = vec![MetadataPair::new("id", deployment.id.to_string())];

    let fields = [
        ("ref", deployment.ref_.as_deref()),
        ("sha", deployment.sha.as_deref()),
        ("task", deployment.task.as_deref()),
        ("environment", deployment.environment.as_deref()),
        ("description", deployment.description.as_deref()),
        (
            "creator",
            deployment.creator.as_ref().and_then(|c| c.login.as_deref()),
        ),
    ];
    for (name, value) in fields {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            metadata.push(MetadataPair::new(name, value));
        }
    }

    if let Some(created_at) = deployment.created_at {
        metadata.push(MetadataPair::new(
            "created_at",
            created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        ));
    }

    if let Some(latest) = statuses.first() {
        if let Some(state) = latest.state.as_deref().filter(|s| !s.is_empty()) {
            metadata.push(MetadataPair::new("status", state));
        }
        metadata.push(MetadataPair::new("status_count", statuses.len().to_string()));
    }

    metadata
}
