pub mod check;
pub mod input;

use deployment_resource::config::Source;
use deployment_resource::core::ResourceResult;
use deployment_resource::di::GitHubProvider;
use deployment_resource::github::GitHubClient;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{Read, Write};
use std::sync::Arc;

/// Read and decode the JSON request the orchestrator writes to stdin
pub fn read_request<T: DeserializeOwned>(mut reader: impl Read) -> ResourceResult<T> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    Ok(serde_json::from_str(&input)?)
}

/// Encode the response as JSON on stdout
pub fn write_response<T: Serialize>(mut writer: impl Write, response: &T) -> ResourceResult<()> {
    serde_json::to_writer(&mut writer, response)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Production GitHub provider for a source block
pub fn github_provider(source: &Source) -> ResourceResult<Arc<dyn GitHubProvider>> {
    Ok(Arc::new(GitHubClient::new(source)?))
}
