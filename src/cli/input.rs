//! The `in` script: materialize a version into a directory

use super::{github_provider, read_request, write_response};
use deployment_resource::core::ResourceResult;
use deployment_resource::resource::{InCommand, InRequest};
use std::io;
use std::path::Path;

pub async fn run(dest_dir: &Path) -> ResourceResult<()> {
    let request: InRequest = read_request(io::stdin().lock())?;
    let github = github_provider(&request.source)?;

    let response = InCommand::new(github).run(dest_dir, &request).await?;

    write_response(io::stdout().lock(), &response)
}
