use super::{github_provider, read_request, write_response};
use deployment_resource::core::ResourceResult;
use deployment_resource::resource::{CheckCommand, CheckRequest};
use std::io;

pub async fn run() -> ResourceResult<()> {
    let request: CheckRequest = read_request(io::stdin().lock())?;
    let github = github_provider(&request.source)?;

    let versions = CheckCommand::new(github).run(&request).await?;

    write_response(io::stdout().lock(), &versions)
}
