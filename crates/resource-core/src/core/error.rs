use thiserror::Error;

pub type ResourceResult<T> = Result<T, ResourceError>;

#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// The GitHub API answered with a non-success status.
    #[error("GitHub API error: HTTP {status}: {message}")]
    GitHub { status: u16, message: String },

    /// The requested deployment does not exist.
    #[error("no deployment")]
    NoDeployment,
}
