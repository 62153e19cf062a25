//! Dependency injection infrastructure
//!
//! Commands depend on [`GitHubProvider`] rather than on the HTTP client, so
//! tests can substitute [`mocks::MockGitHubProvider`].
//!
//! # Example (Testing)
//! ```
//! use deployment_resource::di::{mocks::MockGitHubProvider, GitHubProvider};
//! use std::sync::Arc;
//!
//! let github: Arc<dyn GitHubProvider> = Arc::new(MockGitHubProvider::new());
//! ```

pub mod mocks;
pub mod traits;

pub use traits::GitHubProvider;
