//! Resource protocol operations
//!
//! - [`CheckCommand`]: discover new deployment versions
//! - [`InCommand`]: write one deployment version to a directory

pub mod check;
pub mod in_command;
pub mod metadata;
pub mod models;

pub use check::CheckCommand;
pub use in_command::InCommand;
pub use models::{CheckRequest, InRequest, InResponse, MetadataPair, Version};
