//! Core utilities shared by the GitHub deployment resource.
//!
//! Holds the error type every operation returns and the small set of
//! filesystem helpers used when materializing a version to disk.

pub mod core;

pub use crate::core::error::{ResourceError, ResourceResult};
