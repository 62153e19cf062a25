//! End-to-end tests for the `check` and `in` scripts
//!
//! Each test runs the binary against a local mock of the GitHub API.

mod check;
mod input;
