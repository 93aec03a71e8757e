// ABOUTME: Library root for rill - exposes the orchestration core and its collaborators.
// ABOUTME: The CLI binary is in main.rs.

pub mod backend;
pub mod config;
pub mod error;
pub mod orchestrate;
pub mod output;
pub mod release;
pub mod stream;
pub mod types;
