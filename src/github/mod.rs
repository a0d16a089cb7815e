// GitHub API module.
// Provides the client and record types for the repository listing.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::GitHubClient;
pub use types::Repository;
