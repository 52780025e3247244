//! Network layer - repository list fetching
//!
//! The Network actor receives fetch commands and sends back results.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
pub use client::{FetchError, GitHubFetcher, RepositoryFetcher};
