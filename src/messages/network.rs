//! Network messages - communication between App and Network layers

use crate::models::{ListVariant, RepositoryRecord};
use crate::network::client::FetchError;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkCommand {
    /// Fetch the repository list at `address`
    FetchRepositories {
        id: u64,
        address: String,
        variant: ListVariant,
    },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkResponse {
    Repositories {
        id: u64,
        result: Result<Vec<RepositoryRecord>, FetchError>,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Repositories { id, .. } => *id,
        }
    }
}
