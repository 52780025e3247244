//! GitHub client - fetches and decodes the repository list

use async_trait::async_trait;
use reqwest::header::{ACCEPT, USER_AGENT};
use std::time::Duration;
use thiserror::Error;

use crate::constants;
use crate::models::{ListVariant, RepositoryRecord};

/// Why a repository list could not be obtained
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Connection, DNS or timeout failure
    #[error("Network error: {0}")]
    Network(String),
    /// Server answered with a non-success status
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
    /// Body is not a JSON array of repositories
    #[error("Could not read response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Status code for HTTP failures
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Network(String::from("request timed out (30s)"))
        } else if e.is_connect() {
            FetchError::Network(format!("connection failed: {}", e))
        } else {
            FetchError::Network(e.to_string())
        }
    }
}

/// Source of repository lists
#[async_trait]
pub trait RepositoryFetcher: Send + Sync {
    async fn fetch_repository_list(
        &self,
        address: &str,
        variant: ListVariant,
    ) -> Result<Vec<RepositoryRecord>, FetchError>;
}

/// Fetcher backed by the public GitHub REST API
#[derive(Clone)]
pub struct GitHubFetcher {
    client: reqwest::Client,
}

impl GitHubFetcher {
    pub fn new() -> Self {
        GitHubFetcher {
            client: create_client(),
        }
    }
}

impl Default for GitHubFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RepositoryFetcher for GitHubFetcher {
    async fn fetch_repository_list(
        &self,
        address: &str,
        variant: ListVariant,
    ) -> Result<Vec<RepositoryRecord>, FetchError> {
        let resp = self
            .client
            .get(address)
            .header(USER_AGENT, constants::USER_AGENT)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .await?;

        let status = resp.status().as_u16();
        let body = resp.text().await?;
        decode_repository_list(status, &body, variant)
    }
}

/// Turn a status code and body into a repository list.
///
/// Any 2xx status with a JSON array body is a success, including an empty
/// array. GitHub error bodies carry a `message` field which is surfaced when
/// present.
pub fn decode_repository_list(
    status: u16,
    body: &str,
    variant: ListVariant,
) -> Result<Vec<RepositoryRecord>, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Http {
            status,
            message: error_message(status, body),
        });
    }

    let records: Vec<RepositoryRecord> =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    Ok(variant.apply(records))
}

fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json.get("message")?.as_str().map(String::from))
        .unwrap_or_else(|| {
            reqwest::StatusCode::from_u16(status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("request failed")
                .to_string()
        })
}

/// Create an HTTP client with default configuration
pub fn create_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"[
        {
            "id": 1,
            "name": "folio",
            "html_url": "https://github.com/octocat/folio",
            "url": "https://api.github.com/repos/octocat/folio",
            "description": "Terminal portfolio",
            "created_at": "2023-04-01T10:00:00Z",
            "stargazers_count": 3
        },
        {
            "id": 2,
            "name": "dotfiles",
            "html_url": "https://github.com/octocat/dotfiles",
            "description": null,
            "created_at": "2021-01-01T00:00:00Z"
        }
    ]"#;

    #[test]
    fn test_decode_uses_html_url_and_drops_extra_fields() {
        let records = decode_repository_list(200, BODY, ListVariant::All).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "folio");
        assert_eq!(records[0].url, "https://github.com/octocat/folio");
        assert_eq!(records[0].description_text(), "Terminal portfolio");
        assert_eq!(records[1].description, None);
        assert_eq!(records[1].description_text(), "");
    }

    #[test]
    fn test_decode_empty_array_is_success() {
        let records = decode_repository_list(200, "[]", ListVariant::All).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_decode_not_found_is_http_error() {
        let body = r#"{"message":"Not Found","documentation_url":"https://docs.github.com"}"#;
        let err = decode_repository_list(404, body, ListVariant::All).unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "HTTP 404: Not Found");
    }

    #[test]
    fn test_decode_error_without_json_body_uses_reason() {
        let err = decode_repository_list(503, "<html>down</html>", ListVariant::All).unwrap_err();
        assert_eq!(
            err,
            FetchError::Http {
                status: 503,
                message: String::from("Service Unavailable"),
            }
        );
    }

    #[test]
    fn test_decode_rejects_non_array() {
        let err = decode_repository_list(200, r#"{"name":"x"}"#, ListVariant::All).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));

        let err = decode_repository_list(200, "not json", ListVariant::All).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn test_decode_latest_variant_sorts_and_truncates() {
        let body = serde_json::to_string(
            &(1..=7)
                .map(|day| {
                    serde_json::json!({
                        "name": format!("r{}", day),
                        "html_url": format!("https://github.com/o/r{}", day),
                        "description": null,
                        "created_at": format!("2022-03-0{}T12:00:00Z", day),
                    })
                })
                .collect::<Vec<_>>(),
        )
        .unwrap();

        let records = decode_repository_list(200, &body, ListVariant::LatestFive).unwrap();
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["r7", "r6", "r5", "r4", "r3"]);
    }
}
