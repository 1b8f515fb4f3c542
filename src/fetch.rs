use crate::domain::{DeliveryRecord, RawDelivery, StatsSnapshot};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL, PRAGMA};
use reqwest::StatusCode;
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;
use thiserror::Error;

/// Path of the delivery-list extract below the source base URL
pub const DELIVERY_PATH: &str = "data/VL06F.json";
/// Path of the statistics snapshot below the source base URL
pub const STATISTICS_PATH: &str = "data/statistics.json";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Failure at the fetch boundary. Both documents fail independently; the
/// UI shows a placeholder and waits for the next scheduled refresh.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
}

/// Completion of one background fetch, delivered to the UI loop
#[derive(Debug)]
pub enum FetchEvent {
    Deliveries(Result<Vec<DeliveryRecord>, FetchError>),
    Statistics(Result<StatsSnapshot, FetchError>),
}

/// Where the delivery and statistics documents live
#[derive(Debug, Clone)]
pub struct SourceConfig {
    base_url: String,
}

impl SourceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Base URL for raw files of a GitHub repository branch
    pub fn github_raw(user: &str, repo: &str, branch: &str) -> Self {
        Self::new(format!(
            "https://raw.githubusercontent.com/{user}/{repo}/{branch}"
        ))
    }

    /// Parse a `user/repo[@branch]` shorthand; the branch defaults to
    /// `main`.
    pub fn from_github_slug(slug: &str) -> Option<Self> {
        let (repo_part, branch) = match slug.split_once('@') {
            Some((repo_part, branch)) => (repo_part, branch),
            None => (slug, "main"),
        };
        let (user, repo) = repo_part.split_once('/')?;
        if user.is_empty() || repo.is_empty() || branch.is_empty() || repo.contains('/') {
            return None;
        }
        Some(Self::github_raw(user, repo, branch))
    }

    pub fn delivery_url(&self) -> String {
        format!("{}/{}", self.base_url, DELIVERY_PATH)
    }

    pub fn statistics_url(&self) -> String {
        format!("{}/{}", self.base_url, STATISTICS_PATH)
    }
}

/// Build the shared HTTP client. Every request carries cache-bypass
/// headers so intermediaries never serve a stale extract.
pub fn build_client() -> Result<Client, FetchError> {
    let mut headers = HeaderMap::new();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache, no-store"));
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));

    Ok(Client::builder()
        .default_headers(headers)
        .timeout(REQUEST_TIMEOUT)
        .build()?)
}

/// Fetch both documents on a worker thread, posting each completion to
/// `tx` as it lands. Refreshes are never cancelled: overlapping workers
/// race and the receiver resolves them last-writer-wins.
pub fn spawn_refresh(client: Client, source: SourceConfig, tx: Sender<FetchEvent>) {
    thread::spawn(move || {
        tracing::debug!(url = %source.delivery_url(), "refreshing data");

        let deliveries = fetch_deliveries(&client, &source);
        if tx.send(FetchEvent::Deliveries(deliveries)).is_err() {
            return; // UI loop is gone
        }

        let statistics = fetch_statistics(&client, &source);
        let _ = tx.send(FetchEvent::Statistics(statistics));
    });
}

/// Fetch and normalize the delivery list
pub fn fetch_deliveries(
    client: &Client,
    source: &SourceConfig,
) -> Result<Vec<DeliveryRecord>, FetchError> {
    let raw: Vec<RawDelivery> = get_json(client, &source.delivery_url())?;
    Ok(raw.into_iter().map(DeliveryRecord::from).collect())
}

/// Fetch the statistics snapshot
pub fn fetch_statistics(
    client: &Client,
    source: &SourceConfig,
) -> Result<StatsSnapshot, FetchError> {
    get_json(client, &source.statistics_url())
}

fn get_json<T: serde::de::DeserializeOwned>(client: &Client, url: &str) -> Result<T, FetchError> {
    let response = client.get(url).send()?;
    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }
    Ok(response.json()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_source_urls() {
        let source = SourceConfig::new("https://example.com/warehouse");
        assert_eq!(
            source.delivery_url(),
            "https://example.com/warehouse/data/VL06F.json"
        );
        assert_eq!(
            source.statistics_url(),
            "https://example.com/warehouse/data/statistics.json"
        );
    }

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        let source = SourceConfig::new("https://example.com/warehouse//");
        assert_eq!(
            source.delivery_url(),
            "https://example.com/warehouse/data/VL06F.json"
        );
    }

    #[test]
    fn test_github_raw_base() {
        let source = SourceConfig::github_raw("acme", "warehouse-monitor", "main");
        assert_eq!(
            source.delivery_url(),
            "https://raw.githubusercontent.com/acme/warehouse-monitor/main/data/VL06F.json"
        );
    }

    #[test]
    fn test_github_slug_defaults_to_main() {
        let source = SourceConfig::from_github_slug("acme/warehouse-monitor").unwrap();
        assert_eq!(
            source.statistics_url(),
            "https://raw.githubusercontent.com/acme/warehouse-monitor/main/data/statistics.json"
        );
    }

    #[test]
    fn test_github_slug_with_branch() {
        let source = SourceConfig::from_github_slug("acme/warehouse-monitor@develop").unwrap();
        assert_eq!(
            source.delivery_url(),
            "https://raw.githubusercontent.com/acme/warehouse-monitor/develop/data/VL06F.json"
        );
    }

    #[test]
    fn test_invalid_github_slugs() {
        assert!(SourceConfig::from_github_slug("acme").is_none());
        assert!(SourceConfig::from_github_slug("/repo").is_none());
        assert!(SourceConfig::from_github_slug("acme/").is_none());
        assert!(SourceConfig::from_github_slug("acme/repo@").is_none());
        assert!(SourceConfig::from_github_slug("acme/repo/extra").is_none());
    }
}
