use std::time::Duration;

use anyhow::Context;
use log::debug;
use reqwest::Client;

use crate::{FetcherError, Keyword, ResponseParser, SearchFetcher, SearchResult, StdResult};

/// The REST production endpoint for GitHub.
pub const GITHUB_REST_ENDPOINT: &str = "https://api.github.com";

const SEARCH_REPOSITORIES_PATH: &str = "/search/repositories";

/// GitHub rejects requests without a user agent.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Fetches repository search results from the GitHub REST API.
pub struct RestFetcher {
    client: Client,
    search_url: String,
}

impl RestFetcher {
    /// Creates a new `RestFetcher` instance targeting the given API endpoint.
    ///
    /// A request not completed within `request_timeout` fails as a remote error.
    pub fn try_new(endpoint: &str, request_timeout: Duration) -> StdResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(request_timeout)
            .build()
            .with_context(|| "Failed to build HTTP client")?;
        let search_url = format!(
            "{}{SEARCH_REPOSITORIES_PATH}",
            endpoint.trim_end_matches('/')
        );

        Ok(Self { client, search_url })
    }

    async fn fetch_payload(&self, keyword: &Keyword) -> Result<serde_json::Value, FetcherError> {
        let response = self
            .client
            .get(&self.search_url)
            .query(&[("q", keyword.as_str())])
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| FetcherError::Remote(e.to_string()))?;
        let body = response
            .text()
            .await
            .map_err(|e| FetcherError::Remote(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| FetcherError::Decode(e.to_string()))
    }
}

#[async_trait::async_trait]
impl SearchFetcher for RestFetcher {
    async fn fetch(&self, keyword: &Keyword) -> StdResult<SearchResult> {
        debug!("Fetching repositories for keyword '{keyword}'");
        let payload = self.fetch_payload(keyword).await?;
        let result = ResponseParser::parse(&payload).map_err(FetcherError::from)?;

        Ok(result)
    }
}
