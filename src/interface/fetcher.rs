use crate::{Keyword, SearchResult, StdResult};

/// A trait for fetching repository search results from the API.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SearchFetcher: Sync + Send {
    /// Fetches one page of repositories matching the keyword.
    async fn fetch(&self, keyword: &Keyword) -> StdResult<SearchResult>;
}
