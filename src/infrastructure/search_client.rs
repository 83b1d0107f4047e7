use std::sync::Arc;

use log::{info, warn};

use crate::{Keyword, RepositorySearcher, SearchFetcher, SearchOutcome};

/// A searcher issuing one fetch per keyword and treating any failure as an empty outcome.
pub struct SearchClient {
    /// The fetcher performing the request.
    fetcher: Arc<dyn SearchFetcher>,
}

impl SearchClient {
    /// Creates a new `SearchClient` instance with the given fetcher.
    pub fn new(fetcher: Arc<dyn SearchFetcher>) -> Self {
        Self { fetcher }
    }
}

#[async_trait::async_trait]
impl RepositorySearcher for SearchClient {
    async fn search(&self, keyword: &Keyword) -> SearchOutcome {
        info!("Searching repositories for keyword '{keyword}'");
        match self.fetcher.fetch(keyword).await {
            Ok(result) => {
                info!(
                    "Found {} repositories for keyword '{keyword}' (total_count={})",
                    result.repositories().len(),
                    result.total_count()
                );
                Some(result)
            }
            Err(e) => {
                warn!("Search for keyword '{keyword}' failed: {e:#}");
                None
            }
        }
    }
}
