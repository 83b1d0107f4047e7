use crate::{Keyword, SearchOutcome};

/// A trait for searching repositories where failure is a normal outcome.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RepositorySearcher: Sync + Send {
    /// Searches repositories matching the keyword, returning `None` if the search failed.
    ///
    /// Dropping the returned future abandons the search.
    async fn search(&self, keyword: &Keyword) -> SearchOutcome;
}
