use std::{fmt::Display, ops::Deref};

use serde::Deserialize;

/// The full content of the search field after an edit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Keyword(pub String);

impl Deref for Keyword {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Keyword {
    fn from(keyword: String) -> Self {
        Self(keyword)
    }
}

impl From<&str> for Keyword {
    fn from(keyword: &str) -> Self {
        Self(keyword.to_string())
    }
}

/// The full name of a repository, in the `owner/repo` form.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(pub String);

impl Deref for RepositoryName {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for RepositoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The number of stars a repository has.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarsCounter(pub u64);

impl Deref for StarsCounter {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for StarsCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A repository found by a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// The full name of the repository.
    name: RepositoryName,

    /// The number of stars the repository has.
    total_stars: StarsCounter,
}

impl Repository {
    /// Creates a new `Repository` instance.
    pub fn new(name: &str, total_stars: u64) -> Self {
        Self {
            name: RepositoryName(name.to_string()),
            total_stars: StarsCounter(total_stars),
        }
    }

    /// Retrieves the full name of the repository.
    pub fn name(&self) -> &RepositoryName {
        &self.name
    }

    /// Retrieves the total stars of the repository.
    pub fn total_stars(&self) -> &StarsCounter {
        &self.total_stars
    }
}

impl Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name, self.total_stars)
    }
}

/// One page of repositories returned by a search, with the server-reported total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The decodable repositories of the page, in server order.
    repositories: Vec<Repository>,

    /// The total number of matches reported by the server.
    total_count: u64,
}

impl SearchResult {
    /// Creates a new `SearchResult` instance.
    pub fn new(repositories: Vec<Repository>, total_count: u64) -> Self {
        Self {
            repositories,
            total_count,
        }
    }

    /// Retrieves the list of repositories.
    pub fn repositories(&self) -> &[Repository] {
        &self.repositories
    }

    /// Retrieves the total number of matches.
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    #[cfg(test)]
    /// Creates a dummy `SearchResult` instance for testing purposes.
    pub fn dummy() -> Self {
        Self::new(vec![Repository::new("octo/a", 5)], 1)
    }
}

/// The outcome of a single search: `None` when the search failed for any reason.
pub type SearchOutcome = Option<SearchResult>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_display_uses_name_and_stars() {
        let repository = Repository::new("rust-lang/rust", 42);

        assert_eq!("rust-lang/rust(42)", repository.to_string());
    }

    #[test]
    fn keywords_compare_by_value() {
        assert_eq!(Keyword::from("octo"), Keyword::from("octo".to_string()));
        assert_ne!(Keyword::from("octo"), Keyword::from("octo "));
    }

    #[test]
    fn total_count_may_exceed_page_size() {
        let result = SearchResult::new(vec![Repository::new("octo/a", 5)], 1200);

        assert_eq!(1, result.repositories().len());
        assert_eq!(1200, result.total_count());
    }
}
