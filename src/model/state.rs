use std::fmt::Display;

use super::{Keyword, SearchOutcome, SearchResult};

/// A snapshot of the query pipeline output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QueryState {
    /// No search has settled yet.
    #[default]
    Idle,

    /// The latest search returned a result.
    Available {
        /// The keyword that was searched.
        keyword: Keyword,
        /// The result of the search.
        result: SearchResult,
    },

    /// The latest search failed.
    Failed {
        /// The keyword that was searched.
        keyword: Keyword,
    },
}

impl QueryState {
    /// Creates the state reached once the search for `keyword` settles.
    pub fn settled(keyword: Keyword, outcome: SearchOutcome) -> Self {
        match outcome {
            Some(result) => Self::Available { keyword, result },
            None => Self::Failed { keyword },
        }
    }

    /// Retrieves the current result, if any.
    pub fn result(&self) -> Option<&SearchResult> {
        match self {
            Self::Available { result, .. } => Some(result),
            Self::Idle | Self::Failed { .. } => None,
        }
    }
}

impl Display for QueryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Available { keyword, result } => write!(
                f,
                "Available: keyword={keyword}, repositories={}, total_count={}",
                result.repositories().len(),
                result.total_count()
            ),
            Self::Failed { keyword } => write!(f, "Failed: keyword={keyword}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settled_with_result_is_available() {
        let state = QueryState::settled("octo".into(), Some(SearchResult::dummy()));

        assert_eq!(Some(&SearchResult::dummy()), state.result());
    }

    #[test]
    fn settled_without_result_is_failed() {
        let state = QueryState::settled("octo".into(), None);

        assert_eq!(
            QueryState::Failed {
                keyword: "octo".into()
            },
            state
        );
        assert_eq!(None, state.result());
    }
}
