use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use super::{Repository, RepositoryName, SearchResult, StarsCounter};

/// Error returned when a search payload does not have the expected shape.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("Malformed search payload: {0}")]
pub struct ParseError(String);

/// The top level of a repository search payload.
///
/// Items are kept untyped here so that a malformed entry only drops itself.
#[derive(Deserialize, Debug)]
struct SearchEnvelope {
    items: Vec<Map<String, Value>>,
    total_count: u64,
}

#[derive(Deserialize, Debug)]
struct RepositoryItem {
    full_name: RepositoryName,
    stargazers_count: StarsCounter,
}

impl RepositoryItem {
    fn into_repository(self) -> Option<Repository> {
        if self.full_name.is_empty() {
            return None;
        }

        Some(Repository::new(&self.full_name, *self.stargazers_count))
    }
}

/// Decodes raw repository search payloads into typed results.
pub struct ResponseParser;

impl ResponseParser {
    /// Parses a raw payload into a `SearchResult`.
    ///
    /// Fails when the payload is not an object holding an `items` list of objects and a
    /// non-negative integer `total_count`. Items lacking a valid `full_name` or
    /// `stargazers_count` are skipped.
    pub fn parse(raw: &Value) -> Result<SearchResult, ParseError> {
        let envelope = SearchEnvelope::deserialize(raw).map_err(|e| ParseError(e.to_string()))?;
        let repositories = envelope
            .items
            .into_iter()
            .filter_map(|item| serde_json::from_value::<RepositoryItem>(Value::Object(item)).ok())
            .filter_map(RepositoryItem::into_repository)
            .collect();

        Ok(SearchResult::new(repositories, envelope.total_count))
    }
}
