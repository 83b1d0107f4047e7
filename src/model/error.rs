use thiserror::Error;

use super::ParseError;

/// The standard result type used throughout the crate.
pub type StdResult<T> = Result<T, anyhow::Error>;

/// Fetcher error
#[derive(Error, Debug)]
pub enum FetcherError {
    /// The request could not be sent or the server answered with a non success status
    #[error("Remote error: {0}")]
    Remote(String),
    /// The response body is not valid JSON
    #[error("Decoding error: {0}")]
    Decode(String),
    /// The response body does not have the shape of a search payload
    #[error("Parsing error: {0}")]
    Parse(#[from] ParseError),
}
