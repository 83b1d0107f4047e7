//! A debounced, race-free GitHub repository search client.
//!
//! Keyword edits flow through a [`QueryPipeline`] which searches the latest keyword with a
//! [`RepositorySearcher`] and replays the latest [`QueryState`] to any number of
//! subscribers. A [`Presenter`] projects that state into two [`DisplaySink`]s.

mod infrastructure;
mod interface;
mod model;

pub use infrastructure::*;
pub use interface::*;
pub use model::*;
