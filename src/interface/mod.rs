mod fetcher;
mod searcher;
mod sink;

pub use fetcher::*;
pub use searcher::*;
pub use sink::*;
