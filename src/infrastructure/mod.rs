mod fetcher_rest;
mod pipeline_stages;
mod presenter;
mod query_pipeline;
mod search_client;
mod sink_console;

pub use fetcher_rest::*;
pub use pipeline_stages::*;
pub use presenter::*;
pub use query_pipeline::*;
pub use search_client::*;
pub use sink_console::*;
