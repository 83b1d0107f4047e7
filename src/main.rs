use std::{sync::Arc, time::Duration};

use clap::Parser;
use log::{debug, info};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc,
};

use github_search::{
    ConsoleSink, DEFAULT_REQUEST_TIMEOUT, GITHUB_REST_ENDPOINT, PipelineConfig, Presenter,
    QueryPipeline, RepositorySearcher, RestFetcher, SearchClient, StdResult,
};

/// Number of field edits buffered before the input waits for the pipeline.
const KEYWORD_BUFFER: usize = 64;

/// Interactive GitHub repository search: each line read from stdin is the new content of
/// the search field.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Base URL of the GitHub REST API
    #[arg(short, long, env = "GITHUB_API_ENDPOINT", default_value = GITHUB_REST_ENDPOINT)]
    endpoint: String,

    /// Quiet period after an edit before the keyword is searched, in milliseconds
    #[arg(short, long, env = "SEARCH_DEBOUNCE_MS", default_value_t = 300)]
    debounce_ms: u64,

    /// Time a search request may take before it counts as failed, in seconds
    #[arg(
        short,
        long,
        env = "SEARCH_REQUEST_TIMEOUT_SECS",
        default_value_t = DEFAULT_REQUEST_TIMEOUT.as_secs()
    )]
    request_timeout_secs: u64,
}

#[tokio::main]
async fn main() -> StdResult<()> {
    env_logger::init();
    info!("Starting repository search");
    let args = Args::parse();
    debug!("Arguments: {args:?}");

    let config = PipelineConfig::new(Duration::from_millis(args.debounce_ms));
    let (keywords_tx, keywords_rx) = mpsc::channel(KEYWORD_BUFFER);
    let pipeline = QueryPipeline::new(build_searcher(&args)?, config).spawn(keywords_rx);
    let presenter = Presenter::new(
        Arc::new(ConsoleSink::new("repositories")),
        Arc::new(ConsoleSink::new("count")),
    );
    let projections = presenter.spawn(pipeline.subscribe());

    // The search field starts out blank.
    keywords_tx.send(String::new()).await?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        keywords_tx.send(line).await?;
    }
    drop(keywords_tx);

    pipeline.join().await?;
    projections.join().await?;
    info!("Repository search completed");

    Ok(())
}

fn build_searcher(args: &Args) -> StdResult<Arc<dyn RepositorySearcher>> {
    let fetcher = Arc::new(RestFetcher::try_new(
        &args.endpoint,
        Duration::from_secs(args.request_timeout_secs),
    )?);

    Ok(Arc::new(SearchClient::new(fetcher)))
}
