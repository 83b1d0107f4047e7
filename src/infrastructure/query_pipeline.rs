use std::sync::Arc;

use anyhow::Context;
use log::{debug, info};
use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
    time::Instant,
};

use crate::{
    Debouncer, DistinctUntilChanged, DropFirst, Keyword, PipelineConfig, QueryState,
    RepositorySearcher, SearchFuture, StdResult, SwitchLatest, wait_until,
};

/// The reactive core turning keyword edits into the latest search state.
///
/// Edits go through drop-first, debounce, distinct-until-changed and switch-to-latest
/// stages. Settled searches are published to a replay cell shared by all subscribers.
pub struct QueryPipeline {
    /// The searcher used for every forwarded keyword.
    searcher: Arc<dyn RepositorySearcher>,

    /// The pipeline configuration.
    config: PipelineConfig,
}

impl QueryPipeline {
    /// Creates a new `QueryPipeline` instance with the given searcher.
    pub fn new(searcher: Arc<dyn RepositorySearcher>, config: PipelineConfig) -> Self {
        Self { searcher, config }
    }

    /// Spawns the pipeline on the given stream of field contents.
    ///
    /// The first item received is always discarded: callers send the initial content of the
    /// field, usually blank, before any edit. The pipeline runs until the stream closes and
    /// the last search settles.
    pub fn spawn(self, keywords: mpsc::Receiver<String>) -> QueryPipelineHandle {
        let (states_tx, states_rx) = watch::channel(QueryState::Idle);
        let task = tokio::spawn(self.run(keywords, states_tx));

        QueryPipelineHandle {
            states: states_rx,
            task,
        }
    }

    fn start_search(&self, keyword: &Keyword) -> SearchFuture {
        let searcher = Arc::clone(&self.searcher);
        let keyword = keyword.clone();

        Box::pin(async move { searcher.search(&keyword).await })
    }

    async fn run(self, mut keywords: mpsc::Receiver<String>, states: watch::Sender<QueryState>) {
        let mut drop_first = DropFirst::default();
        let mut debouncer = Debouncer::new(self.config.debounce);
        let mut distinct = DistinctUntilChanged::default();
        let mut switch = SwitchLatest::default();
        let mut is_input_open = true;

        loop {
            let mut forwarded = None;
            let debounce_deadline = debouncer.deadline();
            tokio::select! {
                received = keywords.recv(), if is_input_open => match received {
                    Some(content) => {
                        if let Some(keyword) = drop_first.accept(Keyword::from(content)) {
                            debouncer.push(keyword, Instant::now());
                        }
                    }
                    None => {
                        debug!("Keyword input closed");
                        is_input_open = false;
                        forwarded = debouncer.flush();
                    }
                },
                _ = wait_until(debounce_deadline) => {
                    forwarded = debouncer.take_due(Instant::now());
                }
                (keyword, outcome) = switch.settled() => {
                    let state = QueryState::settled(keyword, outcome);
                    info!("Search settled: {state}");
                    states.send_replace(state);
                }
            }

            if let Some(keyword) = forwarded.and_then(|keyword| distinct.accept(keyword)) {
                debug!("Forwarding keyword '{keyword}'");
                switch.start(keyword.clone(), self.start_search(&keyword));
            }

            if !is_input_open && !debouncer.is_pending() && !switch.is_fetching() {
                break;
            }
        }

        debug!("Query pipeline stopped");
    }
}

/// A handle on a running `QueryPipeline`.
pub struct QueryPipelineHandle {
    states: watch::Receiver<QueryState>,
    task: JoinHandle<()>,
}

impl QueryPipelineHandle {
    /// Subscribes to the pipeline output, starting from the latest state.
    pub fn subscribe(&self) -> watch::Receiver<QueryState> {
        self.states.clone()
    }

    /// Retrieves the latest state.
    pub fn latest(&self) -> QueryState {
        self.states.borrow().clone()
    }

    /// Waits for the pipeline to stop.
    pub async fn join(self) -> StdResult<()> {
        self.task.await.with_context(|| "Query pipeline task failed")
    }
}
