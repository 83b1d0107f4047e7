use std::sync::Arc;

use anyhow::Context;
use log::debug;
use tokio::{sync::watch, task::JoinHandle};

use crate::{DisplaySink, QueryState, StdResult};

/// The count text displayed until the first search settles.
pub const COUNT_PLACEHOLDER: &str = "Input Repository Name";

/// Projects the pipeline output into a repository listing and a total count.
pub struct Presenter {
    listing_sink: Arc<dyn DisplaySink>,
    count_sink: Arc<dyn DisplaySink>,
}

impl Presenter {
    /// Creates a new `Presenter` instance writing into the given sinks.
    pub fn new(listing_sink: Arc<dyn DisplaySink>, count_sink: Arc<dyn DisplaySink>) -> Self {
        Self {
            listing_sink,
            count_sink,
        }
    }

    /// Renders one `<name>(<stars>)` line per repository, in server order.
    pub fn render_listing(state: &QueryState) -> String {
        state
            .result()
            .map(|result| {
                result
                    .repositories()
                    .iter()
                    .map(|repository| format!("{repository}\n"))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Renders the total count, or the placeholder while no search has settled.
    pub fn render_count(state: &QueryState) -> String {
        match state {
            QueryState::Idle => COUNT_PLACEHOLDER.to_string(),
            QueryState::Available { result, .. } => {
                format!("TotalCount: {}", result.total_count())
            }
            QueryState::Failed { .. } => "TotalCount: 0".to_string(),
        }
    }

    /// Spawns both projections, each on its own subscription to the given states.
    ///
    /// The listing is left untouched until the first search settles, while the count starts
    /// with the placeholder.
    pub fn spawn(&self, states: watch::Receiver<QueryState>) -> PresenterHandle {
        PresenterHandle {
            listing: project(
                "listing",
                states.clone(),
                Arc::clone(&self.listing_sink),
                |state| match state {
                    QueryState::Idle => None,
                    _ => Some(Self::render_listing(state)),
                },
            ),
            count: project(
                "count",
                states,
                Arc::clone(&self.count_sink),
                |state| Some(Self::render_count(state)),
            ),
        }
    }
}

fn project(
    name: &'static str,
    mut states: watch::Receiver<QueryState>,
    sink: Arc<dyn DisplaySink>,
    render: fn(&QueryState) -> Option<String>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            let text = render(&states.borrow_and_update());
            if let Some(text) = text {
                sink.display(&text);
            }
            if states.changed().await.is_err() {
                break;
            }
        }
        debug!("Projection '{name}' stopped");
    })
}

/// A handle on the running projections of a `Presenter`.
pub struct PresenterHandle {
    listing: JoinHandle<()>,
    count: JoinHandle<()>,
}

impl PresenterHandle {
    /// Waits for both projections to stop, which happens once the pipeline stops.
    pub async fn join(self) -> StdResult<()> {
        self.listing
            .await
            .with_context(|| "Listing projection task failed")?;
        self.count
            .await
            .with_context(|| "Count projection task failed")?;

        Ok(())
    }
}
