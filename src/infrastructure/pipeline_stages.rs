use std::{future::Future, pin::Pin, time::Duration};

use log::debug;
use tokio::time::{Instant, sleep_until};

use crate::{Keyword, SearchOutcome};

/// A search which has been started but has not settled yet.
pub type SearchFuture = Pin<Box<dyn Future<Output = SearchOutcome> + Send>>;

/// Discards the very first keyword, which is the blank initial content of the field.
#[derive(Debug, Default)]
pub struct DropFirst {
    has_seen_first: bool,
}

impl DropFirst {
    /// Forwards the keyword unless it is the first one ever received.
    pub fn accept(&mut self, keyword: Keyword) -> Option<Keyword> {
        if self.has_seen_first {
            return Some(keyword);
        }
        self.has_seen_first = true;
        debug!("Dropped initial keyword '{keyword}'");

        None
    }
}

/// Holds back the latest keyword until a quiet period has elapsed without newer edits.
#[derive(Debug)]
pub struct Debouncer {
    /// The quiet period.
    quiet_period: Duration,

    /// The keyword waiting for the quiet period, with its deadline.
    pending: Option<(Keyword, Instant)>,
}

impl Debouncer {
    /// Creates a new `Debouncer` instance with the given quiet period.
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
        }
    }

    /// Replaces the pending keyword and resets the deadline.
    pub fn push(&mut self, keyword: Keyword, now: Instant) {
        if let Some((superseded, _)) = &self.pending {
            debug!("Debounced keyword '{superseded}'");
        }
        self.pending = Some((keyword, now + self.quiet_period));
    }

    /// Retrieves the deadline of the pending keyword.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    /// Returns whether a keyword is waiting for its quiet period.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Takes the pending keyword if its deadline has been reached.
    pub fn take_due(&mut self, now: Instant) -> Option<Keyword> {
        match self.deadline() {
            Some(deadline) if deadline <= now => self.flush(),
            _ => None,
        }
    }

    /// Takes the pending keyword regardless of its deadline.
    pub fn flush(&mut self) -> Option<Keyword> {
        self.pending.take().map(|(keyword, _)| keyword)
    }
}

/// Suppresses a keyword equal to the last forwarded one.
#[derive(Debug, Default)]
pub struct DistinctUntilChanged {
    last_forwarded: Option<Keyword>,
}

impl DistinctUntilChanged {
    /// Forwards the keyword if it differs from the last forwarded keyword.
    pub fn accept(&mut self, keyword: Keyword) -> Option<Keyword> {
        if self.last_forwarded.as_ref() == Some(&keyword) {
            debug!("Skipped unchanged keyword '{keyword}'");
            return None;
        }
        self.last_forwarded = Some(keyword.clone());

        Some(keyword)
    }
}

struct InFlightSearch {
    keyword: Keyword,
    search: SearchFuture,
}

/// Keeps at most one search in flight: starting a search abandons the previous one.
#[derive(Default)]
pub struct SwitchLatest {
    in_flight: Option<InFlightSearch>,
}

impl SwitchLatest {
    /// Starts the search for the keyword, dropping any search still in flight.
    ///
    /// Returns the keyword of the abandoned search, if any.
    pub fn start(&mut self, keyword: Keyword, search: SearchFuture) -> Option<Keyword> {
        let superseded = self
            .in_flight
            .replace(InFlightSearch { keyword, search })
            .map(|in_flight| in_flight.keyword);
        if let Some(superseded) = &superseded {
            debug!("Abandoned search for keyword '{superseded}'");
        }

        superseded
    }

    /// Returns whether a search is in flight.
    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Waits for the in-flight search to settle and returns its keyword and outcome.
    ///
    /// Pends forever when nothing is in flight. Cancel safe: dropping the returned future
    /// leaves the in-flight search untouched.
    pub async fn settled(&mut self) -> (Keyword, SearchOutcome) {
        let Some(in_flight) = self.in_flight.as_mut() else {
            return std::future::pending().await;
        };
        let outcome = in_flight.search.as_mut().await;
        let keyword = in_flight.keyword.clone();
        self.in_flight = None;

        (keyword, outcome)
    }
}

/// Waits until the deadline, or forever when there is none.
pub async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    };

    use tokio::time::sleep;

    use crate::SearchResult;

    use super::*;

    mod drop_first {
        use super::*;

        #[test]
        fn drops_only_the_first_keyword() {
            let mut stage = DropFirst::default();

            assert_eq!(None, stage.accept("".into()));
            assert_eq!(Some(Keyword::from("")), stage.accept("".into()));
            assert_eq!(Some(Keyword::from("octo")), stage.accept("octo".into()));
        }
    }

    mod debouncer {
        use super::*;

        #[test]
        fn keyword_is_due_after_quiet_period() {
            let start = Instant::now();
            let mut stage = Debouncer::new(Duration::from_millis(300));

            stage.push("octo".into(), start);

            assert_eq!(Some(start + Duration::from_millis(300)), stage.deadline());
            assert_eq!(None, stage.take_due(start + Duration::from_millis(299)));
            assert_eq!(
                Some(Keyword::from("octo")),
                stage.take_due(start + Duration::from_millis(300))
            );
            assert!(!stage.is_pending());
        }

        #[test]
        fn newer_keyword_resets_deadline() {
            let start = Instant::now();
            let mut stage = Debouncer::new(Duration::from_millis(300));

            stage.push("o".into(), start);
            stage.push("oc".into(), start + Duration::from_millis(100));
            stage.push("oct".into(), start + Duration::from_millis(150));

            assert_eq!(None, stage.take_due(start + Duration::from_millis(300)));
            assert_eq!(
                Some(Keyword::from("oct")),
                stage.take_due(start + Duration::from_millis(450))
            );
        }

        #[test]
        fn flush_takes_pending_keyword_immediately() {
            let start = Instant::now();
            let mut stage = Debouncer::new(Duration::from_millis(300));

            assert_eq!(None, stage.flush());
            stage.push("octo".into(), start);

            assert_eq!(Some(Keyword::from("octo")), stage.flush());
            assert_eq!(None, stage.deadline());
        }
    }

    mod distinct_until_changed {
        use super::*;

        #[test]
        fn suppresses_consecutive_duplicates_only() {
            let mut stage = DistinctUntilChanged::default();

            assert_eq!(Some(Keyword::from("a")), stage.accept("a".into()));
            assert_eq!(None, stage.accept("a".into()));
            assert_eq!(Some(Keyword::from("b")), stage.accept("b".into()));
            assert_eq!(Some(Keyword::from("a")), stage.accept("a".into()));
        }
    }

    mod switch_latest {
        use super::*;

        fn delayed(delay: Duration, outcome: SearchOutcome) -> SearchFuture {
            Box::pin(async move {
                sleep(delay).await;
                outcome
            })
        }

        #[tokio::test(start_paused = true)]
        async fn settles_the_in_flight_search() {
            let mut stage = SwitchLatest::default();

            assert_eq!(
                None,
                stage.start(
                    "a".into(),
                    delayed(Duration::from_millis(100), Some(SearchResult::dummy()))
                )
            );
            assert!(stage.is_fetching());
            let (keyword, outcome) = stage.settled().await;

            assert_eq!(Keyword::from("a"), keyword);
            assert_eq!(Some(SearchResult::dummy()), outcome);
            assert!(!stage.is_fetching());
        }

        #[tokio::test(start_paused = true)]
        async fn newer_search_abandons_previous_one() {
            let slow_search_completed = Arc::new(AtomicBool::new(false));
            let mut stage = SwitchLatest::default();
            stage.start("a".into(), {
                let slow_search_completed = Arc::clone(&slow_search_completed);
                Box::pin(async move {
                    sleep(Duration::from_millis(500)).await;
                    slow_search_completed.store(true, Ordering::SeqCst);
                    Some(SearchResult::dummy())
                })
            });

            let superseded = stage.start("b".into(), delayed(Duration::from_millis(100), None));
            let (keyword, outcome) = stage.settled().await;
            sleep(Duration::from_millis(1000)).await;

            assert_eq!(Some(Keyword::from("a")), superseded);
            assert_eq!(Keyword::from("b"), keyword);
            assert_eq!(None, outcome);
            assert!(!slow_search_completed.load(Ordering::SeqCst));
        }

        #[tokio::test(start_paused = true)]
        async fn dropping_settled_future_keeps_search_in_flight() {
            let mut stage = SwitchLatest::default();
            stage.start(
                "a".into(),
                delayed(Duration::from_millis(200), Some(SearchResult::dummy())),
            );

            tokio::select! {
                _ = stage.settled() => panic!("Search should not have settled yet"),
                _ = sleep(Duration::from_millis(100)) => {}
            }

            assert!(stage.is_fetching());
            let (keyword, outcome) = stage.settled().await;
            assert_eq!(Keyword::from("a"), keyword);
            assert_eq!(Some(SearchResult::dummy()), outcome);
        }
    }
}
