//! Search orchestration: validation, loading state, and the in-flight
//! submission policy.
//!
//! The orchestrator owns the session's state machine:
//! `Idle → Loading → Success | Failed`, resetting to `Loading` on the next
//! submission. Users only ever see one of two messages — the validation
//! message for blank input, or the generic failure message; the specific
//! cause goes to the log.

use std::sync::Arc;

use tokio::task::JoinHandle;

use mrisafe_core::{SafetySearch, SearchError};
use mrisafe_types::{ImplantName, SearchResult};

pub const VALIDATION_ERROR_MSG: &str = "Please enter an implant name to search.";
pub const GENERIC_ERROR_MSG: &str =
    "An error occurred while fetching data. Please check your connection and API key, then try again.";

/// Where a search session currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    Idle,
    Loading,
    Success(SearchResult),
    Failed(String),
}

/// What to do when a submission arrives while another search is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InFlightPolicy {
    /// Abort the stale search and run the new one; last intent wins
    CancelPrevious,
    /// Keep the running search and drop the new submission
    IgnoreNew,
}

/// Drives one search session against any [`SafetySearch`] lookup.
pub struct SearchOrchestrator<S> {
    lookup: Arc<S>,
    policy: InFlightPolicy,
    state: SearchState,
    in_flight: Option<JoinHandle<Result<SearchResult, SearchError>>>,
}

impl<S> SearchOrchestrator<S>
where
    S: SafetySearch + 'static,
{
    pub fn new(lookup: Arc<S>, policy: InFlightPolicy) -> Self {
        Self {
            lookup,
            policy,
            state: SearchState::Idle,
            in_flight: None,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Submits a query.
    ///
    /// Blank input fails immediately with the validation message and makes
    /// no network call. Otherwise prior result or error state is cleared,
    /// the session enters `Loading`, and the lookup runs as a spawned task;
    /// a still-running previous task is handled per the configured
    /// [`InFlightPolicy`].
    pub fn submit(&mut self, query: &str) {
        let name = match ImplantName::new(query) {
            Ok(name) => name,
            Err(_) => {
                self.state = SearchState::Failed(VALIDATION_ERROR_MSG.into());
                return;
            }
        };

        if let Some(handle) = &self.in_flight {
            if !handle.is_finished() {
                match self.policy {
                    InFlightPolicy::IgnoreNew => {
                        tracing::debug!(implant = %name, "search already in flight, ignoring");
                        return;
                    }
                    InFlightPolicy::CancelPrevious => {
                        tracing::debug!("cancelling in-flight search");
                        handle.abort();
                    }
                }
            }
        }

        self.state = SearchState::Loading;
        let lookup = Arc::clone(&self.lookup);
        self.in_flight = Some(tokio::spawn(async move { lookup.search(&name).await }));
    }

    /// Awaits the in-flight lookup, if any, and resolves the session to
    /// `Success` or `Failed`. Lookup failures are logged in full and
    /// reported to the user as the generic message only.
    pub async fn wait(&mut self) -> &SearchState {
        if let Some(handle) = self.in_flight.take() {
            self.state = match handle.await {
                Ok(Ok(result)) => SearchState::Success(result),
                Ok(Err(err)) => {
                    tracing::error!(error = %err, "search failed");
                    SearchState::Failed(GENERIC_ERROR_MSG.into())
                }
                Err(join_err) => {
                    tracing::error!(error = %join_err, "search task did not complete");
                    SearchState::Failed(GENERIC_ERROR_MSG.into())
                }
            };
        }
        &self.state
    }
}
